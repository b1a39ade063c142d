//! Core types for parlay construction and evaluation

use crate::error::EngineError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tradable binary-outcome market.
///
/// `yes_price` and `no_price` are market-implied probabilities in `[0, 1]`.
/// They are not required to sum to exactly 1 (markets can be mispriced);
/// the engine uses whichever side a leg selects as that leg's probability.
/// Markets are never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub id: String,
    pub question: String,
    pub yes_price: Decimal,
    pub no_price: Decimal,
    /// Originating venue ("polymarket", "demo", ...).
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl Market {
    /// Current price of the given outcome side.
    pub fn price(&self, side: OutcomeSide) -> Decimal {
        match side {
            OutcomeSide::Yes => self.yes_price,
            OutcomeSide::No => self.no_price,
        }
    }
}

/// Side of a binary market bound into a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeSide {
    Yes,
    No,
}

impl fmt::Display for OutcomeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeSide::Yes => write!(f, "yes"),
            OutcomeSide::No => write!(f, "no"),
        }
    }
}

impl FromStr for OutcomeSide {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(OutcomeSide::Yes),
            "no" => Ok(OutcomeSide::No),
            other => Err(EngineError::Validation(format!(
                "outcome must be 'yes' or 'no', got '{}'",
                other
            ))),
        }
    }
}

/// One selected outcome bound into the current parlay.
///
/// `probability` is locked at add time and never refreshed, even if the
/// underlying market's price moves. Re-adding after removal re-snapshots.
/// The embedded market is likewise the snapshot seen at selection time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParlayLeg {
    /// Unique within the current leg collection.
    pub id: String,
    pub market: Market,
    pub outcome: OutcomeSide,
    pub probability: Decimal,
    pub added_at: DateTime<Utc>,
}

/// Decimal odds: the reciprocal of the combined probability.
///
/// A zero-probability parlay has no finite fair odds. That case is a
/// typed variant rather than an IEEE infinity, so renderers and
/// serializers are forced to handle it explicitly instead of letting a
/// sentinel number leak through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ImpliedOdds {
    Finite(Decimal),
    Unbounded,
}

impl ImpliedOdds {
    pub fn as_finite(&self) -> Option<Decimal> {
        match self {
            ImpliedOdds::Finite(odds) => Some(*odds),
            ImpliedOdds::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, ImpliedOdds::Unbounded)
    }
}

impl fmt::Display for ImpliedOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpliedOdds::Finite(odds) => write!(f, "{:.2}", odds),
            ImpliedOdds::Unbounded => write!(f, "∞"),
        }
    }
}

/// Discrete risk bucket derived from combined probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Extreme => write!(f, "extreme"),
        }
    }
}

/// Action suggested to the user for the evaluated parlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Avoid,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::StrongBuy => write!(f, "strong_buy"),
            Recommendation::Buy => write!(f, "buy"),
            Recommendation::Hold => write!(f, "hold"),
            Recommendation::Avoid => write!(f, "avoid"),
        }
    }
}

/// Derived, stateless output of the evaluator.
///
/// Recomputed from `(legs, stake)` on every change; never stored as
/// independent state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParlayResult {
    pub combined_probability: Decimal,
    pub implied_odds: ImpliedOdds,
    /// `stake × implied_odds`; `None` exactly when the odds are unbounded.
    pub potential_payout: Option<Decimal>,
    pub expected_value: Decimal,
    pub risk_level: RiskLevel,
    pub recommendation: Recommendation,
}

impl ParlayResult {
    /// The zero result returned for an empty leg set.
    ///
    /// "Hold" here signals "nothing to evaluate", not a judgement.
    pub fn empty() -> Self {
        Self {
            combined_probability: Decimal::ZERO,
            implied_odds: ImpliedOdds::Finite(Decimal::ZERO),
            potential_payout: Some(Decimal::ZERO),
            expected_value: Decimal::ZERO,
            risk_level: RiskLevel::Low,
            recommendation: Recommendation::Hold,
        }
    }
}
