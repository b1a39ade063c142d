//! Parlay evaluation: combined probability, odds, payout, EV, risk
//!
//! Pure and synchronous; safe to call on every selection or stake change.


use crate::config::EvaluatorConfig;
use crate::types::{ImpliedOdds, ParlayLeg, ParlayResult, Recommendation, RiskLevel};
use rust_decimal::Decimal;

/// Evaluates a leg collection plus stake into a [`ParlayResult`].
///
/// Thresholds come from [`EvaluatorConfig`]; the defaults match the
/// production decision tables.
#[derive(Debug, Clone)]
pub struct ParlayEvaluator {
    config: EvaluatorConfig,
}

impl ParlayEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Evaluate at fair odds (the reciprocal of the combined probability).
    ///
    /// Legs are treated as statistically independent, so the combined
    /// probability is the plain product of the per-leg snapshots.
    /// Probabilities outside `[0, 1]` from bad upstream data propagate
    /// unclamped rather than being silently hidden.
    ///
    /// At fair odds the expected value collapses to zero for any parlay
    /// with a nonzero win probability, because the payout is priced from
    /// the same probability the EV weighs it by. Use
    /// [`evaluate_with_quoted_odds`](Self::evaluate_with_quoted_odds) to
    /// price the payout from an external quote instead, which makes the
    /// EV informative.
    pub fn evaluate(&self, legs: &[ParlayLeg], stake: Decimal) -> ParlayResult {
        if legs.is_empty() {
            return ParlayResult::empty();
        }
        let combined = Self::combined_probability(legs);
        let odds = if combined.is_zero() {
            ImpliedOdds::Unbounded
        } else {
            ImpliedOdds::Finite(Decimal::ONE / combined)
        };
        self.finish(combined, odds, stake)
    }

    /// Evaluate against an externally quoted decimal odds figure.
    ///
    /// The payout comes from the quote while the win probability still
    /// comes from the legs, so a mispriced quote shows up as a nonzero
    /// expected value. An empty leg set still yields the zero result.
    pub fn evaluate_with_quoted_odds(
        &self,
        legs: &[ParlayLeg],
        stake: Decimal,
        quoted_odds: Decimal,
    ) -> ParlayResult {
        if legs.is_empty() {
            return ParlayResult::empty();
        }
        let combined = Self::combined_probability(legs);
        self.finish(combined, ImpliedOdds::Finite(quoted_odds), stake)
    }

    fn combined_probability(legs: &[ParlayLeg]) -> Decimal {
        legs.iter()
            .fold(Decimal::ONE, |acc, leg| acc * leg.probability)
    }

    fn finish(&self, combined: Decimal, odds: ImpliedOdds, stake: Decimal) -> ParlayResult {
        let (potential_payout, expected_value) = match odds {
            ImpliedOdds::Finite(odds) => {
                let payout = stake * odds;
                (Some(payout), combined * payout - stake)
            }
            // A zero-probability parlay forfeits the stake with certainty.
            ImpliedOdds::Unbounded => (None, -stake),
        };
        let ev_ratio = if stake > Decimal::ZERO {
            expected_value / stake
        } else {
            Decimal::ZERO
        };
        ParlayResult {
            combined_probability: combined,
            implied_odds: odds,
            potential_payout,
            expected_value,
            risk_level: self.classify_risk(combined),
            recommendation: self.recommend(ev_ratio, combined),
        }
    }

    /// Risk tier from combined probability, highest floor first.
    fn classify_risk(&self, combined: Decimal) -> RiskLevel {
        let c = &self.config;
        if combined >= c.low_risk_floor {
            RiskLevel::Low
        } else if combined >= c.medium_risk_floor {
            RiskLevel::Medium
        } else if combined >= c.high_risk_floor {
            RiskLevel::High
        } else {
            RiskLevel::Extreme
        }
    }

    /// Buy/hold/avoid tier from EV-per-dollar and win probability.
    /// First match wins.
    fn recommend(&self, ev_ratio: Decimal, combined: Decimal) -> Recommendation {
        let c = &self.config;
        if ev_ratio > c.strong_buy_ev_ratio && combined > c.strong_buy_min_probability {
            Recommendation::StrongBuy
        } else if ev_ratio > c.buy_ev_ratio && combined > c.buy_min_probability {
            Recommendation::Buy
        } else if ev_ratio > c.hold_ev_ratio {
            Recommendation::Hold
        } else {
            Recommendation::Avoid
        }
    }
}
