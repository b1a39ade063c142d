//! Configuration loading and defaults
//!
//! Layers a TOML file under `PARLAY_*` environment overrides. Every
//! section has defaults, so the engine runs without a config file.

use crate::error::Result;
use crate::types::Market;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub supply: SupplyConfig,
    pub store: StoreConfig,
    pub evaluator: EvaluatorConfig,
    pub placement: PlacementConfig,
    /// Demo markets served when the live supply fails or returns nothing.
    /// Injected here rather than baked into the supply layer so tests can
    /// substitute deterministic fixtures.
    pub fallback_markets: Vec<FallbackMarket>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supply: SupplyConfig::default(),
            store: StoreConfig::default(),
            evaluator: EvaluatorConfig::default(),
            placement: PlacementConfig::default(),
            fallback_markets: default_fallback_markets(),
        }
    }
}

impl Config {
    /// Load from a TOML file (missing file falls back to defaults), then
    /// apply `PARLAY_*` environment overrides.
    pub fn load(path: &str) -> Result<Config> {
        let expanded = shellexpand::tilde(path);
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(expanded.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("PARLAY").separator("__"))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}

/// Market supply settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyConfig {
    /// Gamma API base URL.
    pub gamma_url: String,
    /// Venue tag applied to fetched markets.
    pub platform: String,
    /// Poll interval for refreshing the market list.
    pub refresh_interval_secs: u64,
    /// Maximum number of markets requested per fetch.
    pub max_markets: usize,
}

impl Default for SupplyConfig {
    fn default() -> Self {
        Self {
            gamma_url: "https://gamma-api.polymarket.com".to_string(),
            platform: "polymarket".to_string(),
            refresh_interval_secs: 60,
            max_markets: 50,
        }
    }
}

/// Leg store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Hard cap on legs per parlay.
    pub max_legs: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { max_legs: 10 }
    }
}

/// Evaluator thresholds.
///
/// Risk tiers are floors on combined probability, checked highest first;
/// recommendations combine an EV-per-dollar floor with a minimum win
/// probability, first match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub low_risk_floor: Decimal,
    pub medium_risk_floor: Decimal,
    pub high_risk_floor: Decimal,
    pub strong_buy_ev_ratio: Decimal,
    pub strong_buy_min_probability: Decimal,
    pub buy_ev_ratio: Decimal,
    pub buy_min_probability: Decimal,
    pub hold_ev_ratio: Decimal,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            low_risk_floor: dec!(0.40),
            medium_risk_floor: dec!(0.20),
            high_risk_floor: dec!(0.05),
            strong_buy_ev_ratio: dec!(0.20),
            strong_buy_min_probability: dec!(0.15),
            buy_ev_ratio: dec!(0.05),
            buy_min_probability: dec!(0.10),
            hold_ev_ratio: dec!(-0.10),
        }
    }
}

/// Placement submission settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Minimum legs required before a parlay may be submitted.
    pub min_legs: usize,
    /// JSONL file the simulated adapter appends accepted tickets to.
    pub audit_file: PathBuf,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            min_legs: 2,
            audit_file: PathBuf::from("parlay_tickets.jsonl"),
        }
    }
}

/// A demo market as written in the config file.
///
/// Converted into a `Market` tagged with the `demo` platform so fallback
/// data is never mistaken for a live venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackMarket {
    pub id: String,
    pub question: String,
    pub yes_price: Decimal,
    pub no_price: Decimal,
}

impl FallbackMarket {
    pub fn into_market(self) -> Market {
        Market {
            id: self.id,
            question: self.question,
            yes_price: self.yes_price,
            no_price: self.no_price,
            platform: "demo".to_string(),
            end_date: None,
        }
    }
}

fn default_fallback_markets() -> Vec<FallbackMarket> {
    vec![
        FallbackMarket {
            id: "demo-btc-100k".to_string(),
            question: "Will Bitcoin close above $100k this month?".to_string(),
            yes_price: dec!(0.62),
            no_price: dec!(0.38),
        },
        FallbackMarket {
            id: "demo-fed-cut".to_string(),
            question: "Will the Fed cut rates at the next meeting?".to_string(),
            yes_price: dec!(0.45),
            no_price: dec!(0.55),
        },
        FallbackMarket {
            id: "demo-eth-flip".to_string(),
            question: "Will Ethereum outperform Bitcoin this quarter?".to_string(),
            yes_price: dec!(0.30),
            no_price: dec!(0.70),
        },
        FallbackMarket {
            id: "demo-spx-ath".to_string(),
            question: "Will the S&P 500 set a new all-time high this week?".to_string(),
            yes_price: dec!(0.51),
            no_price: dec!(0.49),
        },
    ]
}
