//! Market supply: live market data with an offline fallback
//!
//! The engine needs a list of binary markets with current outcome
//! prices. The live source is polled; when it fails or returns nothing
//! the service serves the configured demo set, flagged so callers can
//! never mistake it for live data.

mod gamma;

pub use gamma::GammaSupply;

use crate::error::Result;
use crate::types::Market;
use async_trait::async_trait;
use tracing::warn;

/// Read side of a market data provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketSupply: Send + Sync {
    /// Currently tradable binary-outcome markets.
    async fn fetch_markets(&self) -> Result<Vec<Market>>;
}

/// Where a market snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplySource {
    Live,
    /// Built-in demo data; must be surfaced to the user as non-live.
    Fallback,
}

/// A fetched batch of markets plus its provenance.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub markets: Vec<Market>,
    pub source: SupplySource,
}

impl MarketSnapshot {
    pub fn is_live(&self) -> bool {
        self.source == SupplySource::Live
    }
}

/// Supply facade that falls back to injected demo markets.
pub struct SupplyService {
    upstream: Box<dyn MarketSupply>,
    fallback: Vec<Market>,
}

impl SupplyService {
    /// `fallback` is the demo set served when the upstream fails or comes
    /// back empty; it is injected rather than baked in so tests can
    /// substitute deterministic fixtures.
    pub fn new(upstream: Box<dyn MarketSupply>, fallback: Vec<Market>) -> Self {
        Self { upstream, fallback }
    }

    /// Fetch the current market set, falling back on error or empty data.
    pub async fn snapshot(&self) -> MarketSnapshot {
        match self.upstream.fetch_markets().await {
            Ok(markets) if !markets.is_empty() => MarketSnapshot {
                markets,
                source: SupplySource::Live,
            },
            Ok(_) => {
                warn!("market supply returned no markets, serving demo set");
                self.fallback_snapshot()
            }
            Err(e) => {
                warn!("market supply failed ({}), serving demo set", e);
                self.fallback_snapshot()
            }
        }
    }

    fn fallback_snapshot(&self) -> MarketSnapshot {
        MarketSnapshot {
            markets: self.fallback.clone(),
            source: SupplySource::Fallback,
        }
    }
}
