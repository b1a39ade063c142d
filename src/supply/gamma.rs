//! Gamma API client for market data
//!
//! Fetches active binary markets and adapts them to the engine's
//! `Market` shape. Each market's stated outcome prices are taken as the
//! implied probabilities of the two sides.

use crate::config::SupplyConfig;
use crate::error::Result;
use crate::supply::MarketSupply;
use crate::types::Market;
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

/// Gamma API client returning active binary markets.
#[derive(Clone)]
pub struct GammaSupply {
    http: Client,
    base_url: String,
    platform: String,
    limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
struct GammaMarket {
    id: String,
    question: String,
    #[serde(rename = "endDate")]
    end_date: Option<String>,
    active: bool,
    closed: bool,
    #[serde(rename = "outcomePrices")]
    outcome_prices: Option<String>, // JSON string array like ["0.55", "0.45"]
}

impl GammaSupply {
    pub fn new(config: &SupplyConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: config.gamma_url.trim_end_matches('/').to_string(),
            platform: config.platform.clone(),
            limit: config.max_markets,
        })
    }

    /// Adapt one API record; records that are resolved or lack a price
    /// for either side are skipped, since a leg needs a usable
    /// probability for whichever side is selected.
    fn parse_market(&self, gm: GammaMarket) -> Option<Market> {
        if !gm.active || gm.closed {
            return None;
        }

        // The API double-encodes prices as a JSON string array
        let prices: Vec<Decimal> = gm
            .outcome_prices
            .as_ref()
            .and_then(|s| serde_json::from_str::<Vec<String>>(s).ok())
            .map(|strings| strings.iter().filter_map(|p| p.parse().ok()).collect())
            .unwrap_or_default();

        if prices.len() < 2 {
            return None;
        }

        Some(Market {
            id: gm.id,
            question: gm.question,
            yes_price: prices[0],
            no_price: prices[1],
            platform: self.platform.clone(),
            end_date: gm.end_date.as_ref().and_then(|s| s.parse().ok()),
        })
    }
}

#[async_trait]
impl MarketSupply for GammaSupply {
    async fn fetch_markets(&self) -> Result<Vec<Market>> {
        let url = format!("{}/markets", self.base_url);
        let resp: Vec<GammaMarket> = self
            .http
            .get(&url)
            .query(&[
                ("active", "true".to_string()),
                ("closed", "false".to_string()),
                ("_limit", self.limit.to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        let markets: Vec<Market> = resp
            .into_iter()
            .filter_map(|m| self.parse_market(m))
            .collect();
        debug!("fetched {} binary markets from gamma", markets.len());
        Ok(markets)
    }
}
