//! Error types for the parlay engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The leg cap was reached; the store is unchanged.
    #[error("parlay is full: cannot hold more than {max} legs")]
    Capacity { max: usize },

    #[error("invalid parlay: {0}")]
    Validation(String),

    #[error("market data error: {0}")]
    Supply(String),

    #[error("market not found: {0}")]
    MarketNotFound(String),

    #[error("placement failed: {0}")]
    Adapter(String),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
