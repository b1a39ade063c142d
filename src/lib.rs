//! Parlay Probability & Risk Engine
//!
//! Combines independent binary-outcome wager legs into a joint parlay:
//! combined win probability, implied decimal odds, potential payout,
//! expected value, a discrete risk tier, and a buy/hold/avoid
//! recommendation.
//!
//! ## Architecture
//!
//! ```text
//! Market Supply (Gamma / demo fallback) → Leg Store → Evaluator → Placement Adapter
//!                                             ↑            |
//!                                         selection    ParlayResult
//! ```
//!
//! The evaluator is pure and synchronous; the store is in-memory and
//! session-local. Only the supply and placement boundaries are async.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod placement;
pub mod store;
pub mod supply;
pub mod types;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod types_tests;
