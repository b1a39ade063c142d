//! Leg store: the ordered collection of selected wager legs
//!
//! Enforces the leg cap and identity rules. All state is session-local
//! and in-memory; no I/O happens here.


use crate::config::StoreConfig;
use crate::error::{EngineError, Result};
use crate::types::{Market, OutcomeSide, ParlayLeg};
use chrono::Utc;
use std::collections::HashSet;

/// Source of leg identifiers.
///
/// Injected so tests can use a deterministic sequence while production
/// code uses random UUIDs.
pub trait LegIdSource: Send {
    fn next_id(&mut self) -> String;
}

/// UUID-v4 leg ids.
#[derive(Debug, Default)]
pub struct UuidIdSource;

impl LegIdSource for UuidIdSource {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Incrementing ids for deterministic tests.
#[derive(Debug, Default)]
pub struct SequentialIdSource {
    next: u64,
}

impl LegIdSource for SequentialIdSource {
    fn next_id(&mut self) -> String {
        let id = format!("leg-{}", self.next);
        self.next += 1;
        id
    }
}

/// Ordered collection of parlay legs with a hard capacity.
pub struct ParlayStore {
    legs: Vec<ParlayLeg>,
    max_legs: usize,
    ids: Box<dyn LegIdSource>,
    generation: u64,
}

impl ParlayStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self::with_id_source(config, Box::new(UuidIdSource))
    }

    pub fn with_id_source(config: &StoreConfig, ids: Box<dyn LegIdSource>) -> Self {
        Self {
            legs: Vec::new(),
            max_legs: config.max_legs,
            ids,
            generation: 0,
        }
    }

    /// Append a leg for the chosen side of `market`.
    ///
    /// The leg's probability is the market's price for that side at this
    /// moment and is never refreshed afterwards. Fails without mutating
    /// the store when the cap is reached.
    pub fn add_leg(&mut self, market: &Market, outcome: OutcomeSide) -> Result<String> {
        if self.legs.len() >= self.max_legs {
            return Err(EngineError::Capacity { max: self.max_legs });
        }
        let id = self.ids.next_id();
        self.legs.push(ParlayLeg {
            id: id.clone(),
            market: market.clone(),
            outcome,
            probability: market.price(outcome),
            added_at: Utc::now(),
        });
        self.generation += 1;
        Ok(id)
    }

    /// Remove the leg with `leg_id`; absent ids are a no-op.
    pub fn remove_leg(&mut self, leg_id: &str) {
        let before = self.legs.len();
        self.legs.retain(|leg| leg.id != leg_id);
        if self.legs.len() != before {
            self.generation += 1;
        }
    }

    /// Drop every leg.
    pub fn clear(&mut self) {
        if !self.legs.is_empty() {
            self.legs.clear();
            self.generation += 1;
        }
    }

    /// Legs in insertion order.
    pub fn legs(&self) -> &[ParlayLeg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Markets currently represented by some leg, regardless of side.
    ///
    /// Presentation uses this to grey out already-added markets; the
    /// store itself does not reject a second leg on the same market.
    pub fn added_market_ids(&self) -> HashSet<String> {
        self.legs.iter().map(|leg| leg.market.id.clone()).collect()
    }

    /// Monotonic counter bumped on every effective mutation.
    ///
    /// Lets an async caller detect that the store changed while a
    /// placement was outstanding.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
