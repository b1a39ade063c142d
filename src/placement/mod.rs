//! Placement boundary: package a parlay and hand it to an adapter
//!
//! The engine builds the payload and enforces local preconditions; the
//! adapter owns execution and recording. The shipped adapter is
//! simulated: an accepted ticket is logged, never routed to a venue.


use crate::config::PlacementConfig;
use crate::error::{EngineError, Result};
use crate::store::ParlayStore;
use crate::types::{OutcomeSide, ParlayResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

/// One leg of a submission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketLeg {
    pub market_id: String,
    pub platform: String,
    pub outcome: OutcomeSide,
    pub probability: Decimal,
    pub question: String,
}

/// The finalized payload handed to a placement adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParlayTicket {
    pub legs: Vec<TicketLeg>,
    pub stake: Decimal,
    pub combined_probability: Decimal,
    pub potential_payout: Decimal,
    pub expected_value: Decimal,
    pub submitted_at: DateTime<Utc>,
}

/// Records or executes a finalized parlay.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacementAdapter: Send + Sync {
    /// Accept the ticket. Implementations own recording semantics; the
    /// engine never retries a failed placement on its own.
    async fn place(&self, ticket: ParlayTicket) -> Result<()>;
}

/// Adapter that appends accepted tickets to a JSONL audit file instead
/// of executing them.
pub struct SimulatedAdapter {
    audit_file: PathBuf,
}

impl SimulatedAdapter {
    pub fn new(config: &PlacementConfig) -> Self {
        Self {
            audit_file: config.audit_file.clone(),
        }
    }
}

#[async_trait]
impl PlacementAdapter for SimulatedAdapter {
    async fn place(&self, ticket: ParlayTicket) -> Result<()> {
        let line = serde_json::to_string(&ticket)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.audit_file)
            .await
            .map_err(|e| EngineError::Adapter(e.to_string()))?;
        file.write_all(format!("{}\n", line).as_bytes())
            .await
            .map_err(|e| EngineError::Adapter(e.to_string()))?;

        info!(
            "simulated parlay accepted: {} legs, stake {}, payout {}",
            ticket.legs.len(),
            ticket.stake,
            ticket.potential_payout
        );
        Ok(())
    }
}

/// Drives submission: validates, guards re-entry, clears on success.
pub struct ParlaySubmitter {
    adapter: Box<dyn PlacementAdapter>,
    min_legs: usize,
    in_flight: AtomicBool,
}

impl ParlaySubmitter {
    pub fn new(config: &PlacementConfig, adapter: Box<dyn PlacementAdapter>) -> Self {
        Self {
            adapter,
            min_legs: config.min_legs,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a placement is currently outstanding. Presentation uses
    /// this to disable the submit control.
    pub fn in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Build the submission payload without submitting it.
    ///
    /// Fails for a zero-probability parlay: its payout is unbounded and
    /// cannot be expressed in the numeric ticket.
    pub fn build_ticket(
        store: &ParlayStore,
        stake: Decimal,
        result: &ParlayResult,
    ) -> Result<ParlayTicket> {
        let potential_payout = result.potential_payout.ok_or_else(|| {
            EngineError::Validation("zero-probability parlay has no finite payout".to_string())
        })?;

        Ok(ParlayTicket {
            legs: store
                .legs()
                .iter()
                .map(|leg| TicketLeg {
                    market_id: leg.market.id.clone(),
                    platform: leg.market.platform.clone(),
                    outcome: leg.outcome,
                    probability: leg.probability,
                    question: leg.market.question.clone(),
                })
                .collect(),
            stake,
            combined_probability: result.combined_probability,
            potential_payout,
            expected_value: result.expected_value,
            submitted_at: Utc::now(),
        })
    }

    /// Validate and submit the current parlay.
    ///
    /// Legs survive adapter failure so the user can retry. On success
    /// the store is cleared, unless it was mutated while the call was
    /// outstanding, in which case the user's newer edit wins.
    pub async fn submit(
        &self,
        store: &mut ParlayStore,
        stake: Decimal,
        result: &ParlayResult,
    ) -> Result<ParlayTicket> {
        if store.len() < self.min_legs {
            return Err(EngineError::Validation(format!(
                "a parlay needs at least {} legs, got {}",
                self.min_legs,
                store.len()
            )));
        }
        if stake <= Decimal::ZERO {
            return Err(EngineError::Validation(
                "stake must be positive".to_string(),
            ));
        }
        let ticket = Self::build_ticket(store, stake, result)?;
        let generation = store.generation();

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(EngineError::Validation(
                "a placement is already in flight".to_string(),
            ));
        }
        let outcome = self.adapter.place(ticket.clone()).await;
        self.in_flight.store(false, Ordering::SeqCst);

        Self::settle(store, generation, outcome)?;
        Ok(ticket)
    }

    fn settle(store: &mut ParlayStore, generation: u64, outcome: Result<()>) -> Result<()> {
        match outcome {
            Ok(()) => {
                if store.generation() == generation {
                    store.clear();
                } else {
                    warn!("parlay changed while placement was outstanding, leaving it untouched");
                }
                Ok(())
            }
            Err(e) => {
                warn!("placement failed, legs preserved: {}", e);
                Err(e)
            }
        }
    }
}
