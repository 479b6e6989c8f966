// Domain outbox port.
//
// Purpose
// - Queue side-effect intents for external collaborators (email, payments).
//
// Notes
// - Rows are keyed by (aggregate_id, revision, intent_type); enqueuing the same key twice
//   is a duplicate, so a retried write never double-sends.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct OutboxRow {
    pub topic: String,
    pub intent_type: String,
    pub aggregate_id: String,
    pub revision: u32,
    pub occurred_at: DateTime<Utc>,
    pub payload: Json,
}

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("duplicate outbox row {intent_type} for {aggregate_id} r{revision}")]
    Duplicate {
        aggregate_id: String,
        revision: u32,
        intent_type: String,
    },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DomainOutbox: Send + Sync {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError>;
}

pub mod in_memory;
