//! Persistence store for strategies and signal feedback.

pub mod postgres;

pub use postgres::PostgresStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::signal::FeedbackRecord;
use crate::models::strategy::Strategy;

/// Store failures. Calls are single, non-retried round trips; `NotFound` is
/// terminal and reported straight back to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("strategy {0} not found")]
    StrategyNotFound(i64),
    #[error("database connection not available")]
    Unavailable,
    #[error("query failed: {0}")]
    Query(#[from] tokio_postgres::Error),
    #[error("invalid stored data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

/// The persistence collaborator: strategy reads and feedback writes.
///
/// The production implementation is [`PostgresStore`]; tests slot an
/// in-memory implementation behind the same seam.
#[async_trait]
pub trait SignalStore: Send + Sync {
    /// Load a strategy by id, scoped to its owner.
    async fn get_strategy(&self, id: i64, user_id: &str) -> Result<Strategy, StoreError>;

    /// Persist a synthesized signal as an immutable feedback row.
    async fn insert_feedback(&self, record: &FeedbackRecord) -> Result<(), StoreError>;

    /// Recent feedback rows, newest first, optionally filtered by symbol.
    async fn get_feedback(
        &self,
        symbol: Option<&str>,
        limit: i64,
    ) -> Result<Vec<FeedbackRecord>, StoreError>;

    /// Check if the backing connection is available.
    async fn is_available(&self) -> bool;
}
