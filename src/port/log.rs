use async_trait::async_trait;

use crate::domain::{LogError, Operation, OperationRecord};

/// Audit trail of machine operations.
///
/// The log constructs the [`OperationRecord`] by assigning the next sequence
/// number atomically and stamping the time of acceptance. Records are
/// append-only; nothing in the machine ever rewrites history.
#[async_trait]
pub trait OperationLog: Send + Sync {
    /// Append an operation and return the complete record.
    async fn append(&self, operation: Operation) -> Result<OperationRecord, LogError>;

    /// Replay records starting from a sequence number, in order.
    async fn replay(&self, from_sequence: Option<u64>) -> Result<Vec<OperationRecord>, LogError>;

    /// Highest assigned sequence number, or `None` for an empty log.
    async fn highest_sequence(&self) -> Result<Option<u64>, LogError>;
}
