use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Banknote, Card, ErrorCode, Money};

/// What one `withdraw` call did, recorded for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub card: Card,
    pub requested: Money,
    pub outcome: OperationOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result")]
pub enum OperationOutcome {
    /// Cash left the machine; the notes are listed largest first.
    Dispensed { banknotes: Vec<Banknote> },
    /// The request was refused and no deposit mutation happened.
    Rejected { code: ErrorCode },
}

/// Envelope wrapping an operation with ordering metadata assigned by the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// Sequence number, strictly increasing per machine.
    pub sequence_nr: u64,
    /// When the log accepted the record.
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
}
