use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{LogError, Operation, OperationRecord};
use crate::port::OperationLog;

struct LogData {
    records: Vec<Arc<OperationRecord>>,
    sequence_counter: u64,
}

/// In-memory operation log implementation
pub struct InMemoryLog {
    data: Arc<RwLock<LogData>>,
}

impl InMemoryLog {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LogData {
                records: Vec::new(),
                sequence_counter: 0,
            })),
        }
    }
}

#[async_trait]
impl OperationLog for InMemoryLog {
    async fn append(&self, operation: Operation) -> Result<OperationRecord, LogError> {
        let mut data = self.data.write().await;

        data.sequence_counter += 1;
        let record = Arc::new(OperationRecord {
            sequence_nr: data.sequence_counter,
            timestamp: Utc::now(),
            operation,
        });

        data.records.push(record.clone());
        Ok((*record).clone())
    }

    async fn replay(&self, from_sequence: Option<u64>) -> Result<Vec<OperationRecord>, LogError> {
        let data = self.data.read().await;
        let from = from_sequence.unwrap_or(0);

        Ok(data
            .records
            .iter()
            .filter(|record| record.sequence_nr >= from)
            .map(|arc| (**arc).clone())
            .collect())
    }

    async fn highest_sequence(&self) -> Result<Option<u64>, LogError> {
        let data = self.data.read().await;
        if data.sequence_counter == 0 {
            Ok(None)
        } else {
            Ok(Some(data.sequence_counter))
        }
    }
}

impl Default for InMemoryLog {
    fn default() -> Self {
        Self::new()
    }
}
