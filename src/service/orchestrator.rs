use std::fs::File;

use crate::domain::{OperationOutcome, OperationRecord, OrchestratorMode, WithdrawalRequest};
use crate::service::Atm;

/// Drives a machine through a feed of withdrawal requests.
pub struct Orchestrator {
    machine: Atm,
    mode: OrchestratorMode,
}

impl Orchestrator {
    pub async fn new(mode: OrchestratorMode) -> Self {
        let machine = super::boot().await;
        Self { machine, mode }
    }

    /// Create an Orchestrator around a caller-assembled machine.
    ///
    /// ## Warning: This is NOT MEANT FOR PRODUCTION USE. Only for testing purposes.
    pub fn with_machine(machine: Atm, mode: OrchestratorMode) -> Self {
        Self { machine, mode }
    }

    /// Process every request in the feed and return the machine's audit
    /// records. Malformed rows and refused withdrawals are reported to
    /// stderr and never abort the batch.
    pub async fn process(self) -> Result<Vec<OperationRecord>, Box<dyn std::error::Error>> {
        let OrchestratorMode::Csv { file_path } = self.mode.clone();
        self.process_csv(&file_path).await
    }

    async fn process_csv(
        mut self,
        file_path: &str,
    ) -> Result<Vec<OperationRecord>, Box<dyn std::error::Error>> {
        let file_handle = File::open(file_path)?;
        let mut rdr = csv::Reader::from_reader(file_handle);

        let mut line_num = 0;

        for result in rdr.deserialize() {
            line_num += 1;
            let request: WithdrawalRequest = match result {
                Ok(request) => request,
                Err(e) => {
                    eprintln!("Error parsing line {}: {}", line_num, e);
                    continue;
                }
            };

            match self
                .machine
                .withdraw(&request.pin, &request.card, request.amount)
                .await
            {
                Ok(_) => {}
                Err(e) => eprintln!("Error processing line {}: {}", line_num, e),
            }
        }

        let records = match self.machine.log() {
            Some(log) => log.replay(None).await?,
            None => Vec::new(),
        };

        Ok(records)
    }

    /// Output the audit records as CSV to stdout, one row per operation.
    pub fn output_csv(records: &[OperationRecord]) -> Result<(), Box<dyn std::error::Error>> {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(["seq", "card", "requested", "outcome", "detail"])?;

        for record in records {
            let (outcome, detail) = match &record.operation.outcome {
                OperationOutcome::Dispensed { banknotes } => {
                    ("dispensed".to_string(), format!("{} notes", banknotes.len()))
                }
                OperationOutcome::Rejected { code } => ("rejected".to_string(), code.to_string()),
            };

            wtr.write_record([
                record.sequence_nr.to_string(),
                record.operation.card.number().to_string(),
                record.operation.requested.to_string(),
                outcome,
                detail,
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
