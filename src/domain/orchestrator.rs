/// Where the orchestrator reads withdrawal requests from.
#[derive(Debug, Clone)]
pub enum OrchestratorMode {
    Csv { file_path: String },
}
