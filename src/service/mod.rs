mod boot;
mod machine;
pub mod mock;
pub mod orchestrator;

pub use boot::*;
pub use machine::*;
pub use orchestrator::Orchestrator;
