use atm::domain::OrchestratorMode;
use atm::service::{mock::generator, orchestrator::Orchestrator};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "atm", version, about = "A cash machine simulation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the withdrawal requests CSV file to process
    #[arg(value_name = "FILE")]
    file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate dummy withdrawal requests to a file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "requests.csv", value_name = "FILE")]
        output: String,

        /// Number of requests to generate
        #[arg(short, long, default_value = "10", value_name = "COUNT")]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Cli::parse();

    match args.command {
        Some(Commands::Generate { output, count }) => {
            generator(&output, count)?;
        }
        None => {
            let file = args
                .file
                .ok_or("Please provide a request CSV path or use the 'generate' command")?;

            let orchestrator = Orchestrator::new(OrchestratorMode::Csv { file_path: file }).await;
            let records = orchestrator.process().await?;
            Orchestrator::output_csv(&records)?;
        }
    }

    Ok(())
}
