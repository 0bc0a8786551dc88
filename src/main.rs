use std::{env, fs::File, io, path::Path};

use tracing_subscriber::EnvFilter;

use bank_account::{
    Error, Runner,
    dlq::StdErrDLQ,
    domain::traits::OperationStream,
    ingestion::{CsvScript, ScriptedOperations},
    transcript::ConsoleTranscript,
};

async fn run<I: OperationStream>(ingestion: I) -> Result<(), Error> {
    let transcript = ConsoleTranscript::new(io::stdout());
    let mut runner = Runner::new(ingestion, transcript, StdErrDLQ::default());

    runner.process().await?;
    runner.flush()
}

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // An optional CSV script replaces the built-in demonstration
    match env::args().nth(1) {
        Some(file_path) => {
            let file = File::open(Path::new(&file_path))?;
            tracing::info!(script = %file_path, "running csv script");
            run(CsvScript::new(file)?).await?;
        }
        None => run(ScriptedOperations::demonstration()).await?,
    }

    Ok(())
}
