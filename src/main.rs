use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;
use tracing::error;

use word_pipeline::cli::{execute_count, format_result, Cli};
use word_pipeline::services::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let start_time = Instant::now();

    match execute_count(&cli).await {
        Ok(summary) => {
            println!("{}", format_result(summary.total_words, start_time.elapsed()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "word count failed");
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}
