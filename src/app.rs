//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads `.env` and sets up logging
//! - runs the analysis pipeline (summary CSV + charts)
//! - prints the digest

use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `mrr` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    crate::logging::init(cli.log_level());

    let config = cli.analysis_config();
    debug!(?config, "starting run");

    let run = pipeline::run_analysis(&config)?;

    println!(
        "{}",
        crate::report::format_digest(&run.analysis.summary, &config.period)
    );

    Ok(())
}
