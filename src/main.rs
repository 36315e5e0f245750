//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `whodat` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use whodat::initialization::init_logger_with;
use whodat::{run_report, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // IP_API_KEY and MSFT_CLIENT_REQUEST_ID may come from .env
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    if let Err(e) = init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")
    {
        eprintln!("whodat error: {:#}", e);
        process::exit(1);
    }

    match run_report(config).await {
        Ok(report) => {
            println!();
            println!(
                "Processed {} address{} ({} written, {} skipped) in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "es" },
                report.written,
                report.skipped,
                report.elapsed_seconds
            );
            println!(
                "Thank you for playing, your output file is: {}",
                report.output_file.display()
            );
            println!();
            Ok(())
        }
        Err(e) => {
            eprintln!("whodat error: {:#}", e);
            process::exit(1);
        }
    }
}
