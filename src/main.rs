//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_words` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use page_words::initialization::init_logger_with;
use page_words::report::format_report;
use page_words::{run_analysis, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_analysis(config).await {
        Ok(report) => {
            print!("{}", format_report(&report));
            println!(
                "Saved {} row{} to {} in {:.1}s",
                report.entries.len(),
                if report.entries.len() == 1 { "" } else { "s" },
                report.db_path.display(),
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("page_words error: {e}");
            process::exit(1);
        }
    }
}
