//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `measure_convert` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use measure_convert::app::print_conversion_summary;
use measure_convert::initialization::init_logger_with;
use measure_convert::{run_conversion, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let result = run_conversion(&config).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            config.input.display(),
            config.output.display()
        )
    });

    match result {
        Ok(report) => {
            print_conversion_summary(&report);
            Ok(())
        }
        Err(e) => {
            eprintln!("measure_convert error: {:#}", e);
            process::exit(1);
        }
    }
}
