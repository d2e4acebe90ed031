//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::units::{DistanceUnit, TemperatureUnit};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Conversion configuration and command-line options.
///
/// Parsed by `clap` in the binary, or constructed directly by library callers.
///
/// # Examples
///
/// ```bash
/// # Normalize everything to meters and Celsius (the defaults)
/// measure_convert readings.csv readings_metric.csv
///
/// # Convert to feet and Fahrenheit
/// measure_convert readings.csv readings_imperial.csv --temp-unit F --dist-unit f
/// ```
///
/// ```no_run
/// use measure_convert::{Config, DistanceUnit};
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("readings.csv"),
///     output: PathBuf::from("converted.csv"),
///     dist_unit: DistanceUnit::Feet,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "measure_convert",
    about = "Converts distance and temperature readings in a CSV file between unit systems."
)]
pub struct Config {
    /// CSV file to read (header row, then Date,Distance,Reading rows)
    #[arg(value_parser)]
    pub input: PathBuf,

    /// CSV file to write the converted rows to
    #[arg(value_parser)]
    pub output: PathBuf,

    /// Target temperature unit: C (Celsius) or F (Fahrenheit)
    #[arg(long, value_parser = TemperatureUnit::from_selector, default_value = "C")]
    pub temp_unit: TemperatureUnit,

    /// Target distance unit: m (meters) or f (feet)
    #[arg(long, value_parser = DistanceUnit::from_selector, default_value = "m")]
    pub dist_unit: DistanceUnit,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.csv"),
            output: PathBuf::from("output_converted.csv"),
            temp_unit: TemperatureUnit::Celsius,
            dist_unit: DistanceUnit::Meters,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
