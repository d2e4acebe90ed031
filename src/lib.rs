//! measure_convert library: unit conversion for measurement CSV files
//!
//! Reads a CSV file of `Date,Distance,Reading` rows, converts distances between
//! meters and feet and temperatures between Celsius and Fahrenheit, and writes
//! the result to a new CSV file. Fields already in the target unit are copied
//! verbatim.
//!
//! # Example
//!
//! ```no_run
//! use measure_convert::{convert_data, DistanceUnit, TemperatureUnit};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! convert_data(
//!     "input.csv",
//!     "output_converted.csv",
//!     TemperatureUnit::Fahrenheit,
//!     DistanceUnit::Feet,
//! )?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
mod run;
pub mod units;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ConversionError, FieldError};
pub use run::{
    convert, convert_data, convert_records, run_conversion, ConversionReport, ConversionStats,
};
pub use units::{DistanceUnit, Measurement, Record, TemperatureUnit};
