//! Conversion driver.
//!
//! Opens the input and output files, copies the header, and converts every
//! data row in order. The first malformed row aborts the run; rows already
//! written stay in the output file.

mod resources;
mod stats;
mod task;

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use crate::config::Config;
use crate::error_handling::ConversionError;
use crate::units::{DistanceUnit, TemperatureUnit};

use resources::ConversionResources;

pub use stats::ConversionStats;
pub use task::convert_records;

/// Results of a conversion run.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// File the rows were read from
    pub input: PathBuf,
    /// File the converted rows were written to
    pub output: PathBuf,
    /// Row and field counters
    pub stats: ConversionStats,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a conversion with the provided configuration.
///
/// # Errors
///
/// Returns an error if either file cannot be opened, the input is not valid
/// UTF-8 CSV, or any data row is malformed. Both files are closed before the
/// error is returned.
///
/// # Example
///
/// ```no_run
/// use measure_convert::{run_conversion, Config, TemperatureUnit};
/// use std::path::PathBuf;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     input: PathBuf::from("readings.csv"),
///     output: PathBuf::from("readings_f.csv"),
///     temp_unit: TemperatureUnit::Fahrenheit,
///     ..Default::default()
/// };
/// let report = run_conversion(&config)?;
/// println!("Converted {} rows", report.stats.rows);
/// # Ok(())
/// # }
/// ```
pub fn run_conversion(config: &Config) -> Result<ConversionReport, ConversionError> {
    let start_time = Instant::now();
    info!(
        "Converting {} -> {} (distance: {}, temperature: {})",
        config.input.display(),
        config.output.display(),
        config.dist_unit,
        config.temp_unit
    );

    let ConversionResources {
        mut reader,
        mut writer,
    } = ConversionResources::open(&config.input, &config.output)?;

    let stats = convert_records(&mut reader, &mut writer, config.dist_unit, config.temp_unit)?;
    writer.flush().map_err(|source| ConversionError::Io {
        path: config.output.clone(),
        source,
    })?;

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    info!(
        "Wrote {} rows ({} distances and {} readings converted)",
        stats.rows, stats.distances_converted, stats.readings_converted
    );

    Ok(ConversionReport {
        input: config.input.clone(),
        output: config.output.clone(),
        stats,
        elapsed_seconds,
    })
}

/// Converts every row of `input` to the target units and writes them to `output`.
///
/// Fields already in the target unit are copied verbatim; converted fields are
/// rendered with two decimals and their canonical suffix.
///
/// # Errors
///
/// See [`run_conversion`].
pub fn convert_data(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    temp_unit: TemperatureUnit,
    dist_unit: DistanceUnit,
) -> Result<(), ConversionError> {
    let config = Config {
        input: input.as_ref().to_path_buf(),
        output: output.as_ref().to_path_buf(),
        temp_unit,
        dist_unit,
        ..Default::default()
    };
    run_conversion(&config).map(|_| ())
}

/// String-selector form of [`convert_data`].
///
/// `temp_unit` is `"C"` or `"F"`; `dist_unit` is `"m"` or `"f"` (feet is
/// selected by `"f"` but rendered as `ft`).
///
/// # Errors
///
/// Returns `ConversionError::UnsupportedUnit` for any other selector, before
/// either file is opened. Otherwise see [`run_conversion`].
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    temp_unit: &str,
    dist_unit: &str,
) -> Result<(), ConversionError> {
    let temp_unit = TemperatureUnit::from_selector(temp_unit)
        .map_err(|_| ConversionError::UnsupportedUnit(temp_unit.to_string()))?;
    let dist_unit = DistanceUnit::from_selector(dist_unit)
        .map_err(|_| ConversionError::UnsupportedUnit(dist_unit.to_string()))?;
    convert_data(input, output, temp_unit, dist_unit)
}
