//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A distance or reading field that does not match the expected shape.
///
/// Each variant carries the offending field text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Distance field is empty or holds nothing but a unit suffix.
    #[error("malformed distance {0:?}: expected a number followed by 'm' or 'ft'")]
    MalformedDistance(String),

    /// Reading field has no degree sign, or more than one.
    #[error("malformed reading {0:?}: expected a number, '°', then 'C' or 'F'")]
    MalformedReading(String),

    /// Magnitude is not a finite number.
    #[error("malformed value {0:?}: not a finite number")]
    MalformedValue(String),

    /// Unit symbol (or target selector) outside the two recognized values.
    #[error("unsupported unit {0:?}")]
    UnsupportedUnit(String),
}

/// Errors that abort a conversion run.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Opening, creating, or flushing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File the operation was performed on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing a CSV record failed (including invalid UTF-8).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input has no header row.
    #[error("input file is empty: expected a header row")]
    EmptyInput,

    /// Data row does not have exactly three fields.
    #[error("line {line}: expected 3 fields (Date,Distance,Reading), found {fields}")]
    MalformedRow {
        /// 1-based line number of the row
        line: u64,
        /// Number of fields actually present
        fields: usize,
    },

    /// A field in a data row failed to parse.
    #[error("line {line}: {source}")]
    Field {
        /// 1-based line number of the row
        line: u64,
        /// Field-level failure
        #[source]
        source: FieldError,
    },

    /// Target unit selector is not recognized.
    #[error("unsupported target unit {0:?}")]
    UnsupportedUnit(String),
}

impl ConversionError {
    /// Returns the field-level error, if this failure came from a malformed field.
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            ConversionError::Field { source, .. } => Some(source),
            _ => None,
        }
    }
}
