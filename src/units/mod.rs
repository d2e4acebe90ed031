//! Measurement parsing, conversion, and formatting.
//!
//! This module provides:
//! - Unit and measurement types (`DistanceUnit`, `TemperatureUnit`, `Measurement`, `Record`)
//! - Field parsing (`parse_distance`, `parse_reading`, `parse_record`)
//! - Pure conversion functions between metric and imperial units
//! - Rendering of converted magnitudes with their canonical suffix

mod convert;
mod format;
mod parse;
mod types;

// Re-export public API
pub use convert::{celsius_to_fahrenheit, fahrenheit_to_celsius, feet_to_meters, meters_to_feet};
pub use format::render_magnitude;
pub use parse::{parse_distance, parse_reading, parse_record};
pub use types::{DistanceUnit, Measurement, Record, TemperatureUnit, Unit};
