//! Pure unit conversion functions.

use crate::config::{FAHRENHEIT_OFFSET, FEET_PER_METER};

/// Converts meters to feet.
pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// Converts feet to meters.
///
/// Divides by the same factor `meters_to_feet` multiplies by, so a round trip
/// is exact only up to floating point rounding.
pub fn feet_to_meters(feet: f64) -> f64 {
    feet / FEET_PER_METER
}

/// Converts degrees Celsius to degrees Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET
}

/// Converts degrees Fahrenheit to degrees Celsius.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_OFFSET) * 5.0 / 9.0
}
