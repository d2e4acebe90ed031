//! Unit and measurement types.

use std::fmt;

use strum_macros::{Display, EnumIter};

use crate::config::{
    SELECTOR_CELSIUS, SELECTOR_FAHRENHEIT, SELECTOR_FEET, SELECTOR_METERS, SUFFIX_CELSIUS,
    SUFFIX_FAHRENHEIT, SUFFIX_FEET, SUFFIX_METERS,
};
use crate::error_handling::FieldError;
use crate::units::convert::{
    celsius_to_fahrenheit, fahrenheit_to_celsius, feet_to_meters, meters_to_feet,
};
use crate::units::format::render_magnitude;

/// A unit of one measurement dimension.
///
/// Each dimension has exactly two members; converting between them is a pure
/// function of the magnitude.
pub trait Unit: Copy + PartialEq + fmt::Debug {
    /// Canonical suffix appended to a converted magnitude.
    fn suffix(self) -> &'static str;

    /// Converts `magnitude` expressed in `self` into `target`.
    fn convert_magnitude(self, magnitude: f64, target: Self) -> f64;
}

/// Distance unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum DistanceUnit {
    /// Meters, suffix `m`
    #[strum(serialize = "meters")]
    Meters,
    /// Feet, suffix `ft`
    #[strum(serialize = "feet")]
    Feet,
}

impl DistanceUnit {
    /// Parses a target selector: `m` selects meters, `f` selects feet.
    ///
    /// Feet is selected by `f` even though converted values are rendered with
    /// `ft`; callers depend on that.
    pub fn from_selector(selector: &str) -> Result<Self, FieldError> {
        match selector {
            SELECTOR_METERS => Ok(DistanceUnit::Meters),
            SELECTOR_FEET => Ok(DistanceUnit::Feet),
            other => Err(FieldError::UnsupportedUnit(other.to_string())),
        }
    }
}

impl Unit for DistanceUnit {
    fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Meters => SUFFIX_METERS,
            DistanceUnit::Feet => SUFFIX_FEET,
        }
    }

    fn convert_magnitude(self, magnitude: f64, target: Self) -> f64 {
        match (self, target) {
            (DistanceUnit::Meters, DistanceUnit::Feet) => meters_to_feet(magnitude),
            (DistanceUnit::Feet, DistanceUnit::Meters) => feet_to_meters(magnitude),
            _ => magnitude,
        }
    }
}

/// Temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TemperatureUnit {
    /// Degrees Celsius, suffix `°C`
    Celsius,
    /// Degrees Fahrenheit, suffix `°F`
    Fahrenheit,
}

impl TemperatureUnit {
    /// Parses a target selector: `C` or `F`.
    pub fn from_selector(selector: &str) -> Result<Self, FieldError> {
        match selector {
            SELECTOR_CELSIUS => Ok(TemperatureUnit::Celsius),
            SELECTOR_FAHRENHEIT => Ok(TemperatureUnit::Fahrenheit),
            other => Err(FieldError::UnsupportedUnit(other.to_string())),
        }
    }
}

impl Unit for TemperatureUnit {
    fn suffix(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => SUFFIX_CELSIUS,
            TemperatureUnit::Fahrenheit => SUFFIX_FAHRENHEIT,
        }
    }

    fn convert_magnitude(self, magnitude: f64, target: Self) -> f64 {
        match (self, target) {
            (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => {
                celsius_to_fahrenheit(magnitude)
            }
            (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => {
                fahrenheit_to_celsius(magnitude)
            }
            _ => magnitude,
        }
    }
}

/// A magnitude tagged with its unit, plus the field text it is written as.
///
/// `raw` is the original field for parsed measurements and the rendered value
/// for converted ones, so an unconverted field is emitted byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement<U: Unit> {
    magnitude: f64,
    unit: U,
    raw: String,
}

impl<U: Unit> Measurement<U> {
    pub(crate) fn new(magnitude: f64, unit: U, raw: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit,
            raw: raw.into(),
        }
    }

    /// Numeric value, exclusive of the unit symbol.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Unit the magnitude is expressed in.
    pub fn unit(&self) -> U {
        self.unit
    }

    /// Field text this measurement is serialized as.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns this measurement expressed in `target`.
    ///
    /// Already in `target`: an identical copy, original text included.
    /// Otherwise the converted magnitude rendered with two decimals and the
    /// target's suffix.
    ///
    /// # Errors
    ///
    /// Returns `MalformedValue` with the original field text if the converted
    /// magnitude overflows to a non-finite value.
    pub fn convert_to(&self, target: U) -> Result<Measurement<U>, FieldError> {
        if self.unit == target {
            return Ok(self.clone());
        }
        let magnitude = self.unit.convert_magnitude(self.magnitude, target);
        if !magnitude.is_finite() {
            return Err(FieldError::MalformedValue(self.raw.clone()));
        }
        Ok(Measurement::new(
            magnitude,
            target,
            render_magnitude(magnitude, target.suffix()),
        ))
    }
}

impl<U: Unit> fmt::Display for Measurement<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// One data row: an opaque date plus a distance and a temperature reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Opaque date column, never interpreted
    pub date: String,
    /// Distance column
    pub distance: Measurement<DistanceUnit>,
    /// Temperature reading column
    pub reading: Measurement<TemperatureUnit>,
}

impl Record {
    /// Produces a new record with both measurements expressed in the target units.
    ///
    /// # Errors
    ///
    /// Fails if either converted magnitude is not finite.
    pub fn convert(
        &self,
        dist_target: DistanceUnit,
        temp_target: TemperatureUnit,
    ) -> Result<Record, FieldError> {
        Ok(Record {
            date: self.date.clone(),
            distance: self.distance.convert_to(dist_target)?,
            reading: self.reading.convert_to(temp_target)?,
        })
    }

    /// Fields in output column order.
    pub fn fields(&self) -> [&str; 3] {
        [self.date.as_str(), self.distance.as_str(), self.reading.as_str()]
    }
}
