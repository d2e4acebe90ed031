//! Field parsing for distance and temperature readings.
//!
//! Distances are a number followed by `m` or `ft` (`ft` matched
//! case-insensitively). Readings are a number, a degree sign, optional
//! whitespace, then `C` or `F`. Any other unit symbol is rejected rather than
//! passed through.

use crate::config::DEGREE_SIGN;
use crate::error_handling::FieldError;
use crate::units::types::{DistanceUnit, Measurement, Record, TemperatureUnit};

/// Parses a distance field such as `41m` or `12.5FT`.
///
/// # Errors
///
/// - `MalformedDistance` if the field is empty or holds only a unit suffix
/// - `UnsupportedUnit` if the suffix is neither `m` nor `ft`
/// - `MalformedValue` if the remaining text is not a finite number
pub fn parse_distance(field: &str) -> Result<Measurement<DistanceUnit>, FieldError> {
    let (number, unit) = split_distance(field)?;
    let magnitude = parse_magnitude(number)?;
    Ok(Measurement::new(magnitude, unit, field))
}

/// Parses a temperature reading such as `10°C` or `50.5° F`.
///
/// # Errors
///
/// - `MalformedReading` if there is not exactly one degree sign
/// - `UnsupportedUnit` if the text after the degree sign is not `C` or `F`
/// - `MalformedValue` if the text before the degree sign is not a finite number
pub fn parse_reading(field: &str) -> Result<Measurement<TemperatureUnit>, FieldError> {
    let (number, unit) = field
        .split_once(DEGREE_SIGN)
        .ok_or_else(|| FieldError::MalformedReading(field.to_string()))?;
    if unit.contains(DEGREE_SIGN) {
        return Err(FieldError::MalformedReading(field.to_string()));
    }

    let unit = match unit.trim() {
        "C" => TemperatureUnit::Celsius,
        "F" => TemperatureUnit::Fahrenheit,
        other => return Err(FieldError::UnsupportedUnit(format!("{}{}", DEGREE_SIGN, other))),
    };
    let magnitude = parse_magnitude(number)?;
    Ok(Measurement::new(magnitude, unit, field))
}

/// Parses the three fields of a data row into a `Record`.
pub fn parse_record(date: &str, distance: &str, reading: &str) -> Result<Record, FieldError> {
    Ok(Record {
        date: date.to_string(),
        distance: parse_distance(distance)?,
        reading: parse_reading(reading)?,
    })
}

/// Splits a distance field into its number text and unit.
fn split_distance(field: &str) -> Result<(&str, DistanceUnit), FieldError> {
    let mut tail = field.char_indices().rev();
    let Some((last_idx, last)) = tail.next() else {
        return Err(FieldError::MalformedDistance(field.to_string()));
    };

    let (number, unit) = match tail.next() {
        Some((prev_idx, prev))
            if prev.eq_ignore_ascii_case(&'f') && last.eq_ignore_ascii_case(&'t') =>
        {
            (&field[..prev_idx], Some(DistanceUnit::Feet))
        }
        _ => {
            let unit = match last {
                'm' => Some(DistanceUnit::Meters),
                _ => None,
            };
            (&field[..last_idx], unit)
        }
    };

    // A bare suffix has nothing left to parse
    if number.trim().is_empty() {
        return Err(FieldError::MalformedDistance(field.to_string()));
    }
    match unit {
        Some(unit) => Ok((number, unit)),
        None => Err(FieldError::UnsupportedUnit(last.to_string())),
    }
}

/// Parses magnitude text, tolerating surrounding whitespace.
fn parse_magnitude(text: &str) -> Result<f64, FieldError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FieldError::MalformedValue(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meters() {
        let m = parse_distance("41m").expect("Should parse meters");
        assert_eq!(m.magnitude(), 41.0);
        assert_eq!(m.unit(), DistanceUnit::Meters);
        assert_eq!(m.as_str(), "41m");
    }

    #[test]
    fn test_parse_feet_any_case() {
        for field in ["12.5ft", "12.5FT", "12.5Ft", "12.5fT"] {
            let m = parse_distance(field).expect("Should parse feet");
            assert_eq!(m.magnitude(), 12.5);
            assert_eq!(m.unit(), DistanceUnit::Feet);
            assert_eq!(m.as_str(), field);
        }
    }

    #[test]
    fn test_parse_distance_with_space_before_suffix() {
        let m = parse_distance("41 m").expect("Should tolerate inner space");
        assert_eq!(m.magnitude(), 41.0);
        let ft = parse_distance(" 3.5 ft").expect("Should tolerate inner space");
        assert_eq!(ft.magnitude(), 3.5);
    }

    #[test]
    fn test_parse_negative_and_exponent() {
        assert_eq!(parse_distance("-2.5m").map(|m| m.magnitude()), Ok(-2.5));
        assert_eq!(parse_distance("1e3ft").map(|m| m.magnitude()), Ok(1000.0));
    }

    #[test]
    fn test_parse_distance_empty() {
        assert_eq!(
            parse_distance(""),
            Err(FieldError::MalformedDistance(String::new()))
        );
    }

    #[test]
    fn test_parse_distance_suffix_only() {
        assert_eq!(
            parse_distance("m"),
            Err(FieldError::MalformedDistance("m".to_string()))
        );
        assert_eq!(
            parse_distance("ft"),
            Err(FieldError::MalformedDistance("ft".to_string()))
        );
        assert_eq!(
            parse_distance(" FT"),
            Err(FieldError::MalformedDistance(" FT".to_string()))
        );
    }

    #[test]
    fn test_parse_distance_unknown_suffix() {
        assert_eq!(
            parse_distance("41km"),
            Err(FieldError::MalformedValue("41k".to_string()))
        );
        assert_eq!(
            parse_distance("41yd"),
            Err(FieldError::UnsupportedUnit("d".to_string()))
        );
        assert_eq!(
            parse_distance("41M"),
            Err(FieldError::UnsupportedUnit("M".to_string()))
        );
        assert_eq!(
            parse_distance("41"),
            Err(FieldError::UnsupportedUnit("1".to_string()))
        );
    }

    #[test]
    fn test_parse_distance_bad_number() {
        assert_eq!(
            parse_distance("abcm"),
            Err(FieldError::MalformedValue("abc".to_string()))
        );
        assert_eq!(
            parse_distance("NaNm"),
            Err(FieldError::MalformedValue("NaN".to_string()))
        );
        assert_eq!(
            parse_distance("infft"),
            Err(FieldError::MalformedValue("inf".to_string()))
        );
    }

    #[test]
    fn test_parse_celsius_and_fahrenheit() {
        let c = parse_reading("10°C").expect("Should parse Celsius");
        assert_eq!(c.magnitude(), 10.0);
        assert_eq!(c.unit(), TemperatureUnit::Celsius);

        let f = parse_reading("-3.5°F").expect("Should parse Fahrenheit");
        assert_eq!(f.magnitude(), -3.5);
        assert_eq!(f.unit(), TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_parse_reading_whitespace_around_unit() {
        let r = parse_reading("21.5° C ").expect("Should trim unit");
        assert_eq!(r.unit(), TemperatureUnit::Celsius);
        assert_eq!(r.as_str(), "21.5° C ");

        let r = parse_reading("70°\tF").expect("Should trim unit");
        assert_eq!(r.unit(), TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_parse_reading_missing_degree_sign() {
        assert_eq!(
            parse_reading("10C"),
            Err(FieldError::MalformedReading("10C".to_string()))
        );
    }

    #[test]
    fn test_parse_reading_two_degree_signs() {
        assert_eq!(
            parse_reading("10°°C"),
            Err(FieldError::MalformedReading("10°°C".to_string()))
        );
    }

    #[test]
    fn test_parse_reading_unknown_unit() {
        assert_eq!(
            parse_reading("280°K"),
            Err(FieldError::UnsupportedUnit("°K".to_string()))
        );
        assert_eq!(
            parse_reading("10°c"),
            Err(FieldError::UnsupportedUnit("°c".to_string()))
        );
        assert_eq!(
            parse_reading("10°"),
            Err(FieldError::UnsupportedUnit("°".to_string()))
        );
    }

    #[test]
    fn test_parse_reading_bad_number() {
        assert_eq!(
            parse_reading("warm°C"),
            Err(FieldError::MalformedValue("warm".to_string()))
        );
        assert_eq!(
            parse_reading("°C"),
            Err(FieldError::MalformedValue(String::new()))
        );
    }

    #[test]
    fn test_parse_record() {
        let record = parse_record("2024-01-01", "41m", "10°C").expect("Should parse row");
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.fields(), ["2024-01-01", "41m", "10°C"]);
    }

    #[test]
    fn test_parse_record_reports_first_bad_field() {
        assert_eq!(
            parse_record("2024-01-01", "41x", "10C"),
            Err(FieldError::UnsupportedUnit("x".to_string()))
        );
    }
}
