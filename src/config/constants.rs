//! Conversion constants and defaults.

/// Feet per meter. Used in both directions, so `feet_to_meters` is only the
/// inverse of `meters_to_feet` up to floating point rounding.
pub const FEET_PER_METER: f64 = 3.28084;

/// Offset between the Celsius and Fahrenheit zero points.
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Degree sign separating a reading's magnitude from its unit letter.
pub const DEGREE_SIGN: char = '°';

// Canonical suffixes appended to converted magnitudes
/// Suffix for meters
pub const SUFFIX_METERS: &str = "m";
/// Suffix for feet
pub const SUFFIX_FEET: &str = "ft";
/// Suffix for degrees Celsius
pub const SUFFIX_CELSIUS: &str = "°C";
/// Suffix for degrees Fahrenheit
pub const SUFFIX_FAHRENHEIT: &str = "°F";

// Target unit selectors accepted on the command line and by `convert`
/// Selects meters
pub const SELECTOR_METERS: &str = "m";
/// Selects feet (rendered as `ft`)
pub const SELECTOR_FEET: &str = "f";
/// Selects degrees Celsius
pub const SELECTOR_CELSIUS: &str = "C";
/// Selects degrees Fahrenheit
pub const SELECTOR_FAHRENHEIT: &str = "F";

/// Decimal places used when rendering a converted magnitude.
pub const OUTPUT_PRECISION: usize = 2;

/// UTF-8 byte-order mark, carried from input to output when present.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Number of fields every data row must carry: date, distance, reading.
pub const FIELDS_PER_ROW: usize = 3;
