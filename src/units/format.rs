//! Rendering of converted magnitudes.

use crate::config::OUTPUT_PRECISION;

/// Renders a magnitude with two decimal places immediately followed by `suffix`.
///
/// Only used for converted values; passthrough fields keep their original text.
pub fn render_magnitude(magnitude: f64, suffix: &str) -> String {
    format!("{:.*}{}", OUTPUT_PRECISION, magnitude, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_two_decimals() {
        assert_eq!(render_magnitude(134.51444, "ft"), "134.51ft");
        assert_eq!(render_magnitude(50.0, "°F"), "50.00°F");
        assert_eq!(render_magnitude(0.0, "m"), "0.00m");
    }

    #[test]
    fn test_render_rounds_to_nearest() {
        assert_eq!(render_magnitude(1.006, "m"), "1.01m");
        assert_eq!(render_magnitude(-3.333333, "°C"), "-3.33°C");
    }

    #[test]
    fn test_render_no_separator() {
        let rendered = render_magnitude(12.0, "°C");
        assert!(!rendered.contains(' '));
        assert!(rendered.ends_with("°C"));
    }
}
