//! Scroll values: a numeric magnitude plus a unit suffix.
//!
//! An absolute value is anything whose leading portion parses as a float:
//! `"120"`, `"120px"`, `"-3.5em"`, `"50%"`. The unit is whatever follows the
//! number and defaults to the empty string. All numeric types use f32.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing raw value strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("`{0}` is not an absolute value")]
    NotAbsolute(String),
    #[error("`{0}` is not a relative value")]
    NotRelative(String),
    #[error("unknown anchor `{token}` in relative value `{raw}`")]
    UnknownAnchor { token: String, raw: String },
}

/// A parsed absolute value: magnitude and unit.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ScrollValue {
    pub value: f32,
    pub unit: String,
}

impl ScrollValue {
    pub fn new(value: f32, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Construct a pixel value.
    pub fn px(value: f32) -> Self {
        Self::new(value, "px")
    }

    /// Split a raw string into magnitude and unit.
    /// Fails with [`ValueError::NotAbsolute`] when no leading float is present.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        let trimmed = raw.trim();
        let split = float_prefix_len(trimmed);
        if split == 0 {
            return Err(ValueError::NotAbsolute(raw.to_string()));
        }
        let value: f32 = trimmed[..split]
            .parse()
            .map_err(|_| ValueError::NotAbsolute(raw.to_string()))?;
        Ok(Self {
            value,
            unit: trimmed[split..].trim().to_string(),
        })
    }
}

impl fmt::Display for ScrollValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_magnitude(self.value), self.unit)
    }
}

/// True iff the raw string has a parseable leading float.
pub fn is_absolute(raw: &str) -> bool {
    float_prefix_len(raw.trim()) > 0
}

/// Format a magnitude rounded to 4 decimal places, without trailing zeros.
/// Rounding through f64 suppresses float noise; `1.0` renders as `"1"`.
pub fn format_magnitude(value: f32) -> String {
    let rounded = (value as f64 * 1e4).round() / 1e4;
    format!("{rounded}")
}

/// Length of the longest prefix of `s` that parses as a float, or 0.
/// Accepts an optional sign, decimal point, and exponent.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return 0;
    }
    // Exponent part is only consumed when complete ("1e5", "1e-5").
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_value_and_unit() {
        assert_eq!(ScrollValue::parse("123px").unwrap(), ScrollValue::px(123.0));
        assert_eq!(
            ScrollValue::parse("50%").unwrap(),
            ScrollValue::new(50.0, "%")
        );
        assert_eq!(ScrollValue::parse("10").unwrap(), ScrollValue::new(10.0, ""));
        assert_eq!(
            ScrollValue::parse("-3.5em").unwrap(),
            ScrollValue::new(-3.5, "em")
        );
        assert_eq!(
            ScrollValue::parse("1e2px").unwrap(),
            ScrollValue::new(100.0, "px")
        );
    }

    #[test]
    fn parse_rejects_non_absolute() {
        assert!(matches!(
            ScrollValue::parse("top-middle"),
            Err(ValueError::NotAbsolute(_))
        ));
        assert!(ScrollValue::parse("").is_err());
        assert!(ScrollValue::parse("px").is_err());
    }

    #[test]
    fn is_absolute_matches_parse() {
        for raw in ["0", "120px", "-1.25vh", ".5", "+2%"] {
            assert!(is_absolute(raw), "{raw} should be absolute");
            assert!(ScrollValue::parse(raw).is_ok());
        }
        for raw in ["bottom-top", "", "-", "e5"] {
            assert!(!is_absolute(raw), "{raw} should not be absolute");
        }
    }

    #[test]
    fn format_then_parse_round_trips() {
        for (value, unit) in [(123.0, "px"), (0.5, ""), (-42.25, "%"), (1.0, "vh")] {
            let sv = ScrollValue::new(value, unit);
            let parsed = ScrollValue::parse(&sv.to_string()).unwrap();
            assert_eq!(parsed, sv);
        }
    }

    #[test]
    fn format_magnitude_trims_noise() {
        assert_eq!(format_magnitude(1.0), "1");
        assert_eq!(format_magnitude(0.5), "0.5");
        assert_eq!(format_magnitude(0.123456), "0.1235");
        assert_eq!(format_magnitude(-0.00004), "-0");
    }
}
