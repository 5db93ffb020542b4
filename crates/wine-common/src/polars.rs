//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including string conversions, float formatting and dtype checks.

use polars::prelude::{AnyValue, DataType};

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`. Floats keep their fractional part
/// (`11.0` stays `11.0`) so a re-read of the text yields the same dtype.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use wine_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(5)), "5");
/// assert_eq!(any_to_string(AnyValue::Float64(7.4)), "7.4");
/// assert_eq!(any_to_string(AnyValue::String("red_wine")), "red_wine");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_float(f64::from(v)),
        AnyValue::Float64(v) => format_float(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "True" } else { "False" }.to_string(),
        other => other.to_string(),
    }
}

/// Formats a float for text export.
///
/// Whole numbers keep a trailing `.0`, exponents carry an explicit sign and at
/// least two digits, and NaN becomes an empty cell.
///
/// # Examples
///
/// ```
/// use wine_common::format_float;
///
/// assert_eq!(format_float(11.0), "11.0");
/// assert_eq!(format_float(0.076), "0.076");
/// assert_eq!(format_float(1e-7), "1e-07");
/// assert_eq!(format_float(f64::NAN), "");
/// ```
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return String::new();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let repr = format!("{v:?}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return repr;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(rest) => ('-', rest),
        None => ('+', exponent),
    };
    let mantissa = mantissa.strip_suffix(".0").unwrap_or(mantissa);
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Returns true for integer and floating-point column types.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    dtype.is_integer() || dtype.is_float()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_string_integers() {
        assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
        assert_eq!(any_to_string(AnyValue::Int64(-100)), "-100");
        assert_eq!(any_to_string(AnyValue::UInt32(0)), "0");
    }

    #[test]
    fn test_any_to_string_floats() {
        assert_eq!(any_to_string(AnyValue::Float64(1.5)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(1.0)), "1.0");
        assert_eq!(any_to_string(AnyValue::Float64(0.9978)), "0.9978");
    }

    #[test]
    fn test_any_to_string_boolean() {
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "True");
        assert_eq!(any_to_string(AnyValue::Boolean(false)), "False");
    }

    #[test]
    fn test_format_float_exponents() {
        assert_eq!(format_float(1e-7), "1e-07");
        assert_eq!(format_float(2.5e-10), "2.5e-10");
        assert_eq!(format_float(1e20), "1e+20");
    }

    #[test]
    fn test_format_float_non_finite() {
        assert_eq!(format_float(f64::NAN), "");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }
}
