//! Shared formatting utilities for printed results.

use crate::data::Scalar;

/// Format a floating point value with smart precision.
pub fn format_value(val: f64) -> String {
    if !val.is_finite() {
        return if val.is_nan() {
            "NaN".to_string()
        } else if val.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e6).contains(&abs_val) {
        format!("{:.3e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.2}", val)
    } else if abs_val >= 1.0 {
        format!("{:.4}", val)
    } else {
        format!("{:.5}", val)
    }
}

/// Format a typed value. Integers print exactly, floats with [`format_value`].
pub fn format_scalar(scalar: Scalar) -> String {
    match scalar {
        Scalar::Float(_) | Scalar::Double(_) => format_value(scalar.as_f64()),
        _ => scalar.to_string(),
    }
}
