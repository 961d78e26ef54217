//! Tolerant numeric field decoding.
//!
//! A corrupted numeric field must not abort a whole trace, so every decoder
//! here falls back to zero instead of returning an error.

/// Decode a 32-bit integer field, `0` on failure
pub fn decode_int(field: &str) -> i32 {
    field.trim().parse().unwrap_or(0)
}

/// Decode a 64-bit integer field, `0` on failure
pub fn decode_int64(field: &str) -> i64 {
    field.trim().parse().unwrap_or(0)
}

/// Decode a floating point field, `0.0` on failure
///
/// `nan` and `inf` parse as floats but are treated as failures too.
pub fn decode_float(field: &str) -> f64 {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_fields() {
        assert_eq!(decode_int("2"), 2);
        assert_eq!(decode_int64("369752"), 369_752);
        assert_eq!(decode_float("0.000318"), 0.000318);
    }

    #[test]
    fn test_decode_invalid_fields_fall_back_to_zero() {
        assert_eq!(decode_int(""), 0);
        assert_eq!(decode_int("R"), 0);
        assert_eq!(decode_int64("12ab"), 0);
        assert_eq!(decode_float("TRUE"), 0.0);
    }

    #[test]
    fn test_decode_overflow_falls_back_to_zero() {
        assert_eq!(decode_int("99999999999"), 0);
        assert_eq!(decode_int64("99999999999"), 99_999_999_999);
    }

    #[test]
    fn test_decode_non_finite_floats_fall_back_to_zero() {
        for field in ["nan", "NaN", "inf", "-infinity", "1e999"] {
            assert_eq!(decode_float(field), 0.0, "field {field:?}");
        }
    }

    #[test]
    fn test_decode_trims_whitespace() {
        assert_eq!(decode_int(" 7 "), 7);
        assert_eq!(decode_float("1.5\r"), 1.5);
    }
}
