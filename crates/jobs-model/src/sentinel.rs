//! Sentinel handling for source fields.
//!
//! The source dataset encodes "missing" with reserved literals instead of
//! empty cells: `-1.0` for numeric ratings and `"-1"` for text fields.
//! Every comparison against those literals lives here so the rest of the
//! pipeline only sees `Option` values.

/// Numeric sentinel meaning "no rating recorded".
pub const RATING_MISSING: f64 = -1.0;

/// Text sentinel meaning "unknown, same as location".
pub const TEXT_MISSING: &str = "-1";

/// Returns the rating when it is a real value, `None` for the sentinel.
///
/// The comparison is exact floating-point equality against `-1.0`, matching
/// how the source dataset writes the sentinel.
pub fn known_rating(value: f64) -> Option<f64> {
    if value == RATING_MISSING {
        None
    } else {
        Some(value)
    }
}

/// Returns the text when it is a real value, `None` for the sentinel.
pub fn known_text(value: &str) -> Option<&str> {
    if value == TEXT_MISSING {
        None
    } else {
        Some(value)
    }
}
