// src/application/time_range.rs
use crate::domain::Timestamp;

/// Turns optional numeric bounds into whole-second range bounds.
///
/// Each side is independent and an absent side means unbounded. Inverted
/// ranges are passed through as-is.
pub fn to_range(from: Option<f64>, to: Option<f64>) -> (Option<Timestamp>, Option<Timestamp>) {
    (
        from.map(Timestamp::from_f64_truncated),
        to.map(Timestamp::from_f64_truncated),
    )
}
