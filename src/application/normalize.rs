// src/application/normalize.rs
//
// Converts optional field arguments into the fixed values the backends expect.
use crate::application::arguments::TimeArg;
use crate::domain::{GatewayError, Timestamp};

/// Absent strings become `""`.
pub fn string_or_empty(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// An absent list stays absent; null entries inside a present list are skipped.
pub fn present_strings(values: Option<Vec<Option<String>>>) -> Option<Vec<String>> {
    values.map(|items| items.into_iter().flatten().collect())
}

/// Absent numeric timestamps become the zero instant.
pub fn timestamp_or_zero(value: Option<f64>) -> Timestamp {
    value.map_or(Timestamp::ZERO, Timestamp::from_f64_truncated)
}

/// Like [`timestamp_or_zero`], also accepting whole seconds given as a string.
/// An empty string counts as absent.
pub fn time_arg_or_zero(value: Option<TimeArg>) -> Result<Timestamp, GatewayError> {
    match value {
        None => Ok(Timestamp::ZERO),
        Some(TimeArg::Seconds(seconds)) => Ok(Timestamp::from_f64_truncated(seconds)),
        Some(TimeArg::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(Timestamp::ZERO);
            }
            text.parse::<i64>()
                .map(Timestamp::from_seconds)
                .map_err(|e| GatewayError::InvalidArguments(format!("timestamp {text:?}: {e}")))
        }
    }
}

/// Raw bytes of the image argument; absent means no payload.
pub fn image_bytes(value: Option<String>) -> Vec<u8> {
    value.map(String::into_bytes).unwrap_or_default()
}
