// src/domain/note.rs
use serde::{Deserialize, Serialize};

/// Point in time with second resolution, as exchanged with the record service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp { seconds: 0, nanos: 0 };

    pub fn from_seconds(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    /// Truncates toward zero; fractional seconds are discarded.
    /// NaN maps to zero and out-of-range values saturate.
    pub fn from_f64_truncated(value: f64) -> Self {
        Self::from_seconds(value as i64)
    }

    pub fn as_f64_seconds(&self) -> f64 {
        self.seconds as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub team: String,
    #[serde(rename = "type")]
    pub note_type: String,
    pub link: String,
    pub image: Vec<u8>,
    pub tags: Vec<String>,
    pub date_created: Timestamp,
    pub date_modified: Timestamp,
}
