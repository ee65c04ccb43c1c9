//! Leaderboard entry model
//!
//! One record as the backend stores it, plus the flattening into string
//! fields used for the form-encoded POST body.

use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field key for the backend-assigned identifier
pub const FIELD_ID: &str = "_id";
/// Field key for the participant name
pub const FIELD_NAME: &str = "name";
/// Field key for the score
pub const FIELD_SCORE: &str = "score";
/// Field key for the timestamp
pub const FIELD_TIMESTAMP: &str = "timestamp";

/// Text sent for an absent id or timestamp
pub const ABSENT: &str = "";

/// A single leaderboard record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Backend-assigned identifier; `None` until the backend has stored the entry
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name of the participant
    pub name: String,

    /// Achieved score
    pub score: f64,

    /// When the score was achieved; `None` lets the backend assign it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Entry {
    /// Create a fresh submission with no id and no timestamp
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            score,
            timestamp: None,
        }
    }

    /// Refer to an existing record
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attach the time the score was achieved
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Flatten into the `_id`/`name`/`score`/`timestamp` field map
    ///
    /// `score` uses `f64`'s `Display`, which never groups digits and always
    /// uses `.` as decimal point, and parses back to the same value.
    /// An absent id or timestamp becomes [`ABSENT`] (the empty string).
    pub fn to_field_map(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (
                FIELD_ID.to_string(),
                self.id.clone().unwrap_or_else(|| ABSENT.to_string()),
            ),
            (FIELD_NAME.to_string(), self.name.clone()),
            (FIELD_SCORE.to_string(), self.score.to_string()),
            (
                FIELD_TIMESTAMP.to_string(),
                self.timestamp
                    .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
                    .unwrap_or_else(|| ABSENT.to_string()),
            ),
        ])
    }

    /// Parse the JSON array a `GET` on the leaderboard resource returns
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::Deserialization`](crate::LeaderboardError::Deserialization)
    /// if the body is not a JSON array of entries.
    pub fn parse_list(body: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(body)?)
    }
}
