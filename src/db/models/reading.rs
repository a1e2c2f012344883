//! Reading data model.
//!
//! A reading is one triaxial sample reported by a device. Rows are
//! append-only: the store assigns the id and the ingestion time, and
//! nothing updates or deletes them afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored triaxial sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: i64,
    pub device_id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    /// The scalar every statistic is computed over.
    pub fn derived_value(&self) -> f64 {
        self.x + self.y + self.z
    }
}

/// Optional inclusive bounds on the stored timestamp.
///
/// Bounds are ISO-8601 prefixes (`2024-01-01`, `2024-01-01T12:00`) and are
/// compared against the stored timestamp string lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl TimeRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn since(start: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: None,
        }
    }

    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }
}
