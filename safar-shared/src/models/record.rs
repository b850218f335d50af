use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which backup collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Booking,
    Enquiry,
}

impl RecordKind {
    /// Key the collection is persisted under in local storage.
    pub fn storage_key(&self) -> &'static str {
        match self {
            RecordKind::Booking => "bookings",
            RecordKind::Enquiry => "enquiries",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Booking => f.write_str("booking"),
            RecordKind::Enquiry => f.write_str("enquiry"),
        }
    }
}

/// Operator-side processing state. The engine only ever writes `Pending`;
/// the surrounding application owns any later transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A locally persisted copy of one submission. Records are append-only:
/// created right before dispatch, never mutated or deleted here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackupRecord<T> {
    pub id: i64,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
    #[serde(flatten)]
    pub submission: T,
}
