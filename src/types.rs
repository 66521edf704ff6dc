use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::StoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum BatchStatus {
    Loading,
    Processing,
    Complete,
    Error,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordStatus {
    Pending,
    Processing,
    Incomplete,
    Complete,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Pending,
    Complete,
    Error,
}

impl BatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::Loading => "LOADING",
            BatchStatus::Processing => "PROCESSING",
            BatchStatus::Complete => "COMPLETE",
            BatchStatus::Error => "ERROR",
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOADING" => Ok(BatchStatus::Loading),
            "PROCESSING" => Ok(BatchStatus::Processing),
            "COMPLETE" => Ok(BatchStatus::Complete),
            "ERROR" => Ok(BatchStatus::Error),
            other => Err(StoreError::InvalidStatus(other.to_string())),
        }
    }
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "PENDING",
            RecordStatus::Processing => "PROCESSING",
            RecordStatus::Incomplete => "INCOMPLETE",
            RecordStatus::Complete => "COMPLETE",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(RecordStatus::Pending),
            "PROCESSING" => Ok(RecordStatus::Processing),
            "INCOMPLETE" => Ok(RecordStatus::Incomplete),
            "COMPLETE" => Ok(RecordStatus::Complete),
            other => Err(StoreError::InvalidStatus(other.to_string())),
        }
    }
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::Pending => "PENDING",
            ResponseStatus::Complete => "COMPLETE",
            ResponseStatus::Error => "ERROR",
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ResponseStatus::Pending),
            "COMPLETE" => Ok(ResponseStatus::Complete),
            "ERROR" => Ok(ResponseStatus::Error),
            other => Err(StoreError::InvalidStatus(other.to_string())),
        }
    }
}

/// A unit of ingested claim work. `run_number` counts reprocessing attempts.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Batch {
    pub id: Uuid,
    pub client_id: i64,
    pub filename: String,
    pub status: BatchStatus,
    pub run_number: Option<i64>,
    pub global_control_number: String,
    pub create_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

/// One claim line within a batch and a specific run.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Record {
    pub id: Uuid,
    pub batch_id: Uuid,
    pub run_number: i64,
    pub status: RecordStatus,
    pub claim_number: String,
    pub record: JsonValue,
    pub create_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

/// The validation result for a record. A record may accumulate several
/// responses across runs; identity is the generated id, not the record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Response {
    pub id: Uuid,
    pub batch_id: Uuid,
    pub record_id: Uuid,
    pub run_number: i64,
    pub status: ResponseStatus,
    pub claim_number: String,
    pub response: JsonValue,
    pub create_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
}

/// Caller-supplied fields for a new batch. Id and timestamps are assigned
/// by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBatch {
    pub client_id: i64,
    pub filename: String,
    pub status: BatchStatus,
    pub run_number: Option<i64>,
    pub global_control_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
    pub batch_id: Uuid,
    pub run_number: i64,
    pub status: RecordStatus,
    pub claim_number: String,
    pub record: JsonValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResponse {
    pub batch_id: Uuid,
    pub record_id: Uuid,
    pub run_number: i64,
    pub status: ResponseStatus,
    pub claim_number: String,
    pub response: JsonValue,
}

/// Lightweight handle to a not-yet-resolved response, used for work
/// discovery without loading payloads.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, PartialEq, Eq)]
pub struct ResponseIdentifier {
    pub response_id: Uuid,
    pub batch_id: Uuid,
    pub record_id: Uuid,
    pub run_number: i64,
    pub claim_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!("LOADING".parse::<BatchStatus>().unwrap(), BatchStatus::Loading);
        assert_eq!(BatchStatus::Processing.to_string(), "PROCESSING");
        assert_eq!(
            "INCOMPLETE".parse::<RecordStatus>().unwrap(),
            RecordStatus::Incomplete
        );
        assert_eq!("ERROR".parse::<ResponseStatus>().unwrap(), ResponseStatus::Error);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "ARCHIVED".parse::<BatchStatus>().unwrap_err();
        assert!(matches!(err, StoreError::InvalidStatus(value) if value == "ARCHIVED"));
    }
}
