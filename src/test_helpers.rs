//! Test helpers: a fresh in-memory database per test plus entity fixtures.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::types::*;

/// Open an in-memory database with the schema applied.
///
/// Each call returns an isolated store, so tests never share state. The
/// pool is capped at one connection; an in-memory database is private to
/// its connection.
pub(crate) async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid connection string")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    crate::db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub(crate) fn new_batch(status: BatchStatus) -> NewBatch {
    NewBatch {
        client_id: 1,
        filename: "claims-20260101.edi".to_string(),
        status,
        run_number: Some(1),
        global_control_number: "GCN-0001".to_string(),
    }
}

pub(crate) fn new_record(batch_id: Uuid, run_number: i64, status: RecordStatus) -> NewRecord {
    NewRecord {
        batch_id,
        run_number,
        status,
        claim_number: "CLM-1001".to_string(),
        record: serde_json::json!({ "lines": [{ "procedure": "99213", "charge": 125.00 }] }),
    }
}

pub(crate) fn new_response(
    batch_id: Uuid,
    record_id: Uuid,
    run_number: i64,
    status: ResponseStatus,
) -> NewResponse {
    NewResponse {
        batch_id,
        record_id,
        run_number,
        status,
        claim_number: "CLM-1001".to_string(),
        response: serde_json::json!({ "disposition": "accepted", "edits": [] }),
    }
}

/// Insert a batch to hang records off of.
pub(crate) async fn seed_batch(pool: &SqlitePool) -> Uuid {
    crate::batches::create_batch(pool, new_batch(BatchStatus::Processing))
        .await
        .expect("Failed to seed batch")
}

/// Insert a record to hang responses off of.
pub(crate) async fn seed_record(pool: &SqlitePool, batch_id: Uuid, run_number: i64) -> Uuid {
    crate::records::create_record(pool, new_record(batch_id, run_number, RecordStatus::Pending))
        .await
        .expect("Failed to seed record")
}
