use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::{Record, RecordStatus};

/// Get a record by id.
pub async fn get_record(pool: &SqlitePool, id: Uuid) -> Result<Record, StoreError> {
    sqlx::query_as::<_, Record>(
        r#"
        SELECT * FROM records WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| StoreError::not_found("record", id))
}

/// Every record in one batch + run generation.
///
/// Batch ids and run numbers are not validated for existence on read; an
/// unknown pair is simply an empty list.
pub async fn get_records_by_batch_and_run(
    pool: &SqlitePool,
    batch_id: Uuid,
    run_number: i64,
) -> Result<Vec<Record>, StoreError> {
    let records = sqlx::query_as::<_, Record>(
        r#"
        SELECT * FROM records
        WHERE batch_id = $1 AND run_number = $2
        "#,
    )
    .bind(batch_id)
    .bind(run_number)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

/// Most-recently-updated records of a generation, bounded. Used to sample
/// recent activity.
pub async fn get_records_by_batch_and_run_recent_first(
    pool: &SqlitePool,
    batch_id: Uuid,
    run_number: i64,
    limit: i64,
) -> Result<Vec<Record>, StoreError> {
    let records = sqlx::query_as::<_, Record>(
        r#"
        SELECT * FROM records
        WHERE batch_id = $1 AND run_number = $2
        ORDER BY updated_date DESC, rowid DESC
        LIMIT $3
        "#,
    )
    .bind(batch_id)
    .bind(run_number)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

/// Progress counter: how many records of a generation are in `status`.
/// The basis for "is this run done" checks.
pub async fn count_records_by_status(
    pool: &SqlitePool,
    batch_id: Uuid,
    run_number: i64,
    status: RecordStatus,
) -> Result<i64, StoreError> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM records
        WHERE batch_id = $1 AND run_number = $2 AND status = $3
        "#,
    )
    .bind(batch_id)
    .bind(run_number)
    .bind(status)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
