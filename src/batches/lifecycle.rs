use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::BatchStatus;

/// Overwrite the status of exactly one batch.
///
/// The caller holds the id, so a zero row count means a stale or wrong
/// reference and is reported as `NotFound`.
pub async fn update_batch_status(
    pool: &SqlitePool,
    id: Uuid,
    status: BatchStatus,
) -> Result<u64, StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE batches
        SET status = $2, updated_date = $3
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(status)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::not_found("batch", id));
    }

    Ok(result.rows_affected())
}

/// Overwrite status and run number of exactly one batch, typically when a
/// reprocessing run is started. `NotFound` if the id does not exist.
pub async fn update_batch_status_and_run_number(
    pool: &SqlitePool,
    id: Uuid,
    status: BatchStatus,
    run_number: i64,
) -> Result<u64, StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE batches
        SET status = $2, run_number = $3, updated_date = $4
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(status)
    .bind(run_number)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::not_found("batch", id));
    }

    Ok(result.rows_affected())
}
