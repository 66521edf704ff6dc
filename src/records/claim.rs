use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::RecordStatus;

/// Conditionally transition every record in (batch, run) whose status is
/// `expected`, moving it to `new_status` under `new_run_number`.
///
/// This is the compare-and-swap primitive concurrent workers race on. The
/// filter and the update are one atomic statement; at most one caller wins
/// a given row. A count of zero means nothing was eligible - the caller
/// lost the race or the generation was already moved - and is a normal
/// result, not an error.
pub async fn claim_records(
    pool: &SqlitePool,
    batch_id: Uuid,
    run_number: i64,
    expected: RecordStatus,
    new_run_number: i64,
    new_status: RecordStatus,
) -> Result<u64, StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE records
        SET status = $4, run_number = $5, updated_date = $6
        WHERE batch_id = $1 AND run_number = $2 AND status = $3
        "#,
    )
    .bind(batch_id)
    .bind(run_number)
    .bind(expected)
    .bind(new_status)
    .bind(new_run_number)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    let affected = result.rows_affected();
    debug!(%batch_id, run_number, affected, "record run transition");

    Ok(affected)
}
