use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::ResponseStatus;

/// Overwrite the status of exactly one response. `NotFound` if the id does
/// not exist.
pub async fn update_response_status(
    pool: &SqlitePool,
    id: Uuid,
    status: ResponseStatus,
) -> Result<u64, StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE responses
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
        return Err(StoreError::not_found("response", id));
    }

    Ok(result.rows_affected())
}

/// Unconditionally move every response in (batch, run) to `status`,
/// typically when a run's adjudication finishes as a unit. Zero matches is
/// a normal result.
pub async fn update_run_status(
    pool: &SqlitePool,
    batch_id: Uuid,
    run_number: i64,
    status: ResponseStatus,
) -> Result<u64, StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE responses
        SET status = $3, updated_date = $4
        WHERE batch_id = $1 AND run_number = $2
        "#,
    )
    .bind(batch_id)
    .bind(run_number)
    .bind(status)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
