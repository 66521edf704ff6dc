use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::RecordStatus;

/// Overwrite the status of exactly one record. `NotFound` if the id does
/// not exist.
pub async fn update_record_status(
    pool: &SqlitePool,
    id: Uuid,
    status: RecordStatus,
) -> Result<u64, StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE records
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
        return Err(StoreError::not_found("record", id));
    }

    Ok(result.rows_affected())
}
