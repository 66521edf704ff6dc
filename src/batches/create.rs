use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::NewBatch;

/// Create a new batch, returning its generated id.
///
/// `create_date` and `updated_date` are assigned here; callers never supply
/// timestamps.
pub async fn create_batch(pool: &SqlitePool, batch: NewBatch) -> Result<Uuid, StoreError> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO batches (
            id, client_id, filename, status, run_number,
            global_control_number, create_date, updated_date
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(id)
    .bind(batch.client_id)
    .bind(&batch.filename)
    .bind(batch.status)
    .bind(batch.run_number)
    .bind(&batch.global_control_number)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| StoreError::from_write("batch", e))?;

    Ok(id)
}
