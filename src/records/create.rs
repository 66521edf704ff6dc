use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::NewRecord;

/// Create a new record under an existing batch, returning its generated id.
///
/// The batch reference is validated by the store; a dangling `batch_id`
/// fails with `ReferentialIntegrity` and persists nothing.
pub async fn create_record(pool: &SqlitePool, record: NewRecord) -> Result<Uuid, StoreError> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO records (
            id, batch_id, run_number, status, claim_number,
            record, create_date, updated_date
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(id)
    .bind(record.batch_id)
    .bind(record.run_number)
    .bind(record.status)
    .bind(&record.claim_number)
    .bind(&record.record)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| StoreError::from_write("record", e))?;

    Ok(id)
}
