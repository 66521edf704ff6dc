use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::NewResponse;

/// Create a new response for an existing record, returning its generated id.
///
/// Both the batch and the record references are validated by the store;
/// either one dangling fails with `ReferentialIntegrity` and persists
/// nothing. `updated_date` stays unset until the first mutation.
pub async fn create_response(pool: &SqlitePool, response: NewResponse) -> Result<Uuid, StoreError> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO responses (
            id, batch_id, record_id, run_number, status,
            claim_number, response, create_date
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(id)
    .bind(response.batch_id)
    .bind(response.record_id)
    .bind(response.run_number)
    .bind(response.status)
    .bind(&response.claim_number)
    .bind(&response.response)
    .bind(Utc::now())
    .execute(pool)
    .await
    .map_err(|e| StoreError::from_write("response", e))?;

    Ok(id)
}
