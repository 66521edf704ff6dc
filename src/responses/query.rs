use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::Response;

/// Get a response by id.
pub async fn get_response(pool: &SqlitePool, id: Uuid) -> Result<Response, StoreError> {
    sqlx::query_as::<_, Response>(
        r#"
        SELECT * FROM responses WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| StoreError::not_found("response", id))
}

/// Every response in one batch + run generation, in insertion order.
pub async fn get_responses_by_batch_and_run(
    pool: &SqlitePool,
    batch_id: Uuid,
    run_number: i64,
) -> Result<Vec<Response>, StoreError> {
    let responses = sqlx::query_as::<_, Response>(
        r#"
        SELECT * FROM responses
        WHERE batch_id = $1 AND run_number = $2
        ORDER BY create_date ASC, rowid ASC
        "#,
    )
    .bind(batch_id)
    .bind(run_number)
    .fetch_all(pool)
    .await?;

    Ok(responses)
}
