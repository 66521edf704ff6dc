use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::{ResponseIdentifier, ResponseStatus};

/// The dispatcher's discovery feed: identifiers of every response currently
/// pending, across all batches and runs, in insertion order.
///
/// Returns identifiers rather than full rows so pollers never load
/// payloads. Empty when nothing is pending.
pub async fn get_pending_response_identifiers(
    pool: &SqlitePool,
) -> Result<Vec<ResponseIdentifier>, StoreError> {
    let identifiers = sqlx::query_as::<_, ResponseIdentifier>(
        r#"
        SELECT id AS response_id, batch_id, record_id, run_number, claim_number
        FROM responses
        WHERE status = $1
        ORDER BY create_date ASC, rowid ASC
        "#,
    )
    .bind(ResponseStatus::Pending)
    .fetch_all(pool)
    .await?;

    Ok(identifiers)
}

/// Conditionally transition every response in (batch, run) whose status is
/// `expected`, moving it to `new_status` under `new_run_number`.
///
/// Compare-and-swap semantics identical to the record variant: one atomic
/// statement, zero affected rows on a lost race, never an error.
pub async fn claim_responses(
    pool: &SqlitePool,
    batch_id: Uuid,
    run_number: i64,
    expected: ResponseStatus,
    new_run_number: i64,
    new_status: ResponseStatus,
) -> Result<u64, StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE responses
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
    debug!(%batch_id, run_number, affected, "response run transition");

    Ok(affected)
}
