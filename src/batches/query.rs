use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::{Batch, BatchStatus};

/// Get a batch by id.
pub async fn get_batch(pool: &SqlitePool, id: Uuid) -> Result<Batch, StoreError> {
    sqlx::query_as::<_, Batch>(
        r#"
        SELECT * FROM batches WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| StoreError::not_found("batch", id))
}

/// Get every batch currently in the given status. Empty when nothing matches.
pub async fn get_batches_by_status(
    pool: &SqlitePool,
    status: BatchStatus,
) -> Result<Vec<Batch>, StoreError> {
    let batches = sqlx::query_as::<_, Batch>(
        r#"
        SELECT * FROM batches WHERE status = $1
        "#,
    )
    .bind(status)
    .fetch_all(pool)
    .await?;

    Ok(batches)
}

/// The "next N batches to process" query: oldest first, bounded.
///
/// Ties on create_date fall back to insertion order so pagination stays
/// stable.
pub async fn get_batches_by_status_oldest_first(
    pool: &SqlitePool,
    status: BatchStatus,
    limit: i64,
) -> Result<Vec<Batch>, StoreError> {
    let batches = sqlx::query_as::<_, Batch>(
        r#"
        SELECT * FROM batches
        WHERE status = $1
        ORDER BY create_date ASC, rowid ASC
        LIMIT $2
        "#,
    )
    .bind(status)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(batches)
}

/// Count batches in the given status without materializing rows.
pub async fn count_batches_by_status(
    pool: &SqlitePool,
    status: BatchStatus,
) -> Result<i64, StoreError> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM batches WHERE status = $1
        "#,
    )
    .bind(status)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
