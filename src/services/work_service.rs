use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::{RecordStatus, ResponseIdentifier, ResponseStatus};
use crate::{records, responses};

/// Service for dispatcher operations (discovering and claiming work).
#[derive(Clone)]
pub struct WorkService {
    pool: SqlitePool,
}

impl WorkService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Identifiers of every response still awaiting adjudication.
    pub async fn pending_responses(&self) -> Result<Vec<ResponseIdentifier>, StoreError> {
        responses::get_pending_response_identifiers(&self.pool).await
    }

    /// Race to move a run's records from `expected` into a new run and
    /// status. Zero means the race was lost; do not treat it as fatal.
    pub async fn claim_records(
        &self,
        batch_id: Uuid,
        run_number: i64,
        expected: RecordStatus,
        new_run_number: i64,
        new_status: RecordStatus,
    ) -> Result<u64, StoreError> {
        records::claim_records(
            &self.pool,
            batch_id,
            run_number,
            expected,
            new_run_number,
            new_status,
        )
        .await
    }

    /// Race to move a run's responses from `expected` into a new run and
    /// status.
    pub async fn claim_responses(
        &self,
        batch_id: Uuid,
        run_number: i64,
        expected: ResponseStatus,
        new_run_number: i64,
        new_status: ResponseStatus,
    ) -> Result<u64, StoreError> {
        responses::claim_responses(
            &self.pool,
            batch_id,
            run_number,
            expected,
            new_run_number,
            new_status,
        )
        .await
    }

    /// Move every response of a run to `status` once its adjudication
    /// finishes as a unit.
    pub async fn complete_run(
        &self,
        batch_id: Uuid,
        run_number: i64,
        status: ResponseStatus,
    ) -> Result<u64, StoreError> {
        responses::update_run_status(&self.pool, batch_id, run_number, status).await
    }

    /// Progress counter for "is this run done" checks.
    pub async fn run_progress(
        &self,
        batch_id: Uuid,
        run_number: i64,
        status: RecordStatus,
    ) -> Result<i64, StoreError> {
        records::count_records_by_status(&self.pool, batch_id, run_number, status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::create_response;
    use crate::test_helpers::{new_response, seed_batch, seed_record, test_pool};

    #[tokio::test]
    async fn dispatch_cycle_drains_pending_work() {
        let pool = test_pool().await;
        let batch_id = seed_batch(&pool).await;
        let record_id = seed_record(&pool, batch_id, 1).await;
        create_response(
            &pool,
            new_response(batch_id, record_id, 1, ResponseStatus::Pending),
        )
        .await
        .unwrap();

        let service = WorkService::new(pool.clone());

        let pending = service.pending_responses().await.unwrap();
        assert_eq!(pending.len(), 1);
        let item = &pending[0];
        assert_eq!(item.batch_id, batch_id);

        let claimed = service
            .claim_responses(
                item.batch_id,
                item.run_number,
                ResponseStatus::Pending,
                item.run_number,
                ResponseStatus::Complete,
            )
            .await
            .unwrap();
        assert_eq!(claimed, 1);

        assert!(service.pending_responses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn run_progress_follows_record_claims() {
        let pool = test_pool().await;
        let batch_id = seed_batch(&pool).await;
        seed_record(&pool, batch_id, 1).await;

        let service = WorkService::new(pool.clone());
        assert_eq!(
            service
                .run_progress(batch_id, 1, RecordStatus::Pending)
                .await
                .unwrap(),
            1
        );

        let claimed = service
            .claim_records(batch_id, 1, RecordStatus::Pending, 2, RecordStatus::Processing)
            .await
            .unwrap();
        assert_eq!(claimed, 1);

        assert_eq!(
            service
                .run_progress(batch_id, 2, RecordStatus::Processing)
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            service
                .run_progress(batch_id, 1, RecordStatus::Pending)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn complete_run_marks_every_response() {
        let pool = test_pool().await;
        let batch_id = seed_batch(&pool).await;
        let record_id = seed_record(&pool, batch_id, 1).await;
        for _ in 0..2 {
            create_response(
                &pool,
                new_response(batch_id, record_id, 1, ResponseStatus::Pending),
            )
            .await
            .unwrap();
        }

        let service = WorkService::new(pool.clone());
        let updated = service
            .complete_run(batch_id, 1, ResponseStatus::Complete)
            .await
            .unwrap();
        assert_eq!(updated, 2);
    }
}
