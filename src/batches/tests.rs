use tokio_test::assert_ok;
use uuid::Uuid;

use super::*;
use crate::test_helpers::{new_batch, test_pool};
use crate::types::*;

#[tokio::test]
async fn create_and_get_batch() {
    let pool = test_pool().await;

    let batch = new_batch(BatchStatus::Loading);
    let id = create_batch(&pool, batch.clone()).await.unwrap();

    let result = get_batch(&pool, id).await.unwrap();
    assert_eq!(result.id, id);
    assert_eq!(result.client_id, batch.client_id);
    assert_eq!(result.filename, batch.filename);
    assert_eq!(result.status, batch.status);
    assert_eq!(result.run_number, batch.run_number);
    assert_eq!(result.global_control_number, batch.global_control_number);
    assert!(result.updated_date >= result.create_date);
}

#[tokio::test]
async fn get_batch_that_does_not_exist() {
    let pool = test_pool().await;

    let err = get_batch(&pool, Uuid::new_v4()).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn get_batches_by_status_returns_matches() {
    let pool = test_pool().await;

    for _ in 0..3 {
        create_batch(&pool, new_batch(BatchStatus::Processing))
            .await
            .unwrap();
    }

    let batches = get_batches_by_status(&pool, BatchStatus::Processing)
        .await
        .unwrap();
    assert_eq!(batches.len(), 3);
    for batch in &batches {
        assert_eq!(batch.status, BatchStatus::Processing);
    }
}

#[tokio::test]
async fn get_batches_by_status_without_matches() {
    let pool = test_pool().await;

    for _ in 0..3 {
        create_batch(&pool, new_batch(BatchStatus::Processing))
            .await
            .unwrap();
    }

    let batches = assert_ok!(get_batches_by_status(&pool, BatchStatus::Complete).await);
    assert!(batches.is_empty());
}

#[tokio::test]
async fn oldest_first_returns_earliest_insert() {
    let pool = test_pool().await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(
            create_batch(&pool, new_batch(BatchStatus::Processing))
                .await
                .unwrap(),
        );
    }

    let batches = get_batches_by_status_oldest_first(&pool, BatchStatus::Processing, 1)
        .await
        .unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].id, ids[0]);
    assert_eq!(batches[0].status, BatchStatus::Processing);
}

#[tokio::test]
async fn count_matches_filtered_list() {
    let pool = test_pool().await;

    for _ in 0..3 {
        create_batch(&pool, new_batch(BatchStatus::Loading))
            .await
            .unwrap();
    }

    let count = count_batches_by_status(&pool, BatchStatus::Loading)
        .await
        .unwrap();
    let listed = get_batches_by_status(&pool, BatchStatus::Loading)
        .await
        .unwrap();
    assert_eq!(count, 3);
    assert_eq!(count as usize, listed.len());

    let none = count_batches_by_status(&pool, BatchStatus::Error)
        .await
        .unwrap();
    assert_eq!(none, 0);
}

#[tokio::test]
async fn update_status() {
    let pool = test_pool().await;

    let id = create_batch(&pool, new_batch(BatchStatus::Complete))
        .await
        .unwrap();

    let updated = update_batch_status(&pool, id, BatchStatus::Error)
        .await
        .unwrap();
    assert_eq!(updated, 1);

    let result = get_batch(&pool, id).await.unwrap();
    assert_eq!(result.status, BatchStatus::Error);
    assert_eq!(result.run_number, Some(1));
    assert!(result.updated_date >= result.create_date);
}

#[tokio::test]
async fn update_status_where_id_does_not_exist() {
    let pool = test_pool().await;

    create_batch(&pool, new_batch(BatchStatus::Complete))
        .await
        .unwrap();

    let err = update_batch_status(&pool, Uuid::new_v4(), BatchStatus::Error)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn update_status_and_run_number() {
    let pool = test_pool().await;

    let id = create_batch(&pool, new_batch(BatchStatus::Complete))
        .await
        .unwrap();

    let updated = update_batch_status_and_run_number(&pool, id, BatchStatus::Error, 10)
        .await
        .unwrap();
    assert_eq!(updated, 1);

    let result = get_batch(&pool, id).await.unwrap();
    assert_eq!(result.status, BatchStatus::Error);
    assert_eq!(result.run_number, Some(10));
}

#[tokio::test]
async fn update_status_and_run_number_where_id_does_not_exist() {
    let pool = test_pool().await;

    create_batch(&pool, new_batch(BatchStatus::Complete))
        .await
        .unwrap();

    let err = update_batch_status_and_run_number(&pool, Uuid::new_v4(), BatchStatus::Error, 10)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
