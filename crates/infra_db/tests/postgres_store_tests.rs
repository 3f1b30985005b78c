//! PostgreSQL adapter integration tests
//!
//! These tests run the full stack against a real PostgreSQL instance in a
//! testcontainer and are therefore ignored by default; run them with
//! `cargo test -- --ignored` on a machine with a Docker daemon.
//!
//! All tests share one container. Builders generate unique usernames,
//! emails, and external ids, so tests never collide on the uniqueness
//! constraints, and review listings are always scoped to a test-owned
//! object or reviewer.

use std::time::Duration;

use core_kernel::{PageRequest, ReviewedObjectId, ReviewerId};
use domain_reviews::{
    DeletePolicy, NewReview, ReviewQuery, ReviewStore, ReviewedObjectStore, ReviewerStore,
    ThumbsRating, UpdateReview, UpdateReviewer,
};
use infra_db::PostgresReviewStore;
use test_utils::{
    assert_delete_conflict, assert_duplicate_key, assert_foreign_key, assert_fresh_timestamps,
    assert_newest_first, assert_not_found, assert_validation, shared_database,
    TestReviewBuilder, TestReviewedObjectBuilder, TestReviewerBuilder,
};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

async fn store() -> PostgresReviewStore {
    init_tracing();
    let db = shared_database().await.expect("test database");
    PostgresReviewStore::new(db.pool.clone())
}

async fn cascade_store() -> PostgresReviewStore {
    let db = shared_database().await.expect("test database");
    PostgresReviewStore::with_delete_policy(db.pool.clone(), DeletePolicy::Cascade)
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_create_then_get_reviewer_round_trip() {
    let store = store().await;
    let input = TestReviewerBuilder::new().build();

    let created = store.create_reviewer(input.clone()).await.unwrap();
    assert_fresh_timestamps(created.created_at, created.updated_at);

    let fetched = store.get_reviewer(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.username, input.username);
    assert_eq!(fetched.email, input.email);
    assert_eq!(fetched.full_name, input.full_name);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_duplicate_username_translated() {
    let store = store().await;
    let first = TestReviewerBuilder::new().build();
    store.create_reviewer(first.clone()).await.unwrap();

    let clashing = TestReviewerBuilder::new()
        .with_username(first.username.clone())
        .build();
    let error = store.create_reviewer(clashing).await.unwrap_err();
    assert_duplicate_key(&error);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_duplicate_review_pair_first_intact() {
    let store = store().await;
    let reviewer = store
        .create_reviewer(TestReviewerBuilder::new().build())
        .await
        .unwrap();
    let object = store
        .create_reviewed_object(TestReviewedObjectBuilder::new().build())
        .await
        .unwrap();

    let first = store
        .create_review(TestReviewBuilder::new(reviewer.id, object.id).with_stars(5).build())
        .await
        .unwrap();
    let error = store
        .create_review(TestReviewBuilder::new(reviewer.id, object.id).with_stars(1).build())
        .await
        .unwrap_err();
    assert_duplicate_key(&error);

    // No partial write is visible from the failed second create
    let fetched = store.get_review(first.id).await.unwrap();
    assert_eq!(fetched, first);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_review_foreign_keys_translated() {
    let store = store().await;
    let object = store
        .create_reviewed_object(TestReviewedObjectBuilder::new().build())
        .await
        .unwrap();

    let error = store
        .create_review(TestReviewBuilder::new(ReviewerId::new(), object.id).build())
        .await
        .unwrap_err();
    assert_foreign_key(&error);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_validation_rejected_before_store() {
    let store = store().await;
    // Bogus ids would trip foreign keys, but validation must fail first
    let error = store
        .create_review(
            TestReviewBuilder::new(ReviewerId::new(), ReviewedObjectId::new())
                .with_stars(6)
                .build(),
        )
        .await
        .unwrap_err();
    assert_validation(&error);

    let error = store
        .create_review(
            TestReviewBuilder::new(ReviewerId::new(), ReviewedObjectId::new())
                .without_content()
                .build(),
        )
        .await
        .unwrap_err();
    assert_validation(&error);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_empty_patch_bumps_only_updated_at() {
    let store = store().await;
    let reviewer = store
        .create_reviewer(TestReviewerBuilder::new().build())
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;
    let updated = store
        .update_reviewer(reviewer.id, UpdateReviewer::default())
        .await
        .unwrap();

    assert_eq!(updated.username, reviewer.username);
    assert_eq!(updated.email, reviewer.email);
    assert_eq!(updated.full_name, reviewer.full_name);
    assert_eq!(updated.created_at, reviewer.created_at);
    assert!(updated.updated_at > reviewer.updated_at);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_pagination_over_fifteen_reviews() {
    let store = store().await;
    let object = store
        .create_reviewed_object(TestReviewedObjectBuilder::new().build())
        .await
        .unwrap();

    for _ in 0..15 {
        let reviewer = store
            .create_reviewer(TestReviewerBuilder::new().build())
            .await
            .unwrap();
        store
            .create_review(TestReviewBuilder::new(reviewer.id, object.id).build())
            .await
            .unwrap();
    }

    let query = ReviewQuery::by_object(object.id);
    let first = store
        .list_reviews(query.clone(), PageRequest::new(0, 10))
        .await
        .unwrap();
    assert_eq!(first.len(), 10);
    assert!(first.has_more);
    assert_newest_first(&first.items.iter().map(|r| r.created_at).collect::<Vec<_>>());

    let second = store
        .list_reviews(query.clone(), PageRequest::new(10, 10))
        .await
        .unwrap();
    assert_eq!(second.len(), 5);
    assert!(!second.has_more);

    let past_the_end = store
        .list_reviews(query, PageRequest::new(100, 10))
        .await
        .unwrap();
    assert!(past_the_end.is_empty());
    assert!(!past_the_end.has_more);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_statistics_three_rated_reviews() {
    let store = store().await;
    let object = store
        .create_reviewed_object(TestReviewedObjectBuilder::new().build())
        .await
        .unwrap();

    for rating in [3, 4, 5] {
        let reviewer = store
            .create_reviewer(TestReviewerBuilder::new().build())
            .await
            .unwrap();
        store
            .create_review(
                TestReviewBuilder::new(reviewer.id, object.id)
                    .with_stars(rating)
                    .build(),
            )
            .await
            .unwrap();
    }

    let stats = store.statistics(object.id).await.unwrap();
    assert_eq!(stats.total_reviews, 3);
    assert_eq!(stats.average_rating, Some(4.0));
    assert_eq!(stats.thumbs_up_count, 0);
    assert_eq!(stats.thumbs_down_count, 0);
    assert!(stats.latest_review_at.is_some());
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_statistics_with_thumbs_and_no_ratings() {
    let store = store().await;
    let object = store
        .create_reviewed_object(TestReviewedObjectBuilder::new().build())
        .await
        .unwrap();

    for thumbs in [ThumbsRating::Up, ThumbsRating::Up, ThumbsRating::Down] {
        let reviewer = store
            .create_reviewer(TestReviewerBuilder::new().build())
            .await
            .unwrap();
        store
            .create_review(
                NewReview::for_pair(reviewer.id, object.id).with_thumbs(thumbs),
            )
            .await
            .unwrap();
    }

    let stats = store.statistics(object.id).await.unwrap();
    assert_eq!(stats.total_reviews, 3);
    // No review carries a star rating, so there is no average
    assert_eq!(stats.average_rating, None);
    assert_eq!(stats.thumbs_up_count, 2);
    assert_eq!(stats.thumbs_down_count, 1);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_statistics_unknown_object_not_found() {
    let store = store().await;
    let error = store.statistics(ReviewedObjectId::new()).await.unwrap_err();
    assert_not_found(&error);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_delete_restrict_surfaces_conflict() {
    let store = store().await;
    let reviewer = store
        .create_reviewer(TestReviewerBuilder::new().build())
        .await
        .unwrap();
    let object = store
        .create_reviewed_object(TestReviewedObjectBuilder::new().build())
        .await
        .unwrap();
    store
        .create_review(TestReviewBuilder::new(reviewer.id, object.id).build())
        .await
        .unwrap();

    let error = store.delete_reviewed_object(object.id).await.unwrap_err();
    assert_delete_conflict(&error);
    let error = store.delete_reviewer(reviewer.id).await.unwrap_err();
    assert_delete_conflict(&error);

    // Both rows are still there
    assert!(store.get_reviewed_object(object.id).await.is_ok());
    assert!(store.get_reviewer(reviewer.id).await.is_ok());
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_delete_cascade_removes_dependents_atomically() {
    let restrict_store = store().await;
    let cascade = cascade_store().await;

    let reviewer = restrict_store
        .create_reviewer(TestReviewerBuilder::new().build())
        .await
        .unwrap();
    let object = restrict_store
        .create_reviewed_object(TestReviewedObjectBuilder::new().build())
        .await
        .unwrap();
    let review = restrict_store
        .create_review(TestReviewBuilder::new(reviewer.id, object.id).build())
        .await
        .unwrap();

    cascade.delete_reviewed_object(object.id).await.unwrap();

    assert_not_found(&restrict_store.get_reviewed_object(object.id).await.unwrap_err());
    assert_not_found(&restrict_store.get_review(review.id).await.unwrap_err());
    // The reviewer is untouched
    assert!(restrict_store.get_reviewer(reviewer.id).await.is_ok());
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_delete_absent_rows_not_found() {
    let store = store().await;
    assert_not_found(&store.delete_reviewer(ReviewerId::new()).await.unwrap_err());
    assert_not_found(
        &store
            .delete_reviewed_object(ReviewedObjectId::new())
            .await
            .unwrap_err(),
    );
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_update_review_patch_semantics() {
    let store = store().await;
    let reviewer = store
        .create_reviewer(TestReviewerBuilder::new().build())
        .await
        .unwrap();
    let object = store
        .create_reviewed_object(TestReviewedObjectBuilder::new().build())
        .await
        .unwrap();
    let review = store
        .create_review(
            TestReviewBuilder::new(reviewer.id, object.id)
                .with_text("first impression")
                .with_stars(3)
                .build(),
        )
        .await
        .unwrap();

    let updated = store
        .update_review(
            review.id,
            UpdateReview {
                star_rating: Some(5),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Only the patched field changed
    assert_eq!(updated.star_rating, Some(5));
    assert_eq!(updated.text_review.as_deref(), Some("first impression"));
    assert_eq!(updated.thumbs_rating, None);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_metadata_round_trips_through_jsonb() {
    let store = store().await;
    let metadata = test_utils::SAMPLE_METADATA.clone();
    let object = store
        .create_reviewed_object(
            TestReviewedObjectBuilder::new()
                .with_metadata(metadata.clone())
                .build(),
        )
        .await
        .unwrap();

    let fetched = store.get_reviewed_object(object.id).await.unwrap();
    assert_eq!(fetched.metadata, Some(metadata));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_find_by_username_and_external_id() {
    let store = store().await;
    let reviewer_input = TestReviewerBuilder::new().build();
    let reviewer = store.create_reviewer(reviewer_input.clone()).await.unwrap();
    let object_input = TestReviewedObjectBuilder::new().build();
    let object = store
        .create_reviewed_object(object_input.clone())
        .await
        .unwrap();

    let found = store
        .find_reviewer_by_username(&reviewer_input.username)
        .await
        .unwrap();
    assert_eq!(found.map(|r| r.id), Some(reviewer.id));

    let found = store
        .find_reviewed_object_by_external_id(&object_input.object_type, &object_input.external_id)
        .await
        .unwrap();
    assert_eq!(found.map(|o| o.id), Some(object.id));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_health_check_reports_healthy() {
    use core_kernel::{AdapterHealth, HealthCheckable};

    let store = store().await;
    let result = store.health_check().await;
    assert_eq!(result.status, AdapterHealth::Healthy);
}
