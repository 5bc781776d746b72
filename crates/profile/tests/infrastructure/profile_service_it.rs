// crates/profile/tests/infrastructure/profile_service_it.rs

use std::sync::Arc;
use futures::future::join_all;
use serde_json::json;
use profile::application::{CallerIdentity, ProfileService};
use profile::domain::repositories::ProfileRepository;
use profile::domain::services::LocationPrivacyFilter;
use profile::infrastructure::postgres::PostgresProfileRepository;
use shared_kernel::domain::value_objects::Username;

fn user(name: &str) -> CallerIdentity {
    CallerIdentity::try_new(format!("{name}@example.com")).unwrap().with_name(name)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_owner_edits_and_reviews_are_all_kept() {
    // Arrange
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = Arc::new(PostgresProfileRepository::new(pool));
    let service = Arc::new(ProfileService::new(repo.clone(), Arc::new(LocationPrivacyFilter::new(Some(3)))));

    service.sign_in(Some(user("alice"))).await.unwrap();
    for i in 0..15 {
        service.sign_in(Some(user(&format!("fan{i}")))).await.unwrap();
    }

    // Act
    let mut tasks = Vec::new();
    for i in 0..15 {
        let reviewer = service.clone();
        tasks.push(tokio::spawn(async move {
            reviewer.submit_review(Some(user(&format!("fan{i}"))), "alice", Some(3)).await
        }));
        let owner = service.clone();
        tasks.push(tokio::spawn(async move {
            owner.update_own(Some(user("alice")), json!({ "bio": format!("edit {i}") })).await
        }));
    }
    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    // Assert
    let alice = repo
        .find_by_username(&Username::try_new("alice").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(alice.reviews().len(), 15);
    assert!(alice.bio().as_str().starts_with("edit "));
    assert_eq!(alice.rating_summary().average, 3.0);
}
