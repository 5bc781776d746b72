// crates/profile/tests/infrastructure/profile_repository_it.rs

use profile::domain::entities::{Profile, Review};
use profile::domain::repositories::{ProfileFilter, ProfileRepository};
use profile::domain::value_objects::{Bio, BoundingBox, ContactHandle, OwnerPatch, ProfileId, Star};
use profile::infrastructure::postgres::PostgresProfileRepository;
use shared_kernel::domain::value_objects::{Email, GeoPoint, Username};
use shared_kernel::errors::DomainError;

/// Helper pour centraliser l'init du repo par test
async fn get_repo() -> (
    PostgresProfileRepository,
    testcontainers::ContainerAsync<testcontainers_modules::postgres::Postgres>,
) {
    let (pool, container) = crate::common::setup_postgres_test_db().await;
    (PostgresProfileRepository::new(pool), container)
}

fn profile(name: &str) -> Profile {
    Profile::builder(
        Email::try_new(format!("{name}@example.com")).unwrap(),
        Username::try_new(name).unwrap(),
    )
    .build()
}

#[tokio::test]
async fn test_profile_lifecycle() {
    let (repo, _c) = get_repo().await;

    // 1. Création initiale
    let alice = repo.create(&profile("alice")).await.expect("Initial create failed");

    // 2. Lectures par les trois clés
    assert_eq!(repo.find_by_id(alice.id()).await.unwrap().unwrap().id(), alice.id());
    assert!(repo.find_by_username(alice.username()).await.unwrap().is_some());
    assert!(repo.find_by_email(alice.email()).await.unwrap().is_some());

    // 3. Mise à jour partielle
    let patch = OwnerPatch::new()
        .with_bio(Bio::try_new("buying 0.1 BTC").unwrap())
        .with_telegram(ContactHandle::parse("@alice").unwrap())
        .with_location(GeoPoint::try_new(48.8566, 2.3522).unwrap());
    let updated = repo.update_owner_fields(alice.email(), &patch).await.expect("Update failed");

    assert_eq!(updated.bio().as_str(), "buying 0.1 BTC");
    assert_eq!(updated.contact().telegram().unwrap().as_str(), "@alice");
    assert_eq!(updated.location().unwrap().lat(), 48.8566);
    assert!(!updated.is_seller());
    assert_eq!(updated.version(), 2);

    // 4. Suppression
    repo.delete(alice.id()).await.expect("Delete failed");
    assert!(repo.find_by_id(alice.id()).await.unwrap().is_none());
    assert!(matches!(repo.delete(alice.id()).await, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_duplicate_email_or_username_is_rejected() {
    let (repo, _c) = get_repo().await;
    repo.create(&profile("alice")).await.unwrap();

    let same_username = Profile::builder(
        Email::try_new("other@example.com").unwrap(),
        Username::try_new("alice").unwrap(),
    )
    .build();

    let dup_email = repo.create(&profile("alice")).await;
    let dup_username = repo.create(&same_username).await;

    assert!(matches!(dup_email, Err(DomainError::AlreadyExists { .. })));
    assert!(matches!(dup_username, Err(DomainError::AlreadyExists { field: "username", .. })));
}

#[tokio::test]
async fn test_username_collision_leaves_rows_untouched() {
    let (repo, _c) = get_repo().await;
    let alice = repo.create(&profile("alice")).await.unwrap();
    let bob = repo.create(&profile("bob")).await.unwrap();

    let patch = OwnerPatch::new()
        .with_username(alice.username().clone())
        .with_bio(Bio::try_new("stolen").unwrap());
    let result = repo.update_owner_fields(bob.email(), &patch).await;

    assert!(matches!(result, Err(DomainError::AlreadyExists { field: "username", .. })));
    let bob_after = repo.find_by_id(bob.id()).await.unwrap().unwrap();
    assert_eq!(bob_after.username().as_str(), "bob");
    assert!(bob_after.bio().is_empty());
}

#[tokio::test]
async fn test_update_unknown_email_is_not_found() {
    let (repo, _c) = get_repo().await;

    let result = repo
        .update_owner_fields(&Email::try_new("ghost@example.com").unwrap(), &OwnerPatch::new().with_buyer(true))
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_upsert_review_replaces_by_reviewer() {
    let (repo, _c) = get_repo().await;
    let alice = repo.create(&profile("alice")).await.unwrap();
    let bob = ProfileId::new();
    let carol = ProfileId::new();

    repo.upsert_review(alice.username(), &Review::new(bob, Star::try_new(2).unwrap())).await.unwrap();
    repo.upsert_review(alice.username(), &Review::new(carol, Star::try_new(4).unwrap())).await.unwrap();
    let after = repo
        .upsert_review(alice.username(), &Review::new(bob, Star::try_new(5).unwrap()))
        .await
        .unwrap();

    assert_eq!(after.reviews().len(), 2);
    assert_eq!(after.review_by(&bob).unwrap().star().value(), 5);
    assert_eq!(after.rating_summary().average, 4.5);

    let missing = repo
        .upsert_review(&Username::try_new("ghost").unwrap(), &Review::new(bob, Star::try_new(1).unwrap()))
        .await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_scan_uses_open_bounding_box() {
    let (repo, _c) = get_repo().await;
    for (name, lat, lng) in [("near", 0.5, 0.5), ("far", 2.0, 2.0), ("edge", 1.0, 0.0)] {
        let p = repo.create(&profile(name)).await.unwrap();
        repo.update_owner_fields(
            p.email(),
            &OwnerPatch::new().with_location(GeoPoint::try_new(lat, lng).unwrap()),
        )
        .await
        .unwrap();
    }
    repo.create(&profile("nowhere")).await.unwrap();

    let nearby = repo
        .scan(&ProfileFilter::LocatedWithin(BoundingBox::around(0.0, 0.0)))
        .await
        .unwrap();
    let all = repo.scan(&ProfileFilter::All).await.unwrap();

    assert_eq!(nearby.len(), 1);
    assert_eq!(nearby[0].username().as_str(), "near");
    assert_eq!(all.len(), 4);
}
