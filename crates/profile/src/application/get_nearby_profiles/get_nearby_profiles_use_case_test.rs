// crates/profile/src/application/get_nearby_profiles/get_nearby_profiles_use_case_test.rs

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use shared_kernel::domain::value_objects::{Email, GeoPoint, Username};
    use shared_kernel::errors::DomainError;

    use crate::application::get_nearby_profiles::{GetNearbyProfilesQuery, GetNearbyProfilesUseCase};
    use crate::domain::entities::Profile;
    use crate::domain::repositories::{ProfileFilter, ProfileRepository};
    use crate::domain::services::GeoQueryEngine;
    use crate::domain::value_objects::BoundingBox;
    use crate::infrastructure::memory::InMemoryProfileRepository;
    use crate::utils::ProfileRepositoryStub;

    fn located(email: &str, username: &str, lat: f64, lng: f64) -> Profile {
        Profile::builder(Email::try_new(email).unwrap(), Username::try_new(username).unwrap())
            .with_location(Some(GeoPoint::try_new(lat, lng).unwrap()))
            .build()
    }

    #[tokio::test]
    async fn test_nearby_returns_only_profiles_inside_the_window() {
        // Arrange
        let repo = Arc::new(InMemoryProfileRepository::default());
        let near = repo.create(&located("near@example.com", "near", 0.5, 0.5)).await.unwrap();
        repo.create(&located("far@example.com", "far", 2.0, 2.0)).await.unwrap();
        repo.create(
            &Profile::builder(Email::try_new("nowhere@example.com").unwrap(), Username::try_new("nowhere").unwrap())
                .build(),
        )
        .await
        .unwrap();

        let use_case = GetNearbyProfilesUseCase::new(GeoQueryEngine::new(repo));

        // Act
        let result = use_case.execute(GetNearbyProfilesQuery::at(0.0, 0.0)).await.unwrap();

        // Assert
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), near.id());
    }

    #[tokio::test]
    async fn test_nearby_scans_the_one_degree_window() {
        // Arrange
        let repo = Arc::new(ProfileRepositoryStub::default());
        let use_case = GetNearbyProfilesUseCase::new(GeoQueryEngine::new(repo.clone()));

        // Act
        use_case
            .execute(GetNearbyProfilesQuery { lat: Some(" 48.85 ".into()), lng: Some("2.35".into()) })
            .await
            .unwrap();

        // Assert
        let scans = repo.scans.lock().unwrap();
        assert_eq!(scans[0], ProfileFilter::LocatedWithin(BoundingBox::around(48.85, 2.35)));
    }

    #[tokio::test]
    async fn test_missing_coordinates_are_rejected() {
        let repo = Arc::new(ProfileRepositoryStub::default());
        let use_case = GetNearbyProfilesUseCase::new(GeoQueryEngine::new(repo.clone()));

        let result = use_case
            .execute(GetNearbyProfilesQuery { lat: Some("1.0".into()), lng: None })
            .await;

        match result {
            Err(DomainError::Validation { reason, .. }) => assert_eq!(reason, "Coordinates not provided"),
            other => panic!("expected a validation error, got {:?}", other),
        }
        assert!(repo.scans.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_or_non_finite_coordinates_are_rejected() {
        let repo = Arc::new(ProfileRepositoryStub {
            scan_to_return: Mutex::new(Vec::new()),
            ..Default::default()
        });
        let use_case = GetNearbyProfilesUseCase::new(GeoQueryEngine::new(repo));

        for (lat, lng) in [("abc", "1.0"), ("1.0", "NaN"), ("inf", "0"), ("", "0")] {
            let result = use_case
                .execute(GetNearbyProfilesQuery { lat: Some(lat.into()), lng: Some(lng.into()) })
                .await;
            assert!(matches!(result, Err(DomainError::Validation { .. })), "{lat},{lng} should be rejected");
        }
    }
}
