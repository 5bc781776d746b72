// crates/profile/src/infrastructure/postgres/repositories/postgres_profile_repository.rs

use std::collections::HashMap;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use shared_kernel::domain::Identifier;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::{Email, Username};
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;

use crate::domain::entities::{Profile, Review};
use crate::domain::repositories::{ProfileFilter, ProfileRepository};
use crate::domain::value_objects::{ContactHandle, OwnerPatch, ProfileId};
use crate::infrastructure::postgres::rows::{PostgresProfileRow, PostgresReviewRow};

const SELECT_PROFILE: &str = r#"
    SELECT id, username, email, telegram, wickr, signal, lat, lng,
           bio, buyer, seller, picture, version, created_at, updated_at
    FROM profiles
"#;

/// Postgres sait faire des mises à jour partielles atomiques : pas de boucle optimiste ici.
/// Chaque primitive est une seule requête SQL.
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(&self, clause: &str, value: &str) -> Result<Option<Profile>> {
        let sql = format!("{SELECT_PROFILE} WHERE {clause} = $1");

        let row = sqlx::query_as::<_, PostgresProfileRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_domain::<Profile>()?;

        Ok(self.attach_reviews(row.into_iter().collect()).await?.pop())
    }

    async fn fetch_by_uuid(&self, id: Uuid) -> Result<Option<Profile>> {
        let sql = format!("{SELECT_PROFILE} WHERE id = $1");

        let row = sqlx::query_as::<_, PostgresProfileRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_domain::<Profile>()?;

        Ok(self.attach_reviews(row.into_iter().collect()).await?.pop())
    }

    /// Charge les avis de tous les profils en une seule requête
    async fn attach_reviews(&self, rows: Vec<PostgresProfileRow>) -> Result<Vec<Profile>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let review_rows = sqlx::query_as::<_, PostgresReviewRow>(
            r#"
            SELECT profile_id, reviewer_id, star, submitted_at
            FROM profile_reviews
            WHERE profile_id = ANY($1)
            ORDER BY submitted_at, reviewer_id
            "#,
        )
        .bind(&ids[..])
        .fetch_all(&self.pool)
        .await
        .map_domain::<Review>()?;

        let mut by_profile: HashMap<Uuid, Vec<Review>> = HashMap::new();
        for row in review_rows {
            let profile_id = row.profile_id;
            by_profile.entry(profile_id).or_default().push(row.try_into()?);
        }

        rows.into_iter()
            .map(|row| {
                let reviews = by_profile.remove(&row.id).unwrap_or_default();
                row.into_profile(reviews)
            })
            .collect()
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>> {
        self.fetch_by_uuid(id.as_uuid()).await
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Profile>> {
        self.fetch_one_where("username", username.as_str()).await
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Profile>> {
        self.fetch_one_where("email", email.as_str()).await
    }

    async fn create(&self, profile: &Profile) -> Result<Profile> {
        let row = PostgresProfileRow::from(profile);
        let mut tx = self.pool.begin().await.map_domain_infra("begin profile creation")?;

        // 1. Document principal (les contraintes d'unicité lèvent AlreadyExists)
        sqlx::query(
            r#"
            INSERT INTO profiles (
                id, username, email, telegram, wickr, signal, lat, lng,
                bio, buyer, seller, picture, version, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(row.id)
        .bind(&row.username)
        .bind(&row.email)
        .bind(&row.telegram)
        .bind(&row.wickr)
        .bind(&row.signal)
        .bind(row.lat)
        .bind(row.lng)
        .bind(&row.bio)
        .bind(row.buyer)
        .bind(row.seller)
        .bind(&row.picture)
        .bind(row.version)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(&mut *tx)
        .await
        .map_domain::<Profile>()?;

        // 2. Avis éventuels (import / restauration)
        for review in profile.reviews() {
            sqlx::query(
                "INSERT INTO profile_reviews (profile_id, reviewer_id, star, submitted_at) VALUES ($1, $2, $3, $4)",
            )
            .bind(row.id)
            .bind(review.reviewer_id().as_uuid())
            .bind(i16::from(review.star().value()))
            .bind(review.submitted_at())
            .execute(&mut *tx)
            .await
            .map_domain::<Review>()?;
        }

        tx.commit().await.map_domain_infra("commit profile creation")?;

        tracing::info!(profile_id = %profile.id(), "profile inserted");
        Ok(profile.clone())
    }

    async fn update_owner_fields(&self, email: &Email, patch: &OwnerPatch) -> Result<Profile> {
        if patch.is_empty() {
            return self
                .find_by_email(email)
                .await?
                .ok_or_else(|| Profile::not_found(email.as_str()));
        }

        // Chaque colonne n'est réécrite que si son drapeau de présence est vrai
        let sql = r#"
            UPDATE profiles SET
                username   = CASE WHEN $2  THEN $3  ELSE username END,
                telegram   = CASE WHEN $4  THEN $5  ELSE telegram END,
                wickr      = CASE WHEN $6  THEN $7  ELSE wickr END,
                signal     = CASE WHEN $8  THEN $9  ELSE signal END,
                bio        = CASE WHEN $10 THEN $11 ELSE bio END,
                buyer      = CASE WHEN $12 THEN $13 ELSE buyer END,
                seller     = CASE WHEN $14 THEN $15 ELSE seller END,
                lat        = CASE WHEN $16 THEN $17 ELSE lat END,
                lng        = CASE WHEN $16 THEN $18 ELSE lng END,
                picture    = CASE WHEN $19 THEN $20 ELSE picture END,
                version    = version + 1,
                updated_at = NOW()
            WHERE email = $1
            RETURNING id
        "#;

        let handle = |h: &Option<Option<ContactHandle>>| {
            h.as_ref().and_then(|inner| inner.as_ref().map(|c| c.as_str().to_string()))
        };

        let updated: Option<(Uuid,)> = sqlx::query_as(sql)
            .bind(email.as_str())
            .bind(patch.username.is_some())
            .bind(patch.username.as_ref().map(|u| u.as_str().to_string()))
            .bind(patch.telegram.is_some())
            .bind(handle(&patch.telegram))
            .bind(patch.wickr.is_some())
            .bind(handle(&patch.wickr))
            .bind(patch.signal.is_some())
            .bind(handle(&patch.signal))
            .bind(patch.bio.is_some())
            .bind(patch.bio.as_ref().map(|b| b.as_str().to_string()))
            .bind(patch.buyer.is_some())
            .bind(patch.buyer)
            .bind(patch.seller.is_some())
            .bind(patch.seller)
            .bind(patch.location.is_some())
            .bind(patch.location.map(|p| p.lat()))
            .bind(patch.location.map(|p| p.lng()))
            .bind(patch.picture.is_some())
            .bind(patch.picture.as_ref().map(|p| p.as_str().to_string()))
            .fetch_optional(&self.pool)
            .await
            .map_domain::<Profile>()?;

        let (id,) = updated.ok_or_else(|| Profile::not_found(email.as_str()))?;

        tracing::info!(profile_id = %id, fields = ?patch.fields(), "owner fields updated");
        self.fetch_by_uuid(id).await?.ok_or_else(|| Profile::not_found(id))
    }

    async fn upsert_review(&self, rated: &Username, review: &Review) -> Result<Profile> {
        // Une seule instruction : verrou de ligne sur le profil, puis insert-or-replace
        // sur la clé (profile_id, reviewer_id).
        let sql = r#"
            WITH target AS (
                UPDATE profiles
                SET version = version + 1, updated_at = NOW()
                WHERE username = $1
                RETURNING id
            )
            INSERT INTO profile_reviews (profile_id, reviewer_id, star, submitted_at)
            SELECT id, $2, $3, $4 FROM target
            ON CONFLICT (profile_id, reviewer_id)
            DO UPDATE SET star = EXCLUDED.star, submitted_at = EXCLUDED.submitted_at
            RETURNING profile_id
        "#;

        let upserted: Option<(Uuid,)> = sqlx::query_as(sql)
            .bind(rated.as_str())
            .bind(review.reviewer_id().as_uuid())
            .bind(i16::from(review.star().value()))
            .bind(review.submitted_at())
            .fetch_optional(&self.pool)
            .await
            .map_domain::<Review>()?;

        let (profile_id,) = upserted.ok_or_else(|| Profile::not_found(rated.as_str()))?;

        self.fetch_by_uuid(profile_id)
            .await?
            .ok_or_else(|| Profile::not_found(profile_id))
    }

    async fn scan(&self, filter: &ProfileFilter) -> Result<Vec<Profile>> {
        let rows = match filter {
            ProfileFilter::All => {
                sqlx::query_as::<_, PostgresProfileRow>(SELECT_PROFILE)
                    .fetch_all(&self.pool)
                    .await
            }
            ProfileFilter::LocatedWithin(window) => {
                let sql = format!(
                    "{SELECT_PROFILE} WHERE lat > $1 AND lat < $2 AND lng > $3 AND lng < $4"
                );
                sqlx::query_as::<_, PostgresProfileRow>(&sql)
                    .bind(window.min_lat)
                    .bind(window.max_lat)
                    .bind(window.min_lng)
                    .bind(window.max_lng)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_domain::<Profile>()?;

        self.attach_reviews(rows).await
    }

    async fn delete(&self, id: &ProfileId) -> Result<()> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_domain::<Profile>()?;

        if result.rows_affected() == 0 {
            return Err(Profile::not_found(id));
        }

        tracing::info!(profile_id = %id, "profile deleted");
        Ok(())
    }
}
