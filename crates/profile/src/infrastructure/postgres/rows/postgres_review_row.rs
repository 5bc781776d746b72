// crates/profile/src/infrastructure/postgres/rows/postgres_review_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::Identifier;
use shared_kernel::errors::{DomainError, Result};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::entities::Review;
use crate::domain::value_objects::{ProfileId, Star};

#[derive(FromRow, Debug)]
pub struct PostgresReviewRow {
    pub profile_id: Uuid,
    pub reviewer_id: Uuid,
    pub star: i16,
    pub submitted_at: DateTime<Utc>,
}

impl TryFrom<PostgresReviewRow> for Review {
    type Error = DomainError;

    fn try_from(row: PostgresReviewRow) -> Result<Self> {
        Ok(Review::restore(
            ProfileId::from_uuid(row.reviewer_id),
            Star::try_new(i64::from(row.star))?,
            row.submitted_at,
        ))
    }
}
