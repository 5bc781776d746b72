mod postgres_profile_row;
mod postgres_review_row;

pub use postgres_profile_row::PostgresProfileRow;
pub use postgres_review_row::PostgresReviewRow;
