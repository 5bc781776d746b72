// crates/profile/src/application/submit_review/submit_review_command.rs

use serde::{Deserialize, Serialize};
use crate::application::CallerIdentity;

/// `star` reste brut : absence et hors-bornes sont des erreurs de validation distinctes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReviewCommand {
    pub caller: Option<CallerIdentity>,
    pub username: String,
    pub star: Option<i64>,
}
