mod submit_review_command;
mod submit_review_use_case;

pub use submit_review_command::SubmitReviewCommand;
pub use submit_review_use_case::{RATED_MISSING, REVIEWER_MISSING, SubmitReviewUseCase};
