mod bio;
mod bounding_box;
mod contact;
mod owner_patch;
mod picture;
mod profile_id;
mod rating_summary;
mod star;

pub use bio::Bio;
pub use bounding_box::BoundingBox;
pub use contact::{Contact, ContactHandle};
pub use owner_patch::{OwnerField, OwnerPatch};
pub use picture::Picture;
pub use profile_id::ProfileId;
pub use rating_summary::RatingSummary;
pub use star::Star;
