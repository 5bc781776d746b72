mod profile;
mod review;

pub use profile::Profile;
pub use review::Review;
