mod email;
mod geo_point;
mod latitude;
mod longitude;
mod username;
mod value_object;

pub use email::Email;
pub use geo_point::GeoPoint;
pub use latitude::Latitude;
pub use longitude::Longitude;
pub use username::Username;
pub use value_object::ValueObject;
