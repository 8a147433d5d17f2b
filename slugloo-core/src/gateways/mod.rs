pub mod geolocation;
pub mod map;
