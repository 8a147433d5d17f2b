pub mod geolocation;
pub mod json_file;
pub mod map;
pub mod table_store;
