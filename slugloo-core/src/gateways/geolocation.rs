use thiserror::Error;

use crate::entities::MapPoint;

#[derive(Debug, Error)]
pub enum GeoLocationError {
    #[error("Access to the current position has been denied")]
    Denied,
    #[error("The current position is unavailable: {0}")]
    Unavailable(String),
}

pub trait GeoLocationGateway {
    /// Best-effort current position of the user.
    fn current_position(&self) -> Result<MapPoint, GeoLocationError>;
}
