use slugloo_core::{
    entities::MapPoint,
    gateways::geolocation::{GeoLocationError, GeoLocationGateway},
};

/// Position lookup without location hardware.
///
/// Reports a preconfigured position or no position at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedGeoLocation {
    pos: Option<MapPoint>,
}

impl FixedGeoLocation {
    pub const fn new(pos: Option<MapPoint>) -> Self {
        Self { pos }
    }
}

impl GeoLocationGateway for FixedGeoLocation {
    fn current_position(&self) -> Result<MapPoint, GeoLocationError> {
        self.pos
            .ok_or_else(|| GeoLocationError::Unavailable("no position configured".into()))
    }
}
