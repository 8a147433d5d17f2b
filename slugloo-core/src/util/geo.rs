use crate::entities::MapPoint;

pub use slugloo_entities::geo::EARTH_RADIUS_KM;

/// Great-circle distance between two points in kilometers.
pub fn distance_km(a: MapPoint, b: MapPoint) -> f64 {
    MapPoint::distance(a, b).to_kilometers()
}
