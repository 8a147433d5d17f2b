use super::*;
use slugloo_core::{
    gateways::{
        geolocation::{GeoLocationError, GeoLocationGateway},
        map::{markers_of_bathrooms, MapWidget},
    },
    util::filter::FilterCriteria,
};

/// Best-effort position of the user.
///
/// Failures are logged and reported as `None`.
pub fn own_position(geo: &dyn GeoLocationGateway) -> Option<MapPoint> {
    match geo.current_position() {
        Ok(pos) => Some(pos),
        Err(GeoLocationError::Denied) => {
            warn!("Access to the current position has been denied");
            None
        }
        Err(err) => {
            info!("{err}");
            None
        }
    }
}

/// Searches bathrooms and orders them by the distance to `near`
/// or, if missing, to the current position of the user.
pub fn list_bathrooms<R: BathroomRepo>(
    repo: &R,
    geo: &dyn GeoLocationGateway,
    criteria: FilterCriteria,
    text: String,
    near: Option<MapPoint>,
) -> Result<Vec<Bathroom>> {
    let reference = near.or_else(|| own_position(geo));
    let req = usecases::SearchRequest {
        criteria,
        text,
        reference,
    };
    let bathrooms = usecases::search_bathrooms(repo, &req)?;
    debug!("Found {} bathrooms", bathrooms.len());
    Ok(bathrooms)
}

/// Renders all bathrooms and the own position on a map
/// that initially shows `center`.
pub fn show_bathrooms_on_map<R: BathroomRepo>(
    repo: &R,
    geo: &dyn GeoLocationGateway,
    map: &dyn MapWidget,
    center: MapPoint,
) -> Result<usize> {
    map.set_view(center);
    let bathrooms = usecases::load_bathrooms(repo)?;
    let markers = markers_of_bathrooms(&bathrooms, own_position(geo));
    map.render_markers(&markers);
    Ok(markers.len())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use slugloo_core::gateways::map::MapMarker;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingMap {
        view: RefCell<Option<MapPoint>>,
        markers: RefCell<Vec<MapMarker>>,
    }

    impl MapWidget for RecordingMap {
        fn set_view(&self, center: MapPoint) {
            *self.view.borrow_mut() = Some(center);
        }
        fn render_markers(&self, markers: &[MapMarker]) {
            *self.markers.borrow_mut() = markers.to_vec();
        }
    }

    fn db() -> MemoryDb {
        let db = MemoryDb::default();
        db.bathrooms.borrow_mut().extend([
            Bathroom::build()
                .id("far")
                .name("Far")
                .pos(MapPoint::from_lat_lng_deg(36.9780, -122.0550))
                .finish(),
            Bathroom::build()
                .id("near")
                .name("Near")
                .pos(MapPoint::from_lat_lng_deg(36.9915, -122.0610))
                .wheelchair_accessible(true)
                .finish(),
        ]);
        db
    }

    fn ids(bathrooms: &[Bathroom]) -> Vec<&str> {
        bathrooms.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn sort_by_own_position() {
        init_logging();
        let db = db();
        let geo = FixedGeoLocation(Some(campus_center()));
        let found = list_bathrooms(&db, &geo, FilterCriteria::default(), "".into(), None).unwrap();
        assert_eq!(ids(&found), vec!["near", "far"]);
    }

    #[test]
    fn explicit_reference_wins() {
        let db = db();
        let geo = FixedGeoLocation(Some(campus_center()));
        let near = MapPoint::from_lat_lng_deg(36.9780, -122.0551);
        let found =
            list_bathrooms(&db, &geo, FilterCriteria::default(), "".into(), Some(near)).unwrap();
        assert_eq!(ids(&found), vec!["far", "near"]);
    }

    #[test]
    fn keep_order_if_geolocation_is_denied() {
        init_logging();
        let db = db();
        let found =
            list_bathrooms(&db, &DeniedGeo, FilterCriteria::default(), "".into(), None).unwrap();
        assert_eq!(ids(&found), vec!["far", "near"]);

        let criteria = FilterCriteria {
            wheelchair: true,
            ..Default::default()
        };
        let found = list_bathrooms(&db, &DeniedGeo, criteria, "".into(), None).unwrap();
        assert_eq!(ids(&found), vec!["near"]);
    }

    #[test]
    fn render_markers_with_own_position() {
        let db = db();
        let map = RecordingMap::default();
        let geo = FixedGeoLocation(Some(campus_center()));
        let center = campus_center();
        assert_eq!(show_bathrooms_on_map(&db, &geo, &map, center).unwrap(), 3);
        assert_eq!(map.markers.borrow()[2].label, "You are here");

        assert_eq!(
            show_bathrooms_on_map(&db, &DeniedGeo, &map, center).unwrap(),
            2
        );
    }

    #[test]
    fn start_at_the_configured_center() {
        let db = MemoryDb::default();
        let map = RecordingMap::default();
        let center = MapPoint::from_lat_lng_deg(36.9972, -122.0665);
        assert_eq!(show_bathrooms_on_map(&db, &DeniedGeo, &map, center).unwrap(), 0);
        assert_eq!(*map.view.borrow(), Some(center));
        assert!(map.markers.borrow().is_empty());
    }
}
