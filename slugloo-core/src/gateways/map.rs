use std::sync::mpsc::Receiver;

use crate::entities::*;

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub pos: MapPoint,
    pub label: String,
    /// `None` for the marker of the user's own position.
    pub bathroom_id: Option<Id>,
}

impl From<&Bathroom> for MapMarker {
    fn from(from: &Bathroom) -> Self {
        Self {
            pos: from.pos,
            label: from.name.clone(),
            bathroom_id: Some(from.id.clone()),
        }
    }
}

/// Events emitted by a map widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    LocationSelected(MapPoint),
}

pub trait MapWidget {
    /// Centers the map before anything is rendered.
    fn set_view(&self, center: MapPoint);
    fn render_markers(&self, markers: &[MapMarker]);
}

pub fn markers_of_bathrooms(bathrooms: &[Bathroom], own_pos: Option<MapPoint>) -> Vec<MapMarker> {
    bathrooms
        .iter()
        .map(MapMarker::from)
        .chain(own_pos.map(|pos| MapMarker {
            pos,
            label: "You are here".into(),
            bathroom_id: None,
        }))
        .collect()
}

/// The most recently selected location.
///
/// Drains all pending events without blocking.
pub fn latest_selected_location(events: &Receiver<MapEvent>) -> Option<MapPoint> {
    events
        .try_iter()
        .map(|ev| match ev {
            MapEvent::LocationSelected(pos) => pos,
        })
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use slugloo_entities::builders::*;
    use std::sync::mpsc;

    #[test]
    fn markers_with_own_position() {
        let b = Bathroom::build()
            .id("b1")
            .name("Kresge")
            .pos(MapPoint::from_lat_lng_deg(36.997, -122.066))
            .finish();
        let own = MapPoint::from_lat_lng_deg(36.99, -122.06);
        let markers = markers_of_bathrooms(&[b], Some(own));
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].label, "Kresge");
        assert_eq!(markers[0].bathroom_id, Some("b1".into()));
        assert_eq!(markers[1].pos, own);
        assert_eq!(markers[1].bathroom_id, None);
    }

    #[test]
    fn last_selection_wins() {
        let (tx, rx) = mpsc::channel();
        assert_eq!(latest_selected_location(&rx), None);
        let first = MapPoint::from_lat_lng_deg(36.99, -122.06);
        let second = MapPoint::from_lat_lng_deg(36.995, -122.061);
        tx.send(MapEvent::LocationSelected(first)).unwrap();
        tx.send(MapEvent::LocationSelected(second)).unwrap();
        assert_eq!(latest_selected_location(&rx), Some(second));
        // all events have been consumed
        assert_eq!(latest_selected_location(&rx), None);
    }
}
