use super::*;
use crate::prelude::own_position;
use slugloo_core::gateways::{
    geolocation::GeoLocationGateway,
    map::{latest_selected_location, MapEvent},
};
use std::sync::mpsc::Receiver;

/// Adds a new bathroom.
///
/// Without explicit coordinates the location most recently selected
/// on the map is used, then the current position of the user.
pub fn add_bathroom<R: BathroomRepo>(
    repo: &R,
    map_events: &Receiver<MapEvent>,
    geo: &dyn GeoLocationGateway,
    campus: &MapBbox,
    mut new: usecases::NewBathroom,
) -> Result<Bathroom> {
    if new.pos.is_none() {
        new.pos = latest_selected_location(map_events).or_else(|| own_position(geo));
    }
    if let Some(pos) = new.pos {
        if !campus.contains_point(pos) {
            warn!("The location {pos} is outside of the campus {campus}");
        }
    }
    let bathroom = usecases::create_new_bathroom(repo, new)?;
    info!("Added bathroom {} ({})", bathroom.id, bathroom.name);
    Ok(bathroom)
}
