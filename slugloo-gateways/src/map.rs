use std::{cell::RefCell, io::Write};

use itertools::Itertools;
use slugloo_core::{
    entities::MapPoint,
    gateways::map::{MapMarker, MapWidget},
};

/// Renders markers as plain text lines, one per marker.
pub struct TextMap<W> {
    out: RefCell<W>,
}

impl<W: Write> TextMap<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

fn marker_line(marker: &MapMarker) -> String {
    let MapMarker {
        pos,
        label,
        bathroom_id,
    } = marker;
    let (lat, lng) = pos.to_lat_lng_deg();
    [
        format!("{lat:.6}"),
        format!("{lng:.6}"),
        label.clone(),
        bathroom_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
    ]
    .iter()
    .join("\t")
}

impl<W: Write> MapWidget for TextMap<W> {
    fn set_view(&self, center: MapPoint) {
        let (lat, lng) = center.to_lat_lng_deg();
        if let Err(err) = writeln!(self.out.borrow_mut(), "# center\t{lat:.6}\t{lng:.6}") {
            log::warn!("Unable to set the map view: {err}");
        }
    }

    fn render_markers(&self, markers: &[MapMarker]) {
        let mut out = self.out.borrow_mut();
        for marker in markers {
            if let Err(err) = writeln!(out, "{}", marker_line(marker)) {
                log::warn!("Unable to render map marker: {err}");
                return;
            }
        }
    }
}
