use super::prelude::*;

pub const FIRE_LOCATION_POPUP: &str = "Fire location";

/// Pin the fire marker to the current location.
pub fn commit_marker(state: &mut SessionState) -> MapView {
    let pos = state.current_location;
    log::info!("Fire location committed at {pos}");
    state.committed = Some(pos);
    MapView {
        center: pos,
        zoom: state.zoom_level,
        markers: vec![Marker::fire(pos, FIRE_LOCATION_POPUP)],
    }
}
