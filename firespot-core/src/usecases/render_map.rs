use super::prelude::*;

pub fn render_map(state: &SessionState) -> MapView {
    let popup = match state.source {
        LocationSource::Clicked => &state.last_click_text,
        LocationSource::Initial | LocationSource::Geocoded => &state.address_label,
    };
    MapView {
        center: state.current_location,
        zoom: state.zoom_level,
        markers: vec![Marker::fire(state.current_location, popup.clone())],
    }
}
