use super::prelude::*;

/// Take over a click on the map as the new fire location.
///
/// Returns `false` if the click repeats the previously recorded
/// one, in which case the state remains unchanged.
pub fn handle_map_click(state: &mut SessionState, lat: f64, lng: f64) -> Result<bool> {
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    if state.last_click == Some(pos) {
        log::debug!("Ignoring repeated click at {pos}");
        return Ok(false);
    }
    let (lat, lng) = pos.to_lat_lng_deg();
    state.last_click = Some(pos);
    state.current_location = pos;
    state.last_click_text = format!("Selected coordinates: lat {lat:.6}, lng {lng:.6}");
    state.source = LocationSource::Clicked;
    Ok(true)
}
