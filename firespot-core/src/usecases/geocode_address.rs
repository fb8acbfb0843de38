use super::prelude::*;
use crate::gateways::geocode::GeoCodingGateway;

/// Resolve the address and move the fire location there.
///
/// The session state is left untouched if the address
/// could not be resolved.
pub fn geocode_address<G>(
    gateway: &G,
    state: &mut SessionState,
    address: &str,
    zoom_level: Option<ZoomLevel>,
) -> Result<Location>
where
    G: GeoCodingGateway + ?Sized,
{
    let location = resolve_address(gateway, address)?;
    apply_geocoded_location(state, &location, zoom_level);
    Ok(location)
}

/// Look up the location of an address without touching any session.
pub fn resolve_address<G>(gateway: &G, address: &str) -> Result<Location>
where
    G: GeoCodingGateway + ?Sized,
{
    let address = address.trim();
    if address.is_empty() {
        return Err(Error::AddressNotFound);
    }
    let (lat, lng) = gateway
        .resolve_address_lat_lng(address)
        .map_err(|err| {
            log::warn!("Failed to resolve address location '{address}': {err}");
            Error::from(err)
        })?
        .ok_or(Error::AddressNotFound)?;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or_else(|| {
        Error::ProviderResponseInvalid(format!("Coordinates out of range: {lat},{lng}"))
    })?;
    log::debug!("Resolved address location '{address}': {pos}");
    Ok(Location {
        pos,
        address: Some(address.to_owned()),
    })
}

/// Move the fire location to a resolved address.
///
/// The previously recorded map click is kept.
pub fn apply_geocoded_location(
    state: &mut SessionState,
    location: &Location,
    zoom_level: Option<ZoomLevel>,
) {
    let address = location.address.as_deref().unwrap_or_default();
    let (lat, lng) = location.pos.to_lat_lng_deg();
    state.current_location = location.pos;
    state.address_label = address.to_owned();
    state.last_click_text = format!("Selected fire location {address}: lat {lat:.6}, lng {lng:.6}");
    state.source = LocationSource::Geocoded;
    if let Some(zoom_level) = zoom_level {
        state.zoom_level = zoom_level;
    }
}

/// The message that is shown to the user after a geocoding attempt.
pub fn geocode_status_message(address: &str, result: &Result<Location>) -> String {
    match result {
        Ok(Location { pos, .. }) => {
            let (lat, lng) = pos.to_lat_lng_deg();
            format!("{}: {lat:.6}, {lng:.6}", address.trim())
        }
        Err(err) => err.to_string(),
    }
}
