use super::*;
use firespot_entities as e;

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<e::map::MarkerIcon> for MarkerIcon {
    fn from(from: e::map::MarkerIcon) -> Self {
        let e::map::MarkerIcon {
            color,
            icon,
            prefix,
        } = from;
        Self {
            color: color.to_owned(),
            icon: icon.to_owned(),
            prefix: prefix.to_owned(),
        }
    }
}

impl From<e::map::Marker> for Marker {
    fn from(from: e::map::Marker) -> Self {
        let e::map::Marker { pos, icon, popup } = from;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            lat,
            lng,
            icon: icon.into(),
            popup,
        }
    }
}

impl From<e::map::MapView> for MapView {
    fn from(from: e::map::MapView) -> Self {
        let e::map::MapView {
            center,
            zoom,
            markers,
        } = from;
        Self {
            center: center.into(),
            zoom: zoom.get(),
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::session::LocationSource> for LocationSource {
    fn from(from: e::session::LocationSource) -> Self {
        use e::session::LocationSource as E;
        match from {
            E::Initial => Self::Initial,
            E::Geocoded => Self::Geocoded,
            E::Clicked => Self::Clicked,
        }
    }
}

impl From<e::session::SessionState> for SessionSnapshot {
    fn from(from: e::session::SessionState) -> Self {
        let e::session::SessionState {
            current_location,
            zoom_level,
            address_label,
            last_click_text,
            last_click,
            source,
            committed,
        } = from;
        Self {
            current_location: current_location.into(),
            zoom_level: zoom_level.get(),
            address_label,
            last_click_text,
            last_click: last_click.map(Into::into),
            source: source.into(),
            committed: committed.map(Into::into),
        }
    }
}

impl From<e::weather::Observation> for Observation {
    fn from(from: e::weather::Observation) -> Self {
        let unit = from
            .category()
            .map(|c| c.unit())
            .filter(|u| !u.is_empty())
            .map(ToOwned::to_owned);
        let e::weather::Observation { category, value } = from;
        Self {
            category,
            value,
            unit,
        }
    }
}

impl From<e::facility::FacilityDistance> for FacilityDistance {
    fn from(from: e::facility::FacilityDistance) -> Self {
        let e::facility::FacilityDistance { name, distance } = from;
        Self {
            name,
            meters: distance.to_meters(),
        }
    }
}
