use crate::{geo::MapPoint, map::ZoomLevel};

pub const INITIAL_LAST_CLICK_TEXT: &str = "Click on the map to update the coordinates";

/// What produced the current location of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationSource {
    #[default]
    Initial,
    Geocoded,
    Clicked,
}

/// Per-viewer state that survives re-renders within one browsing session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// The fire location: the most recent successful geocode or map click.
    pub current_location: MapPoint,
    pub zoom_level: ZoomLevel,
    pub address_label: String,
    pub last_click_text: String,
    /// The previously recorded map click.
    pub last_click: Option<MapPoint>,
    pub source: LocationSource,
    /// Where the fire marker was committed the last time.
    pub committed: Option<MapPoint>,
}

impl SessionState {
    pub fn new(location: MapPoint, address_label: impl Into<String>, zoom_level: ZoomLevel) -> Self {
        Self {
            current_location: location,
            zoom_level,
            address_label: address_label.into(),
            last_click_text: INITIAL_LAST_CLICK_TEXT.to_owned(),
            last_click: None,
            source: LocationSource::Initial,
            committed: None,
        }
    }
}
