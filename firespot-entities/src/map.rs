use crate::geo::MapPoint;

/// Map zoom level as understood by slippy-map widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(20);

    /// Values outside of `MIN..=MAX` are clamped.
    pub fn new(level: i64) -> Self {
        let level = level.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        Self(level as u8)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(15)
    }
}

impl From<u8> for ZoomLevel {
    fn from(from: u8) -> Self {
        Self::new(i64::from(from))
    }
}

impl std::fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Icon of a map marker, modelled after the
/// [Leaflet.awesome-markers](https://github.com/lennardv2/Leaflet.awesome-markers) options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    pub color: &'static str,
    pub icon: &'static str,
    pub prefix: &'static str,
}

impl MarkerIcon {
    pub const FIRE: Self = Self {
        color: "red",
        icon: "fire",
        prefix: "fa",
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub pos: MapPoint,
    pub icon: MarkerIcon,
    pub popup: String,
}

impl Marker {
    pub fn fire(pos: MapPoint, popup: impl Into<String>) -> Self {
        Self {
            pos,
            icon: MarkerIcon::FIRE,
            popup: popup.into(),
        }
    }
}

/// Everything a map widget needs to draw the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: MapPoint,
    pub zoom: ZoomLevel,
    pub markers: Vec<Marker>,
}
