use crate::{geo::Distance, linestring::LineString};

/// A facility that might be affected by a fire,
/// e.g. a pipeline or a power line.
#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub name: String,
    pub geometry: LineString,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacilityDistance {
    pub name: String,
    pub distance: Distance,
}
