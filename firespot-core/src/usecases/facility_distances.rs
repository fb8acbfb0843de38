use super::prelude::*;
use firespot_entities::linestring::LineString;

/// Distances between the target and the given facilities, nearest first.
///
/// Each facility is represented by the middle vertex of its geometry.
/// Facilities with an unreadable geometry are skipped.
pub fn facility_distances<'a, I>(target: MapPoint, facilities: I) -> Vec<FacilityDistance>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut distances: Vec<_> = facilities
        .into_iter()
        .filter_map(|(name, geometry)| match geometry.parse::<LineString>() {
            Ok(geometry) => Some(Facility {
                name: name.to_owned(),
                geometry,
            }),
            Err(err) => {
                log::debug!("Skipping facility '{name}': {err}");
                None
            }
        })
        .filter_map(|facility| facility_distance(target, facility))
        .collect();
    distances.sort_by(|a, b| a.distance.to_meters().total_cmp(&b.distance.to_meters()));
    distances
}

/// Distance between the target and the middle vertex of the facility.
pub fn facility_distance(target: MapPoint, facility: Facility) -> Option<FacilityDistance> {
    let distance = MapPoint::distance(target, facility.geometry.mid_point())?;
    Some(FacilityDistance {
        name: facility.name,
        distance,
    })
}
