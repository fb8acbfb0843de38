//! Minimal reader for WKT `LINESTRING` geometries as found in
//! public facility registers, e.g. `LINESTRING (129.05 35.16, 129.06 35.17)`.
//!
//! WKT stores coordinates in `x y` order, i.e. longitude first.

use itertools::Itertools;
use thiserror::Error;

use crate::geo::MapPoint;

const TAG: &str = "LINESTRING";

#[derive(Debug, Clone, PartialEq)]
pub struct LineString(Vec<MapPoint>);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineStringParseError {
    #[error("Not a LINESTRING geometry")]
    Tag,
    #[error("Missing parentheses")]
    Parentheses,
    #[error("Empty LINESTRING")]
    Empty,
    #[error("Invalid vertex '{0}'")]
    Vertex(String),
}

impl LineString {
    pub fn points(&self) -> &[MapPoint] {
        &self.0
    }

    /// The vertex in the middle of the list of vertices.
    ///
    /// For an even number of vertices the upper one of
    /// the two central vertices is chosen.
    pub fn mid_point(&self) -> MapPoint {
        debug_assert!(!self.0.is_empty());
        self.0[self.0.len() / 2]
    }
}

fn parse_vertex(s: &str) -> Result<MapPoint, LineStringParseError> {
    let err = || LineStringParseError::Vertex(s.trim().to_owned());
    let (lng, lat) = s.split_whitespace().collect_tuple().ok_or_else(err)?;
    let lng = lng.parse::<f64>().map_err(|_| err())?;
    let lat = lat.parse::<f64>().map_err(|_| err())?;
    MapPoint::try_from_lat_lng_deg(lat, lng).ok_or_else(err)
}

impl std::str::FromStr for LineString {
    type Err = LineStringParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (tag, rest) = s
            .split_at_checked(TAG.len())
            .ok_or(LineStringParseError::Tag)?;
        if !tag.eq_ignore_ascii_case(TAG) {
            return Err(LineStringParseError::Tag);
        }
        let body = rest
            .trim()
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or(LineStringParseError::Parentheses)?;
        if body.trim().is_empty() {
            return Err(LineStringParseError::Empty);
        }
        let points = body.split(',').map(parse_vertex).collect::<Result<_, _>>()?;
        Ok(Self(points))
    }
}
