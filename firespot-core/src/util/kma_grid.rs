//! Conversion of geographic coordinates into the forecast grid of the
//! Korea Meteorological Administration (Lambert conformal conic projection).

use std::f64::consts::{FRAC_PI_4, PI};

use firespot_entities::{geo::MapPoint, weather::KmaGrid};

/// Earth radius [km]
const EARTH_RADIUS: f64 = 6371.00877;
/// Grid spacing [km]
const GRID: f64 = 5.0;
/// Standard parallels [deg]
const SLAT1: f64 = 30.0;
const SLAT2: f64 = 60.0;
/// Origin [deg]
const OLON: f64 = 126.0;
const OLAT: f64 = 38.0;
/// Grid cell of the origin
const XO: f64 = 43.0;
const YO: f64 = 136.0;

pub fn to_kma_grid(pos: MapPoint) -> KmaGrid {
    let (lat, lng) = pos.to_lat_lng_deg();
    let deg_rad = PI / 180.0;

    let re = EARTH_RADIUS / GRID;
    let slat1 = SLAT1 * deg_rad;
    let slat2 = SLAT2 * deg_rad;
    let olon = OLON * deg_rad;
    let olat = OLAT * deg_rad;

    let sn = (FRAC_PI_4 + slat2 * 0.5).tan() / (FRAC_PI_4 + slat1 * 0.5).tan();
    let sn = (slat1.cos() / slat2.cos()).ln() / sn.ln();
    let sf = (FRAC_PI_4 + slat1 * 0.5).tan().powf(sn) * slat1.cos() / sn;
    let ro = re * sf / (FRAC_PI_4 + olat * 0.5).tan().powf(sn);

    let ra = re * sf / (FRAC_PI_4 + lat * deg_rad * 0.5).tan().powf(sn);
    let mut theta = lng * deg_rad - olon;
    if theta > PI {
        theta -= 2.0 * PI;
    }
    if theta < -PI {
        theta += 2.0 * PI;
    }
    theta *= sn;

    let nx = (ra * theta.sin() + XO + 0.5).floor();
    let ny = (ro - ra * theta.cos() + YO + 0.5).floor();
    KmaGrid {
        nx: nx.max(0.0) as u16,
        ny: ny.max(0.0) as u16,
    }
}
