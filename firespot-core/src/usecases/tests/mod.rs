use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    result::Result,
};

use time::macros::datetime;

use super::{prelude::*, *};
use crate::gateways::{
    geocode::GeoCodingGateway,
    weather::{BaseDateTime, WeatherGateway},
    GatewayError,
};

const BUSAN_ADDRESS: &str = "부산시 부산진구 신천대로 258";

#[derive(Default)]
pub struct MockGeoGw {
    known: HashMap<String, (f64, f64)>,
    failure: Option<GatewayError>,
    calls: Cell<usize>,
}

impl MockGeoGw {
    pub fn busan() -> Self {
        let mut known = HashMap::new();
        known.insert(BUSAN_ADDRESS.to_string(), (35.16499, 129.05077));
        Self {
            known,
            ..Default::default()
        }
    }

    pub fn failing(err: GatewayError) -> Self {
        Self {
            failure: Some(err),
            ..Default::default()
        }
    }
}

impl GeoCodingGateway for MockGeoGw {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<(f64, f64)>, GatewayError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self.known.get(address).copied())
    }
}

#[derive(Default)]
struct MockWeatherGw {
    requests: RefCell<Vec<(KmaGrid, BaseDateTime)>>,
}

impl WeatherGateway for MockWeatherGw {
    fn ultra_short_term_observations(
        &self,
        grid: KmaGrid,
        base: &BaseDateTime,
    ) -> Result<Vec<Observation>, GatewayError> {
        self.requests.borrow_mut().push((grid, base.clone()));
        Ok(vec![Observation {
            category: "T1H".into(),
            value: 18.2,
        }])
    }
}

fn seoul_session() -> SessionState {
    SessionState::new(
        MapPoint::from_lat_lng_deg(37.55, 126.98),
        "Seoul",
        ZoomLevel::default(),
    )
}

#[test]
fn geocode_known_address() {
    let gw = MockGeoGw::busan();
    let mut state = seoul_session();
    let location = geocode_address(&gw, &mut state, BUSAN_ADDRESS, Some(ZoomLevel::new(12))).unwrap();

    let (lat, lng) = location.pos.to_lat_lng_deg();
    assert!((35.1..=35.2).contains(&lat));
    assert!((129.0..=129.1).contains(&lng));
    assert_eq!(Some(BUSAN_ADDRESS), location.address.as_deref());
    assert_eq!(location.pos, state.current_location);
    assert_eq!(BUSAN_ADDRESS, state.address_label);
    assert_eq!(LocationSource::Geocoded, state.source);
    assert_eq!(12, state.zoom_level.get());
    assert_eq!(
        format!("Selected fire location {BUSAN_ADDRESS}: lat 35.164990, lng 129.050770"),
        state.last_click_text
    );
}

#[test]
fn geocode_trims_the_address_and_keeps_the_zoom_level() {
    let gw = MockGeoGw::busan();
    let mut state = seoul_session();
    let address = format!("  {BUSAN_ADDRESS} ");
    assert!(geocode_address(&gw, &mut state, &address, None).is_ok());
    assert_eq!(BUSAN_ADDRESS, state.address_label);
    assert_eq!(ZoomLevel::default(), state.zoom_level);
}

#[test]
fn geocode_empty_address() {
    let gw = MockGeoGw::busan();
    let mut state = seoul_session();
    let before = state.clone();
    assert_eq!(
        Err(Error::AddressNotFound),
        geocode_address(&gw, &mut state, "", None)
    );
    assert_eq!(
        Err(Error::AddressNotFound),
        geocode_address(&gw, &mut state, " \t ", None)
    );
    assert_eq!(0, gw.calls.get());
    assert_eq!(before, state);
}

#[test]
fn geocode_garbage_address() {
    let gw = MockGeoGw::busan();
    let mut state = seoul_session();
    let before = state.clone();
    assert_eq!(
        Err(Error::AddressNotFound),
        geocode_address(&gw, &mut state, "#@!qwertz???", None)
    );
    assert_eq!(1, gw.calls.get());
    assert_eq!(before, state);
}

#[test]
fn provider_failure_leaves_location_untouched() {
    let gw = MockGeoGw::failing(GatewayError::Transport("HTTP status 503".into()));
    let mut state = seoul_session();
    handle_map_click(&mut state, 37.5, 127.0).unwrap();
    let before = state.clone();
    let res = geocode_address(&gw, &mut state, BUSAN_ADDRESS, Some(ZoomLevel::new(3)));
    assert_eq!(Err(Error::ProviderTransport("HTTP status 503".into())), res);
    assert_eq!(before, state);

    let gw = MockGeoGw::failing(GatewayError::InvalidResponse("expected value".into()));
    let res = geocode_address(&gw, &mut state, BUSAN_ADDRESS, None);
    assert!(matches!(res, Err(Error::ProviderResponseInvalid(_))));
    assert_eq!(before, state);
}

#[test]
fn unconfigured_provider() {
    let gw = MockGeoGw::failing(GatewayError::ConfigMissing("NAVER_CLIENT_ID".into()));
    let mut state = seoul_session();
    let res = geocode_address(&gw, &mut state, BUSAN_ADDRESS, None);
    assert_eq!(Err(Error::ConfigMissing("NAVER_CLIENT_ID".into())), res);
}

#[test]
fn status_message() {
    let gw = MockGeoGw::busan();
    let mut state = seoul_session();
    let res = geocode_address(&gw, &mut state, BUSAN_ADDRESS, None);
    assert_eq!(
        format!("{BUSAN_ADDRESS}: 35.164990, 129.050770"),
        geocode_status_message(BUSAN_ADDRESS, &res)
    );
    let res = geocode_address(&gw, &mut state, "nowhere", None);
    assert_eq!(
        Error::AddressNotFound.to_string(),
        geocode_status_message("nowhere", &res)
    );
}

#[test]
fn click_moves_the_fire_location() {
    let mut state = seoul_session();
    assert!(handle_map_click(&mut state, 35.0, 129.0).unwrap());
    assert_eq!(MapPoint::from_lat_lng_deg(35.0, 129.0), state.current_location);
    assert_eq!(Some(state.current_location), state.last_click);
    assert_eq!(LocationSource::Clicked, state.source);
    assert_eq!(
        "Selected coordinates: lat 35.000000, lng 129.000000",
        state.last_click_text
    );
}

#[test]
fn repeated_identical_click_is_ignored() {
    let mut state = seoul_session();
    assert!(handle_map_click(&mut state, 35.1, 129.1).unwrap());
    let after_first = state.clone();
    assert!(!handle_map_click(&mut state, 35.1, 129.1).unwrap());
    assert_eq!(after_first, state);
}

#[test]
fn last_write_wins() {
    let gw = MockGeoGw::busan();
    let mut state = seoul_session();
    handle_map_click(&mut state, 37.5, 127.0).unwrap();
    geocode_address(&gw, &mut state, BUSAN_ADDRESS, None).unwrap();
    assert_eq!(
        MapPoint::from_lat_lng_deg(35.16499, 129.05077),
        state.current_location
    );
    handle_map_click(&mut state, 36.0, 128.0).unwrap();
    assert_eq!(MapPoint::from_lat_lng_deg(36.0, 128.0), state.current_location);
}

#[test]
fn click_after_geocode_at_previous_click_position_is_ignored() {
    let gw = MockGeoGw::busan();
    let mut state = seoul_session();
    handle_map_click(&mut state, 37.5, 127.0).unwrap();
    geocode_address(&gw, &mut state, BUSAN_ADDRESS, None).unwrap();
    assert!(!handle_map_click(&mut state, 37.5, 127.0).unwrap());
    assert_eq!(LocationSource::Geocoded, state.source);
}

#[test]
fn click_outside_of_the_map() {
    let mut state = seoul_session();
    let before = state.clone();
    assert_eq!(Err(Error::InvalidPosition), handle_map_click(&mut state, 91.0, 0.0));
    assert_eq!(Err(Error::InvalidPosition), handle_map_click(&mut state, 0.0, -181.0));
    assert_eq!(
        Err(Error::InvalidPosition),
        handle_map_click(&mut state, f64::NAN, 0.0)
    );
    assert_eq!(before, state);
}

#[test]
fn render_after_click() {
    let mut state = seoul_session();
    handle_map_click(&mut state, 37.5, 127.0).unwrap();
    let view = render_map(&state);
    assert_eq!(MapPoint::from_lat_lng_deg(37.5, 127.0), view.center);
    assert_eq!(1, view.markers.len());
    let marker = &view.markers[0];
    assert_eq!(view.center, marker.pos);
    assert_eq!(MarkerIcon::FIRE, marker.icon);
    assert_eq!(state.last_click_text, marker.popup);
}

#[test]
fn render_initial_state() {
    let state = seoul_session();
    let view = render_map(&state);
    assert_eq!(state.current_location, view.center);
    assert_eq!(ZoomLevel::default(), view.zoom);
    assert_eq!(1, view.markers.len());
    assert_eq!("Seoul", view.markers[0].popup);
}

#[test]
fn render_is_pure() {
    let mut state = seoul_session();
    handle_map_click(&mut state, 36.1, 128.2).unwrap();
    let before = state.clone();
    assert_eq!(render_map(&state), render_map(&state));
    assert_eq!(before, state);
}

#[test]
fn commit_single_marker() {
    let mut state = seoul_session();
    handle_map_click(&mut state, 37.5, 127.0).unwrap();
    handle_map_click(&mut state, 36.0, 128.0).unwrap();
    let view = commit_marker(&mut state);
    assert_eq!(MapPoint::from_lat_lng_deg(36.0, 128.0), view.center);
    assert_eq!(1, view.markers.len());
    assert_eq!(FIRE_LOCATION_POPUP, view.markers[0].popup);
    assert_eq!(Some(view.center), state.committed);
}

#[test]
fn base_time_of_observations() {
    let now = datetime!(2024-06-30 15:30 UTC);
    let base = observation_base_time(now);
    assert_eq!("20240630", base.date);
    assert_eq!("2300", base.time);

    let now = datetime!(2024-06-30 16:10 UTC);
    let base = observation_base_time(now);
    assert_eq!("20240701", base.date);
    assert_eq!("0000", base.time);

    let now = datetime!(2024-06-30 14:59 UTC);
    let base = observation_base_time(now);
    assert_eq!("20240630", base.date);
    assert_eq!("2200", base.time);
}

#[test]
fn weather_at_the_fire_location() {
    let gw = MockWeatherGw::default();
    let mut state = seoul_session();
    handle_map_click(&mut state, 37.5665, 126.9780).unwrap();
    let now = datetime!(2024-06-30 03:20 UTC);
    let observations = weather_at_location(Some(&gw), &state, now).unwrap();
    assert_eq!(1, observations.len());
    let requests = gw.requests.borrow();
    assert_eq!(KmaGrid { nx: 60, ny: 127 }, requests[0].0);
    assert_eq!("20240630", requests[0].1.date);
    assert_eq!("1100", requests[0].1.time);
}

#[test]
fn weather_without_gateway() {
    let state = seoul_session();
    let res = weather_at_location::<MockWeatherGw>(None, &state, datetime!(2024-06-30 03:20 UTC));
    assert!(matches!(res, Err(Error::ConfigMissing(_))));
}

#[test]
fn nearest_facilities_first() {
    let target = MapPoint::from_lat_lng_deg(35.1649865, 129.0507722);
    let facilities = [
        ("far", "LINESTRING (129.0500 35.1600, 129.0523 35.1666, 129.0600 35.1700)"),
        ("broken", "LINESTRING (x y)"),
        ("near", "LINESTRING (129.0400 35.1500, 129.0520 35.1656, 129.0600 35.1700)"),
    ];
    let distances = facility_distances(target, facilities);
    assert_eq!(2, distances.len());
    assert_eq!("near", distances[0].name);
    assert!((distances[0].distance.to_meters() - 130.8).abs() < 1.0);
    assert_eq!("far", distances[1].name);
    assert!((distances[1].distance.to_meters() - 226.9).abs() < 1.0);
}

#[test]
fn skip_facilities_with_non_ascii_geometry() {
    let target = MapPoint::from_lat_lng_deg(35.1649865, 129.0507722);
    let facilities = [
        ("pipeline", "배관선로 (129 35)"),
        ("power line", "LINESTRING (129.0400 35.1500, 129.0520 35.1656)"),
    ];
    let distances = facility_distances(target, facilities);
    assert_eq!(1, distances.len());
    assert_eq!("power line", distances[0].name);
}

#[test]
fn geocoded_location_is_applied_to_the_latest_state() {
    let gw = MockGeoGw::busan();
    let mut state = seoul_session();
    let location = resolve_address(&gw, BUSAN_ADDRESS).unwrap();
    assert_eq!(seoul_session(), state);

    handle_map_click(&mut state, 36.0, 128.0).unwrap();
    apply_geocoded_location(&mut state, &location, Some(ZoomLevel::new(12)));
    assert_eq!(location.pos, state.current_location);
    assert_eq!(LocationSource::Geocoded, state.source);
    assert_eq!(12, state.zoom_level.get());
    assert_eq!(Some(MapPoint::from_lat_lng_deg(36.0, 128.0)), state.last_click);
    assert!(!handle_map_click(&mut state, 36.0, 128.0).unwrap());
}
