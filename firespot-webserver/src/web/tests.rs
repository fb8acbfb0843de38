use std::sync::Arc;

use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use super::{Cfg, Gateways, InstanceOptions};
use firespot_core::{
    entities::{
        geo::MapPoint,
        map::ZoomLevel,
        weather::{KmaGrid, Observation},
    },
    gateways::{
        geocode::GeoCodingGateway,
        weather::{BaseDateTime, WeatherGateway},
        GatewayError,
    },
};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub const BUSAN_ADDRESS: &str = "부산시 부산진구 신천대로 258";
    pub const BROKEN_ADDRESS: &str = "provider down";

    pub use rocket::{
        http::{ContentType, Cookie, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{setup, setup_with_weather, DummyGeoGW, DummyWeatherGW};
}

use self::prelude::*;

pub struct DummyGeoGW;

impl GeoCodingGateway for DummyGeoGW {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<(f64, f64)>, GatewayError> {
        match address {
            BUSAN_ADDRESS => Ok(Some((35.16499, 129.05077))),
            BROKEN_ADDRESS => Err(GatewayError::Transport("HTTP status 503".into())),
            _ => Ok(None),
        }
    }
}

pub struct DummyWeatherGW;

impl WeatherGateway for DummyWeatherGW {
    fn ultra_short_term_observations(
        &self,
        _: KmaGrid,
        _: &BaseDateTime,
    ) -> Result<Vec<Observation>, GatewayError> {
        Ok(vec![
            Observation {
                category: "T1H".into(),
                value: 24.1,
            },
            Observation {
                category: "PTY".into(),
                value: 0.0,
            },
        ])
    }
}

fn default_cfg() -> Cfg {
    Cfg {
        initial_address: "Seoul".into(),
        initial_location: MapPoint::from_lat_lng_deg(37.5665, 126.978),
        initial_zoom: ZoomLevel::default(),
    }
}

fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
    weather: Option<Arc<dyn WeatherGateway + Send + Sync>>,
) -> Client {
    let options = InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg: default_cfg(),
        version: DUMMY_VERSION,
    };
    let gateways = Gateways {
        geocoding: Arc::new(DummyGeoGW),
        weather,
    };
    let rocket = super::rocket_instance(options, gateways);
    Client::tracked(rocket).unwrap()
}

pub fn setup(mounts: Vec<(&'static str, Vec<Route>)>) -> Client {
    rocket_test_setup(mounts, None)
}

pub fn setup_with_weather(mounts: Vec<(&'static str, Vec<Route>)>) -> Client {
    rocket_test_setup(mounts, Some(Arc::new(DummyWeatherGW)))
}

#[test]
fn full_instance_serves_api_and_frontend() {
    let client = setup(super::mounts());
    let res = client.get("/api/version").dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!(DUMMY_VERSION, res.into_string().unwrap());
    #[cfg(feature = "frontend")]
    assert_eq!(Status::Ok, client.get("/").dispatch().status());
}
