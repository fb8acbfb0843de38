#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use std::sync::Arc;

use firespot_core::gateways::{geocode::GeoCodingGateway, weather::WeatherGateway};

mod web;

pub use web::Cfg;

pub async fn run(
    enable_cors: bool,
    cfg: Cfg,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    weather: Option<Arc<dyn WeatherGateway + Send + Sync>>,
    version: &'static str,
) {
    web::run(enable_cors, cfg, geocoding, weather, version).await;
}
