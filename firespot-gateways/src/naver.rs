use std::time::Duration;

use firespot_core::gateways::{geocode::GeoCodingGateway, GatewayError};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://naveropenapi.apigw.ntruss.com/map-geocode/v2/geocode";

const HEADER_CLIENT_ID: &str = "X-NCP-APIGW-API-KEY-ID";
const HEADER_CLIENT_SECRET: &str = "X-NCP-APIGW-API-KEY";

/// Geocoding with the Naver Cloud Platform Maps API.
#[derive(Debug, Clone)]
pub struct Naver {
    pub api_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meta {
    total_count: u64,
}

#[derive(Debug, Deserialize)]
struct Address {
    /// Longitude
    x: String,
    /// Latitude
    y: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    meta: Meta,
    #[serde(default)]
    addresses: Vec<Address>,
}

fn parse_geocode_response(body: &str) -> Result<Option<(f64, f64)>, GatewayError> {
    let response: GeocodeResponse = serde_json::from_str(body)
        .map_err(|err| GatewayError::InvalidResponse(err.to_string()))?;
    if response.meta.total_count == 0 {
        return Ok(None);
    }
    let Some(address) = response.addresses.first() else {
        return Err(GatewayError::InvalidResponse(
            "Missing addresses in non-empty result".into(),
        ));
    };
    let lat = super::parse_coord(&address.y, "latitude")?;
    let lng = super::parse_coord(&address.x, "longitude")?;
    Ok(Some((lat, lng)))
}

impl GeoCodingGateway for Naver {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<(f64, f64)>, GatewayError> {
        let response = super::client(self.timeout)?
            .get(&self.api_url)
            .header(HEADER_CLIENT_ID, &self.client_id)
            .header(HEADER_CLIENT_SECRET, &self.client_secret)
            .query(&[("query", address)])
            .send();
        let body = super::response_text(response)?;
        parse_geocode_response(&body)
    }
}
