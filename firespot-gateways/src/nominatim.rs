use std::time::Duration;

use firespot_core::gateways::{geocode::GeoCodingGateway, GatewayError};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Geocoding with the OpenStreetMap Nominatim service.
///
/// The usage policy of the public instance requires
/// an identifying user agent.
#[derive(Debug, Clone)]
pub struct Nominatim {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

fn parse_search_response(body: &str) -> Result<Option<(f64, f64)>, GatewayError> {
    let places: Vec<Place> = serde_json::from_str(body)
        .map_err(|err| GatewayError::InvalidResponse(err.to_string()))?;
    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };
    if let Some(name) = &place.display_name {
        log::debug!("Nominatim best match: {name}");
    }
    let lat = super::parse_coord(&place.lat, "latitude")?;
    let lng = super::parse_coord(&place.lon, "longitude")?;
    Ok(Some((lat, lng)))
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<(f64, f64)>, GatewayError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let response = super::client(self.timeout)?
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send();
        let body = super::response_text(response)?;
        parse_search_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_best_match() {
        let body = r#"[{"place_id":123,"lat":"35.1649865","lon":"129.0507722","display_name":"258, 신천대로, 부산진구, 부산광역시, 대한민국"}]"#;
        assert_eq!(
            Ok(Some((35.1649865, 129.0507722))),
            parse_search_response(body)
        );
    }

    #[test]
    fn parse_empty_result() {
        assert_eq!(Ok(None), parse_search_response("[]"));
    }

    #[test]
    fn parse_invalid_response() {
        assert!(matches!(
            parse_search_response("<html>Bad Gateway</html>"),
            Err(GatewayError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_search_response(r#"[{"lat":"north","lon":"1.0"}]"#),
            Err(GatewayError::InvalidResponse(_))
        ));
    }
}
