use std::sync::Arc;

use crate::config;
use firespot_core::gateways::{
    geocode::GeoCodingGateway, weather::WeatherGateway, GatewayError,
};
use firespot_gateways::{kma::Kma, naver::Naver, nominatim::Nominatim};

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Arc<dyn GeoCodingGateway + Send + Sync> {
    let timeout = cfg.timeout;
    match &cfg.gateway {
        config::GeocodingGateway::Nominatim {
            base_url,
            user_agent,
        } => {
            log::info!("Use Nominatim geocoding gateway ({base_url})");
            Arc::new(Nominatim {
                base_url: base_url.clone(),
                user_agent: user_agent.clone(),
                timeout,
            })
        }
        config::GeocodingGateway::Naver {
            api_url,
            credentials: Some(credentials),
        } => {
            log::info!("Use Naver geocoding gateway");
            Arc::new(Naver {
                api_url: api_url.clone(),
                client_id: credentials.client_id.clone(),
                client_secret: credentials.client_secret.clone(),
                timeout,
            })
        }
        config::GeocodingGateway::Naver {
            credentials: None, ..
        } => {
            log::warn!("Naver geocoding gateway was not configured: missing client credentials");
            Arc::new(UnconfiguredGeoCodingGw)
        }
    }
}

pub fn weather_gateway(
    cfg: Option<&config::Weather>,
) -> Option<Arc<dyn WeatherGateway + Send + Sync>> {
    let Some(cfg) = cfg else {
        log::warn!("No weather gateway was configured");
        return None;
    };
    log::info!("Use KMA weather gateway");
    Some(Arc::new(Kma {
        base_url: cfg.base_url.clone(),
        service_key: cfg.api_key.clone(),
        timeout: cfg.timeout,
    }))
}

/// Reports the missing credentials on every request
/// instead of refusing to start.
struct UnconfiguredGeoCodingGw;

impl GeoCodingGateway for UnconfiguredGeoCodingGw {
    fn resolve_address_lat_lng(&self, _: &str) -> Result<Option<(f64, f64)>, GatewayError> {
        Err(GatewayError::ConfigMissing(
            "NAVER_CLIENT_ID and NAVER_CLIENT_SECRET are required".into(),
        ))
    }
}
