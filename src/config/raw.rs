use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &[u8] = include_bytes!("firespot.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub session: Option<Session>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
    pub weather: Option<Weather>,
    pub webserver: Option<WebServer>,
}

impl Config {
    pub fn builtin() -> anyhow::Result<Self> {
        let cfg = toml::from_str(std::str::from_utf8(DEFAULT_CONFIG_FILE)?)?;
        Ok(cfg)
    }

    /// Fill in all sections that are missing with the built-in defaults.
    pub fn or_builtin(self) -> anyhow::Result<Self> {
        let defaults = Self::builtin()?;
        let gateway = match (self.gateway, defaults.gateway) {
            (Some(gw), Some(default_gw)) => Some(Gateway {
                nominatim: gw.nominatim.or(default_gw.nominatim),
                naver: gw.naver.or(default_gw.naver),
            }),
            (gw, default_gw) => gw.or(default_gw),
        };
        Ok(Self {
            session: self.session.or(defaults.session),
            geocoding: self.geocoding.or(defaults.geocoding),
            gateway,
            weather: self.weather.or(defaults.weather),
            webserver: self.webserver.or(defaults.webserver),
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Session {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub zoom: Option<u8>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: GeocodingGateway,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
    Naver,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
    pub naver: Option<Naver>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub base_url: Option<String>,
    pub user_agent: String,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Naver {
    pub api_url: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Weather {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}
