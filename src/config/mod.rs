use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

use firespot_core::entities::{geo::MapPoint, map::ZoomLevel, session::SessionState};
use firespot_gateways::{kma, naver, nominatim, DEFAULT_TIMEOUT};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "firespot.toml";

const ENV_NAME_NAVER_CLIENT_ID: &str = "NAVER_CLIENT_ID";
const ENV_NAME_NAVER_CLIENT_SECRET: &str = "NAVER_CLIENT_SECRET";
const ENV_NAME_WEATHER_API_KEY: &str = "WEATHER_API_KEY";
const ENV_NAME_WEATHER_BASE_URL: &str = "WEATHER_BASE_URL";

pub struct Config {
    pub session: Session,
    pub geocoding: Geocoding,
    /// `None` if no weather service is configured.
    pub weather: Option<Weather>,
    pub webserver: WebServer,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str::<raw::Config>(&cfg_string)?.or_builtin()?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::builtin()
                }
                _ => Err(err.into()),
            }?,
        };
        Self::from_raw_with_env(raw_config, |name| env::var(name).ok())
    }

    fn from_raw_with_env<F>(mut raw_config: raw::Config, env_var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        apply_env_overrides(&mut raw_config, env_var);
        Self::try_from(raw_config)
    }
}

pub struct Session {
    pub address: String,
    pub location: MapPoint,
    pub zoom: ZoomLevel,
}

impl Session {
    pub fn initial_state(&self) -> SessionState {
        SessionState::new(self.location, self.address.as_str(), self.zoom)
    }
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
    pub timeout: Duration,
}

pub enum GeocodingGateway {
    Nominatim {
        base_url: String,
        user_agent: String,
    },
    Naver {
        api_url: String,
        /// `None` if the client ID or secret is missing.
        credentials: Option<NaverCredentials>,
    },
}

pub struct NaverCredentials {
    pub client_id: String,
    pub client_secret: String,
}

pub struct Weather {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

pub struct WebServer {
    pub enable_cors: bool,
}

fn apply_env_overrides<F>(cfg: &mut raw::Config, env_var: F)
where
    F: Fn(&str) -> Option<String>,
{
    let gateway = cfg.gateway.get_or_insert(raw::Gateway {
        nominatim: None,
        naver: None,
    });
    let naver = gateway.naver.get_or_insert_with(Default::default);
    if let Some(id) = env_var(ENV_NAME_NAVER_CLIENT_ID) {
        naver.client_id = Some(id);
    }
    if let Some(secret) = env_var(ENV_NAME_NAVER_CLIENT_SECRET) {
        naver.client_secret = Some(secret);
    }
    let weather = cfg.weather.get_or_insert_with(Default::default);
    if let Some(key) = env_var(ENV_NAME_WEATHER_API_KEY) {
        weather.api_key = Some(key);
    }
    if let Some(url) = env_var(ENV_NAME_WEATHER_BASE_URL) {
        weather.base_url = Some(url);
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            session,
            geocoding,
            gateway,
            weather,
            webserver,
        } = from;

        let raw::Session {
            address,
            lat,
            lng,
            zoom,
        } = session.ok_or_else(|| anyhow!("Missing session configuration"))?;
        let location = MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or_else(|| anyhow!("Invalid initial session location: {lat},{lng}"))?;
        let session = Session {
            address,
            location,
            zoom: zoom.map(ZoomLevel::from).unwrap_or_default(),
        };

        let raw::Geocoding { gateway: gw_name, timeout } =
            geocoding.ok_or_else(|| anyhow!("Missing geocoding configuration"))?;
        let raw::Gateway {
            nominatim: nominatim_cfg,
            naver: naver_cfg,
        } = gateway.ok_or_else(|| anyhow!("Missing gateway configuration"))?;
        let gateway = match gw_name {
            raw::GeocodingGateway::Nominatim => {
                let raw::Nominatim {
                    base_url,
                    user_agent,
                } = nominatim_cfg
                    .ok_or_else(|| anyhow!("Missing 'nominatim' gateway configuration"))?;
                GeocodingGateway::Nominatim {
                    base_url: base_url.unwrap_or_else(|| nominatim::DEFAULT_BASE_URL.to_owned()),
                    user_agent,
                }
            }
            raw::GeocodingGateway::Naver => {
                let raw::Naver {
                    api_url,
                    client_id,
                    client_secret,
                } = naver_cfg.unwrap_or_default();
                let credentials = match (non_empty(client_id), non_empty(client_secret)) {
                    (Some(client_id), Some(client_secret)) => Some(NaverCredentials {
                        client_id,
                        client_secret,
                    }),
                    _ => None,
                };
                GeocodingGateway::Naver {
                    api_url: api_url.unwrap_or_else(|| naver::DEFAULT_API_URL.to_owned()),
                    credentials,
                }
            }
        };
        let geocoding = Geocoding {
            gateway,
            timeout: timeout.unwrap_or(DEFAULT_TIMEOUT),
        };

        let raw::Weather {
            base_url,
            api_key,
            timeout,
        } = weather.unwrap_or_default();
        let weather = match (non_empty(base_url), non_empty(api_key)) {
            (Some(base_url), Some(api_key)) => Some(Weather {
                base_url,
                api_key,
                timeout: timeout.unwrap_or(DEFAULT_TIMEOUT),
            }),
            _ => None,
        };

        let raw::WebServer { cors } =
            webserver.ok_or_else(|| anyhow!("Missing webserver configuration"))?;
        let webserver = WebServer { enable_cors: cors };

        Ok(Self {
            session,
            geocoding,
            weather,
            webserver,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(toml: &str, env: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<_, _> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let raw = toml::from_str::<raw::Config>(toml)?.or_builtin()?;
        Config::from_raw_with_env(raw, |name| env.get(name).cloned())
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn builtin_defaults() {
        let cfg = load("", &[]).unwrap();
        assert_eq!("부산시 부산진구 신천대로 258", cfg.session.address);
        assert_eq!(15, cfg.session.zoom.get());
        assert_eq!(Duration::from_secs(10), cfg.geocoding.timeout);
        assert!(matches!(
            cfg.geocoding.gateway,
            GeocodingGateway::Nominatim { ref user_agent, .. } if user_agent == "address_to_map"
        ));
        assert!(cfg.weather.is_none());
        assert!(!cfg.webserver.enable_cors);
    }

    #[test]
    fn naver_gateway_with_credentials_from_env() {
        let toml = r#"
            [geocoding]
            gateway = "naver"
            timeout = "3s"
        "#;
        let cfg = load(
            toml,
            &[
                (ENV_NAME_NAVER_CLIENT_ID, "id"),
                (ENV_NAME_NAVER_CLIENT_SECRET, "secret"),
            ],
        )
        .unwrap();
        assert_eq!(Duration::from_secs(3), cfg.geocoding.timeout);
        let GeocodingGateway::Naver {
            api_url,
            credentials: Some(credentials),
        } = cfg.geocoding.gateway
        else {
            panic!("Naver gateway with credentials expected");
        };
        assert_eq!(naver::DEFAULT_API_URL, api_url);
        assert_eq!("id", credentials.client_id);
        assert_eq!("secret", credentials.client_secret);
    }

    #[test]
    fn naver_gateway_without_credentials() {
        let toml = r#"
            [geocoding]
            gateway = "naver"
        "#;
        let cfg = load(toml, &[(ENV_NAME_NAVER_CLIENT_ID, "id")]).unwrap();
        assert!(matches!(
            cfg.geocoding.gateway,
            GeocodingGateway::Naver {
                credentials: None,
                ..
            }
        ));
    }

    #[test]
    fn weather_requires_url_and_key() {
        let cfg = load("", &[(ENV_NAME_WEATHER_API_KEY, "key")]).unwrap();
        assert!(cfg.weather.is_none());

        let cfg = load(
            "",
            &[
                (ENV_NAME_WEATHER_API_KEY, "key"),
                (ENV_NAME_WEATHER_BASE_URL, kma::DEFAULT_BASE_URL),
            ],
        )
        .unwrap();
        let weather = cfg.weather.unwrap();
        assert_eq!("key", weather.api_key);
        assert_eq!(kma::DEFAULT_BASE_URL, weather.base_url);
        assert_eq!(Duration::from_secs(10), weather.timeout);
    }

    #[test]
    fn invalid_session_location() {
        let toml = r#"
            [session]
            address = "nowhere"
            lat = 91.0
            lng = 0.0
        "#;
        assert!(load(toml, &[]).is_err());
    }

    #[test]
    fn file_sections_replace_defaults() {
        let toml = r#"
            [session]
            address = "Seoul"
            lat = 37.5665
            lng = 126.978
            zoom = 30

            [webserver]
            cors = true
        "#;
        let cfg = load(toml, &[]).unwrap();
        assert_eq!("Seoul", cfg.session.address);
        assert_eq!(ZoomLevel::MAX, cfg.session.zoom);
        assert!(cfg.webserver.enable_cors);
    }
}
