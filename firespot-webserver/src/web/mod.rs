use std::sync::Arc;

use firespot_core::{
    entities::{geo::MapPoint, location::Location, map::ZoomLevel, session::SessionState},
    gateways::{geocode::GeoCodingGateway, weather::WeatherGateway},
    usecases,
};
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;
mod sessions;

#[cfg(test)]
pub mod tests;

use self::{api::ApiError, guards::SessionId, sessions::SessionStore};

/// Initial state of every new session.
#[derive(Debug, Clone)]
pub struct Cfg {
    pub initial_address: String,
    pub initial_location: MapPoint,
    pub initial_zoom: ZoomLevel,
}

impl Cfg {
    fn initial_session(&self) -> SessionState {
        SessionState::new(
            self.initial_location,
            self.initial_address.as_str(),
            self.initial_zoom,
        )
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    weather: Option<Arc<dyn WeatherGateway + Send + Sync>>,
}

pub(crate) fn rocket_instance(options: InstanceOptions, gateways: Gateways) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways { geocoding, weather } = gateways;

    if weather.is_none() {
        warn!("No weather gateway configured");
    }
    info!(
        "New sessions start at '{}' ({})",
        cfg.initial_address, cfg.initial_location
    );
    let sessions = SessionStore::new(cfg.initial_session());

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(sessions)
        .manage(guards::GeoCoding(geocoding))
        .manage(guards::Weather(weather))
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

/// Run a blocking gateway call outside of the async executor.
async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    rocket::tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| ApiError::Other(anyhow::anyhow!(err)))
}

/// Geocode the address within the given session.
///
/// The session is only updated if the address has been resolved.
/// The result is applied to the state as it is after the lookup,
/// so clicks that arrive in the meantime are not lost.
async fn geocode_in_session(
    sessions: &SessionStore,
    geocoding: &guards::GeoCoding,
    session: SessionId,
    address: String,
    zoom: Option<ZoomLevel>,
) -> Result<(Location, SessionState), ApiError> {
    let gateway = Arc::clone(&geocoding.0);
    let location =
        run_blocking(move || usecases::resolve_address(&*gateway, &address)).await??;
    let state = sessions.update(session, |state| {
        usecases::apply_geocoded_location(state, &location, zoom);
        state.clone()
    });
    Ok((location, state))
}

pub async fn run(
    enable_cors: bool,
    cfg: Cfg,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    weather: Option<Arc<dyn WeatherGateway + Send + Sync>>,
    version: &'static str,
) {
    let mounts = mounts();
    let options = InstanceOptions {
        mounts,
        rocket_cfg: None,
        cfg,
        version,
    };
    let gateways = Gateways { geocoding, weather };

    let instance = rocket_instance(options, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS options: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
