use std::{fmt::Display, result};

use firespot_boundary::{self as json, Error as JsonErrorResponse};
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes, Route, State,
};
use time::OffsetDateTime;

use super::{geocode_in_session, guards::*, run_blocking, sessions::SessionStore};
use firespot_core::{entities::map::ZoomLevel, usecases};

mod error;


pub use self::error::Error as ApiError;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        get_session,
        get_view,
        post_geocode,
        post_click,
        post_commit,
        get_weather,
        post_facility_distances,
        get_version,
    ]
}

#[get("/session")]
pub fn get_session(sessions: &State<SessionStore>, session: SessionId) -> Json<json::SessionSnapshot> {
    Json(sessions.load(session).into())
}

#[get("/view")]
pub fn get_view(sessions: &State<SessionStore>, session: SessionId) -> Json<json::MapView> {
    let state = sessions.load(session);
    Json(usecases::render_map(&state).into())
}

#[post("/geocode", data = "<request>")]
pub async fn post_geocode(
    sessions: &State<SessionStore>,
    geocoding: &State<GeoCoding>,
    session: SessionId,
    request: JsonResult<'_, json::GeocodeRequest>,
) -> Result<json::MapView> {
    let json::GeocodeRequest { address, zoom } = request?.into_inner();
    let zoom = zoom.map(ZoomLevel::from);
    let (_, state) = geocode_in_session(sessions, geocoding, session, address, zoom).await?;
    Ok(Json(usecases::render_map(&state).into()))
}

#[post("/click", data = "<click>")]
pub fn post_click(
    sessions: &State<SessionStore>,
    session: SessionId,
    click: JsonResult<json::Coordinate>,
) -> Result<json::MapView> {
    let json::Coordinate { lat, lng } = click?.into_inner();
    let mut state = sessions.load(session);
    if usecases::handle_map_click(&mut state, lat, lng)? {
        sessions.store(session, state.clone());
    }
    Ok(Json(usecases::render_map(&state).into()))
}

#[post("/commit")]
pub fn post_commit(sessions: &State<SessionStore>, session: SessionId) -> Json<json::MapView> {
    let mut state = sessions.load(session);
    let view = usecases::commit_marker(&mut state);
    sessions.store(session, state);
    Json(view.into())
}

#[get("/weather")]
pub async fn get_weather(
    sessions: &State<SessionStore>,
    weather: &State<Weather>,
    session: SessionId,
) -> Result<Vec<json::Observation>> {
    let state = sessions.load(session);
    let gateway = weather.0.clone();
    let observations = run_blocking(move || {
        usecases::weather_at_location(gateway.as_deref(), &state, OffsetDateTime::now_utc())
    })
    .await??;
    Ok(Json(observations.into_iter().map(Into::into).collect()))
}

#[post("/facilities/distances", data = "<facilities>")]
pub fn post_facility_distances(
    sessions: &State<SessionStore>,
    session: SessionId,
    facilities: JsonResult<Vec<json::Facility>>,
) -> Result<Vec<json::FacilityDistance>> {
    let facilities = facilities?.into_inner();
    let target = sessions.load(session).current_location;
    let distances = usecases::facility_distances(
        target,
        facilities
            .iter()
            .map(|f| (f.name.as_str(), f.geometry.as_str())),
    );
    if distances.is_empty() && !facilities.is_empty() {
        return Err(ApiError::OtherWithStatus(
            anyhow::anyhow!("None of the facility geometries is a valid LINESTRING"),
            Status::BadRequest,
        ));
    }
    Ok(Json(distances.into_iter().map(Into::into).collect()))
}

#[get("/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
