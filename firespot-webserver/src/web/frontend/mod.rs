use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{
        content::{RawCss, RawJavaScript},
        Flash, Redirect,
    },
    routes, uri, FromForm, Route, State,
};

use super::{geocode_in_session, guards::*, sessions::SessionStore};
use firespot_core::{entities::map::ZoomLevel, usecases};

mod view;


const MAP_JS: &str = include_str!("map.js");
const MAIN_CSS: &str = include_str!("main.css");

#[get("/")]
pub fn get_index(
    sessions: &State<SessionStore>,
    session: SessionId,
    flash: Option<FlashMessage<'_>>,
) -> Markup {
    let state = sessions.load(session);
    let status = flash.as_ref().map(|f| (f.kind(), f.message()));
    view::index(&state, status)
}

#[derive(FromForm)]
pub struct GeocodeForm {
    address: String,
    zoom: Option<u8>,
}

#[post("/geocode", data = "<form>")]
pub async fn post_geocode(
    sessions: &State<SessionStore>,
    geocoding: &State<GeoCoding>,
    session: SessionId,
    form: Form<GeocodeForm>,
) -> Flash<Redirect> {
    let GeocodeForm { address, zoom } = form.into_inner();
    let zoom = zoom.map(ZoomLevel::from);
    let redirect = Redirect::to(uri!(get_index));
    match geocode_in_session(sessions, geocoding, session, address.clone(), zoom).await {
        Ok((location, _)) => Flash::success(
            redirect,
            usecases::geocode_status_message(&address, &Ok(location)),
        ),
        Err(err) => Flash::error(redirect, err.to_string()),
    }
}

#[post("/commit")]
pub fn post_commit(sessions: &State<SessionStore>, session: SessionId) -> Flash<Redirect> {
    let mut state = sessions.load(session);
    let view = usecases::commit_marker(&mut state);
    sessions.store(session, state);
    let (lat, lng) = view.center.to_lat_lng_deg();
    Flash::success(
        Redirect::to(uri!(get_index)),
        format!("Fire location set: lat {lat:.6}, lng {lng:.6}"),
    )
}

#[get("/map.js")]
pub fn get_map_js() -> RawJavaScript<&'static str> {
    RawJavaScript(MAP_JS)
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

pub fn routes() -> Vec<Route> {
    routes![get_index, post_geocode, post_commit, get_map_js, get_main_css]
}
