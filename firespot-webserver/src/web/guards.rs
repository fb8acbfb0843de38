use std::sync::Arc;

use rocket::{
    http::Cookie,
    request::{FromRequest, Outcome, Request},
};
use uuid::Uuid;

use firespot_core::gateways::{geocode::GeoCodingGateway, weather::WeatherGateway};

pub const COOKIE_SESSION_KEY: &str = "firespot-session";

/// Identifies the browsing session of a viewer.
///
/// A new session is started if the request carries no
/// valid session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    fn from_cookie(request: &Request) -> Option<Self> {
        request
            .cookies()
            .get_private(COOKIE_SESSION_KEY)
            .and_then(|cookie| cookie.value().parse().ok())
            .map(Self)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionId {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        if let Some(id) = Self::from_cookie(request) {
            return Outcome::Success(id);
        }
        let id = Uuid::new_v4();
        debug!("Starting new session {id}");
        request
            .cookies()
            .add_private(Cookie::new(COOKIE_SESSION_KEY, id.to_string()));
        Outcome::Success(Self(id))
    }
}

pub struct GeoCoding(pub Arc<dyn GeoCodingGateway + Send + Sync>);

pub struct Weather(pub Option<Arc<dyn WeatherGateway + Send + Sync>>);

pub struct Version(pub &'static str);
