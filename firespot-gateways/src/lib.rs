//! HTTP clients of the external services.
//!
//! All clients are blocking and must not be called
//! from within an async executor thread.

use std::time::Duration;

use firespot_core::gateways::GatewayError;
use reqwest::blocking::{Client, Response};

pub mod kma;
pub mod naver;
pub mod nominatim;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

fn client(timeout: Duration) -> Result<Client, GatewayError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| GatewayError::Transport(err.to_string()))
}

/// Read the body of a successful response.
fn response_text(response: reqwest::Result<Response>) -> Result<String, GatewayError> {
    let response = response.map_err(|err| GatewayError::Transport(err.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::Transport(format!("HTTP status {status}")));
    }
    response
        .text()
        .map_err(|err| GatewayError::Transport(err.to_string()))
}

fn parse_coord(value: &str, name: &str) -> Result<f64, GatewayError> {
    value
        .trim()
        .parse()
        .map_err(|_| GatewayError::InvalidResponse(format!("Invalid {name} '{value}'")))
}
