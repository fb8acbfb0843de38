use thiserror::Error;

pub mod geocode;
pub mod weather;

/// Failures of an external provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    InvalidResponse(String),
    #[error("{0}")]
    ConfigMissing(String),
}
