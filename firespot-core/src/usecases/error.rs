use crate::gateways::GatewayError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("The address could not be found. Please try another one.")]
    AddressNotFound,
    #[error("The provider could not be reached: {0}")]
    ProviderTransport(String),
    #[error("The provider returned an invalid response: {0}")]
    ProviderResponseInvalid(String),
    #[error("Missing configuration: {0}")]
    ConfigMissing(String),
    #[error("Invalid position")]
    InvalidPosition,
}

impl From<GatewayError> for Error {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Transport(msg) => Self::ProviderTransport(msg),
            GatewayError::InvalidResponse(msg) => Self::ProviderResponseInvalid(msg),
            GatewayError::ConfigMissing(msg) => Self::ConfigMissing(msg),
        }
    }
}
