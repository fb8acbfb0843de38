use super::json_error_response;
use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

pub use firespot_core::usecases::Error as UsecaseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

fn usecase_error_status(err: &UsecaseError) -> Status {
    match err {
        UsecaseError::AddressNotFound => Status::NotFound,
        UsecaseError::InvalidPosition => Status::BadRequest,
        UsecaseError::ProviderTransport(_) | UsecaseError::ProviderResponseInvalid(_) => {
            Status::BadGateway
        }
        UsecaseError::ConfigMissing(_) => Status::ServiceUnavailable,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Usecase(err) => {
                let status = usecase_error_status(&err);
                if status.class().is_server_error() {
                    warn!("{err}");
                }
                json_error_response(req, &err, status)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}
