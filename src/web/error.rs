use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use super::routes::{SetupError, SignupError};

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("signup error: {0}")]
    Signup(#[from] SignupError),
    #[error("database setup error: {0}")]
    Setup(#[from] SetupError),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::Signup(SignupError::DataParsing(_)) => {
                (StatusCode::BAD_REQUEST, AllFieldsRequired)
            }
            Error::Signup(SignupError::Mailing(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, SubscriptionFailed)
            }
            Error::Setup(SetupError::DatabaseNotConfigured) => {
                (StatusCode::INTERNAL_SERVER_ERROR, DatabaseNotConfigured)
            }
            Error::Setup(SetupError::Database(er)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Provisioning(er.to_string()),
            ),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// Client-facing error messages. Provider failures all collapse into one
/// generic message; provisioning failures surface the raw error text since
/// that endpoint is operator-facing.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("All fields are required")]
    AllFieldsRequired,
    #[display("Subscription failed. Please try again.")]
    SubscriptionFailed,
    #[display("Database not configured")]
    DatabaseNotConfigured,
    #[display("{_0}")]
    Provisioning(String),
}
