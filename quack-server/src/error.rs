//! Error types for the Quack server.
//!
//! `ServerError` is returned by every HTTP handler and converts itself into
//! a JSON response of the form `{"message": "..."}`. Expected request
//! failures map to 4xx codes with fixed messages; anything else is an
//! uncaught failure and becomes a 500 whose detail only reaches the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

/// The main error type for server operations.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A required query parameter is absent or empty
    #[error("Missing parameters")]
    MissingParameters,

    /// No user is registered under the requested name
    #[error("User not found")]
    UserNotFound,

    /// The name is already registered, in some casing
    #[error("This name is already in use")]
    NameInUse,

    /// A timestamp that cannot be parsed or converted
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Configuration errors (missing values, invalid format)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Create an invalid timestamp error with a message.
    pub fn invalid_timestamp(msg: impl Into<String>) -> Self {
        Self::InvalidTimestamp(msg.into())
    }

    /// Create a config error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::MissingParameters => StatusCode::BAD_REQUEST,
            ServerError::UserNotFound => StatusCode::NOT_FOUND,
            ServerError::NameInUse => StatusCode::CONFLICT,
            ServerError::InvalidTimestamp(_) | ServerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

impl From<jiff::Error> for ServerError {
    fn from(err: jiff::Error) -> Self {
        ServerError::InvalidTimestamp(err.to_string())
    }
}

/// A JSON body carrying a single message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(error = %self, "Unhandled error while serving request");
            "Internal Server Error".to_string()
        } else {
            debug!(status = status.as_u16(), "{}", self);
            self.to_string()
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}
