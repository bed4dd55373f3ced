use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Environment configuration failures, raised while assembling the server
/// config at startup (`DATABASE_URL`, `HOST`, `PORT`). Fatal: `main` prints
/// the message and exits before binding anything.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The variable is not set at all.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// The variable is set but does not parse, a non-numeric `PORT` for
    /// example.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
