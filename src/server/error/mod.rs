//! Error types for the Muelle server application.
//!
//! Per-domain error enums (configuration, KPI) are aggregated into a single
//! `Error` via `thiserror`'s transparent variants. All errors implement
//! `IntoResponse` for Axum; anything without a specific mapping falls back
//! to a logged 500 with a generic body.

pub mod config;
pub mod kpi;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, kpi::KpiError},
};

/// Main error type for the Muelle server application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// KPI domain error (invalid period argument).
    #[error(transparent)]
    KpiError(#[from] KpiError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint
    /// violations). A failure inside the aggregator's transaction surfaces
    /// here after the rollback has been applied.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::KpiError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a logged 500 response
/// with a generic body, so internal details never leak to API consumers.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
