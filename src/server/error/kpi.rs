use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum KpiError {
    /// Unparseable or inverted period argument. Fatal to the single call,
    /// no state change. A missing catalog entry is not an error at this
    /// level; the aggregator skips the KPI and warns.
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
}

impl IntoResponse for KpiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
