use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ErrorDto, RangeQueryDto},
        sla::{ComplianceResponseDto, RecordMeasuresRequestDto, RecordMeasuresResponseDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{setting::SettingsService, sla::compliance::SlaComplianceService},
        util::time::parse_period,
    },
};

pub static SLA_TAG: &str = "sla";

/// Evaluate SLA compliance per actor over a date range
#[utoipa::path(
    get,
    path = "/api/sla/compliance",
    tag = SLA_TAG,
    params(RangeQueryDto),
    responses(
        (status = 200, description = "Per-actor compliance reports with fleet summary", body = ComplianceResponseDto),
        (status = 400, description = "Invalid period range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn compliance(
    State(state): State<AppState>,
    Query(query): Query<RangeQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let desde = parse_period(&query.from)?;
    let hasta = parse_period(&query.to)?;

    let settings_service = SettingsService::new(&state.db, &state.settings);
    let compliance_service = SlaComplianceService::new(&state.db, &settings_service);

    let response = compliance_service.evaluate_actors(desde, hasta).await?;

    Ok((StatusCode::OK, axum::Json(response)).into_response())
}

/// Persist SLA measures for one day
#[utoipa::path(
    post,
    path = "/api/sla/record",
    tag = SLA_TAG,
    request_body = RecordMeasuresRequestDto,
    responses(
        (status = 200, description = "Count of measures inserted", body = RecordMeasuresResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record(
    State(state): State<AppState>,
    axum::Json(request): axum::Json<RecordMeasuresRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let settings_service = SettingsService::new(&state.db, &state.settings);
    let compliance_service = SlaComplianceService::new(&state.db, &settings_service);

    let measures_inserted = compliance_service.record_period(request.periodo).await?;

    Ok((
        StatusCode::OK,
        axum::Json(RecordMeasuresResponseDto {
            periodo: request.periodo,
            measures_inserted,
        }),
    )
        .into_response())
}
