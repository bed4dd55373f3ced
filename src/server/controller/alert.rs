use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        alert::ActiveAlertsDto,
        api::{AlertQueryDto, ErrorDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{
            alert::{EarlyWarningService, ThresholdOverrides},
            setting::SettingsService,
        },
        util::time::{parse_period, SystemClock},
    },
};

pub static ALERT_TAG: &str = "alert";

/// Scan for active early-warning alerts over a date range
#[utoipa::path(
    get,
    path = "/api/alert/active",
    tag = ALERT_TAG,
    params(AlertQueryDto),
    responses(
        (status = 200, description = "Active alerts with overall status", body = ActiveAlertsDto),
        (status = 400, description = "Invalid period range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn active(
    State(state): State<AppState>,
    Query(query): Query<AlertQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let desde = parse_period(&query.from)?;
    let hasta = parse_period(&query.to)?;

    let overrides = ThresholdOverrides {
        berth_utilization: query.berth_utilization,
        truck_waiting_time: query.truck_waiting,
    };

    let settings_service = SettingsService::new(&state.db, &state.settings);
    let clock = SystemClock;
    let alert_service = EarlyWarningService::new(&state.db, &settings_service, &clock);

    let alerts = alert_service.detect_alerts(desde, hasta, overrides).await?;

    Ok((StatusCode::OK, axum::Json(alerts)).into_response())
}
