use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ErrorDto, RangeQueryDto},
        kpi::{PanelSnapshotDto, RecomputeRequestDto, RecomputeSummaryDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::kpi::{aggregator::KpiAggregatorService, panel::KpiPanelService},
        util::time::{parse_period, SystemClock},
    },
};

pub static KPI_TAG: &str = "kpi";

/// Recompute and persist the day's KPI snapshots
#[utoipa::path(
    post,
    path = "/api/kpi/recompute",
    tag = KPI_TAG,
    request_body = RecomputeRequestDto,
    responses(
        (status = 200, description = "Recompute summary, including skips and warnings", body = RecomputeSummaryDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recompute(
    State(state): State<AppState>,
    axum::Json(request): axum::Json<RecomputeRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let aggregator = KpiAggregatorService::new(&state.db);

    let summary = aggregator.recompute(request.periodo, request.force).await?;

    Ok((StatusCode::OK, axum::Json(summary)).into_response())
}

/// Compare the range's KPIs against the previous period of equal length
#[utoipa::path(
    get,
    path = "/api/kpi/panel",
    tag = KPI_TAG,
    params(RangeQueryDto),
    responses(
        (status = 200, description = "Panel snapshot with per-KPI trends", body = PanelSnapshotDto),
        (status = 400, description = "Invalid period range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn panel(
    State(state): State<AppState>,
    Query(query): Query<RangeQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let desde = parse_period(&query.from)?;
    let hasta = parse_period(&query.to)?;

    let clock = SystemClock;
    let panel_service = KpiPanelService::new(&state.db, &clock);

    let snapshot = panel_service.compare_panel_period(desde, hasta).await?;

    Ok((StatusCode::OK, axum::Json(snapshot)).into_response())
}
