//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/kpi/recompute` - Recompute and persist a day's KPI snapshots
/// - `GET /api/kpi/panel` - Compare KPIs against the previous period
/// - `GET /api/sla/compliance` - Per-actor SLA compliance over a range
/// - `POST /api/sla/record` - Persist SLA measures for one day
/// - `GET /api/alert/active` - Scan for active early-warning alerts
/// - `GET /api/setting/{key}` - Read a setting
/// - `PUT /api/setting` - Create or update a setting
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and the
/// interactive Swagger UI at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Muelle", description = "Muelle port KPI/SLA API"), tags(
        (name = controller::kpi::KPI_TAG, description = "KPI aggregation and panel routes"),
        (name = controller::sla::SLA_TAG, description = "SLA compliance routes"),
        (name = controller::alert::ALERT_TAG, description = "Early-warning alert routes"),
        (name = controller::setting::SETTING_TAG, description = "Settings routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::kpi::recompute))
        .routes(routes!(controller::kpi::panel))
        .routes(routes!(controller::sla::compliance))
        .routes(routes!(controller::sla::record))
        .routes(routes!(controller::alert::active))
        .routes(routes!(controller::setting::get_setting))
        .routes(routes!(controller::setting::upsert_setting))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
