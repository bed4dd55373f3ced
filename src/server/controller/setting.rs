use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::api::{ErrorDto, SettingDto, UpsertSettingDto},
    server::{error::Error, model::app::AppState, service::setting::SettingsService},
};

pub static SETTING_TAG: &str = "setting";

/// Get a setting by key
#[utoipa::path(
    get,
    path = "/api/setting/{key}",
    tag = SETTING_TAG,
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 200, description = "Setting value", body = SettingDto),
        (status = 404, description = "Setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let settings_service = SettingsService::new(&state.db, &state.settings);

    let model = settings_service.get_detail(&key).await?;

    let model = if let Some(model) = model {
        model
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: format!("Setting {:?} not found", key),
            }),
        )
            .into_response());
    };

    Ok((
        StatusCode::OK,
        axum::Json(SettingDto {
            key: model.key,
            value: model.value,
            description: model.description,
        }),
    )
        .into_response())
}

/// Create or update a setting
#[utoipa::path(
    put,
    path = "/api/setting",
    tag = SETTING_TAG,
    request_body = UpsertSettingDto,
    responses(
        (status = 200, description = "Stored setting", body = SettingDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_setting(
    State(state): State<AppState>,
    axum::Json(request): axum::Json<UpsertSettingDto>,
) -> Result<impl IntoResponse, Error> {
    let settings_service = SettingsService::new(&state.db, &state.settings);

    let model = settings_service
        .set(&request.key, &request.value, request.description)
        .await?;

    Ok((
        StatusCode::OK,
        axum::Json(SettingDto {
            key: model.key,
            value: model.value,
            description: model.description,
        }),
    )
        .into_response())
}
