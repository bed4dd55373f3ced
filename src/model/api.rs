use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Date range query shared by the read endpoints. Dates are `YYYY-MM-DD`;
/// the range is half-open and `from` must precede `to`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct RangeQueryDto {
    pub from: String,
    pub to: String,
}

/// Alert scan query: date range plus optional threshold overrides that
/// take precedence over stored settings for this request only.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AlertQueryDto {
    pub from: String,
    pub to: String,
    pub berth_utilization: Option<f64>,
    pub truck_waiting: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SettingDto {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpsertSettingDto {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
}
