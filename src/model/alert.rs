use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Alert severity. Ordering follows escalation: VERDE < AMARILLO < ROJO,
/// so the overall system status is simply the maximum across alerts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertLevel {
    Verde,
    Amarillo,
    Rojo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertTipo {
    CongestionMuelle,
    AcumulacionCamiones,
}

/// One graded early-warning alert. Ephemeral: computed per request and
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertDto {
    pub tipo: AlertTipo,
    pub nivel: AlertLevel,
    /// Berth name for congestion alerts; absent for terminal-wide alerts.
    pub referencia: Option<String>,
    pub valor: f64,
    pub umbral: f64,
    pub unidad: String,
    pub descripcion: String,
    pub acciones_recomendadas: Vec<String>,
    /// Truck accumulation only: appointments whose wait exceeds the
    /// threshold.
    pub citas_afectadas: Option<u64>,
    /// Truck accumulation only: gate-event balance (entries minus exits)
    /// within the range.
    pub camiones_en_patio: Option<i64>,
    pub detectado_en: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActiveAlertsDto {
    pub desde: NaiveDate,
    pub hasta: NaiveDate,
    pub estado_general: AlertLevel,
    pub alerts: Vec<AlertDto>,
}
