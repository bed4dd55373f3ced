use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of one KPI within a batch recompute.
///
/// "No data" and "missing definition" are deliberate non-error outcomes:
/// a period with zero qualifying entities is skipped (never stored as a
/// zero), and a missing catalog entry skips that KPI with a warning while
/// the rest proceed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum KpiOutcome {
    Computed { valor: f64 },
    SkippedNoData,
    SkippedMissingDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct KpiOutcomeDto {
    pub codigo: String,
    #[serde(flatten)]
    pub outcome: KpiOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecomputeStatus {
    Computed,
    AlreadyComputed,
}

/// Structured result of a batch recompute; never a bare boolean.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecomputeSummaryDto {
    pub periodo: NaiveDate,
    pub status: RecomputeStatus,
    pub kpis: Vec<KpiOutcomeDto>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecomputeRequestDto {
    pub periodo: NaiveDate,
    #[serde(default)]
    pub force: bool,
}

/// One KPI's current-versus-previous-period comparison.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KpiComparisonDto {
    pub codigo: String,
    pub nombre: String,
    /// Null when the current range has no qualifying data (distinct from
    /// a true zero).
    pub valor_actual: Option<f64>,
    pub valor_anterior: Option<f64>,
    pub diferencia: f64,
    pub pct_cambio: f64,
    pub tendencia: String,
    pub tendencia_positiva: bool,
    pub meta: f64,
    pub cumple_meta: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PanelSnapshotDto {
    pub desde: NaiveDate,
    pub hasta: NaiveDate,
    pub kpis: Vec<KpiComparisonDto>,
    pub generado_en: NaiveDateTime,
}
