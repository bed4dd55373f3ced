use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Compliance tier for an actor's SLA rollup. Boundaries are inclusive on
/// the lower bound of each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceTier {
    Excelente,
    Bueno,
    Regular,
    Critico,
}

impl ComplianceTier {
    pub fn from_pct(pct: f64) -> Self {
        if pct >= 90.0 {
            ComplianceTier::Excelente
        } else if pct >= 75.0 {
            ComplianceTier::Bueno
        } else if pct >= 50.0 {
            ComplianceTier::Regular
        } else {
            ComplianceTier::Critico
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlaEvaluationDto {
    pub codigo: String,
    pub nombre: String,
    pub valor: f64,
    pub umbral: f64,
    pub comparador: String,
    pub cumplio: bool,
    pub penalidad_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActorComplianceReportDto {
    pub ref_table: String,
    pub ref_id: i32,
    pub tipo: String,
    pub nombre: String,
    pub slas: Vec<SlaEvaluationDto>,
    pub total_mediciones: u32,
    pub cumplidos: u32,
    pub pct_cumplimiento: f64,
    pub estado: ComplianceTier,
    pub penalidades_totales: f64,
}

/// Cross-actor rollup: per-tier counts plus the fleet-wide average.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComplianceSummaryDto {
    pub total_actores: u32,
    pub excelente: u32,
    pub bueno: u32,
    pub regular: u32,
    pub critico: u32,
    pub promedio_cumplimiento: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComplianceResponseDto {
    pub desde: NaiveDate,
    pub hasta: NaiveDate,
    pub reports: Vec<ActorComplianceReportDto>,
    pub summary: ComplianceSummaryDto,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordMeasuresRequestDto {
    pub periodo: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecordMeasuresResponseDto {
    pub periodo: NaiveDate,
    pub measures_inserted: usize,
}
