//! KPI computation: the batch aggregator and the live panel comparator.
//!
//! Both consumers share one range computation per KPI; they differ only in
//! window (single day vs arbitrary range), comparison baseline, and output
//! shape.

pub mod aggregator;
pub mod panel;

use chrono::NaiveDateTime;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::json;

use crate::server::{
    data::{
        appointment::AppointmentRepository, customs_procedure::CustomsProcedureRepository,
        vessel_call::VesselCallRepository,
    },
    model::kpi::KpiCode,
    service::metric,
};

/// A computed KPI value plus its audit detail, already rounded.
#[derive(Debug, Clone)]
pub struct KpiComputation {
    pub valor: f64,
    pub extra: serde_json::Value,
}

/// Computes one KPI over `[from, to)`, or `None` when the range has no
/// qualifying entities (explicit no-data, never a stored zero).
pub async fn compute_kpi_over_range(
    db: &DatabaseConnection,
    code: KpiCode,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Result<Option<KpiComputation>, DbErr> {
    match code {
        KpiCode::TurnaroundH => {
            let calls = VesselCallRepository::new(db)
                .find_departed_in_range(from, to)
                .await?;
            let hours: Vec<f64> = calls.iter().filter_map(metric::turnaround_hours).collect();

            Ok(sample_computation(&hours))
        }
        KpiCode::EsperaCamionH => {
            let citas = AppointmentRepository::new(db)
                .find_attended_in_range(from, to)
                .await?;
            let hours: Vec<f64> = citas.iter().filter_map(metric::waiting_time_hours).collect();

            Ok(sample_computation(&hours))
        }
        KpiCode::CumplCitasPct => {
            let citas = AppointmentRepository::new(db)
                .find_scheduled_in_range(from, to)
                .await?;
            if citas.is_empty() {
                return Ok(None);
            }

            let mut a_tiempo = 0usize;
            let mut tarde = 0usize;
            let mut sin_llegada = 0usize;
            for cita in &citas {
                match metric::classify_appointment(cita) {
                    Some((metric::PunctualityClass::ATiempo, _)) => a_tiempo += 1,
                    Some((metric::PunctualityClass::Tarde, _)) => tarde += 1,
                    None => sin_llegada += 1,
                }
            }

            Ok(Some(KpiComputation {
                valor: metric::round4(metric::percentage(a_tiempo, citas.len())),
                extra: json!({
                    "total": citas.len(),
                    "a_tiempo": a_tiempo,
                    "tarde": tarde,
                    "sin_llegada": sin_llegada,
                }),
            }))
        }
        KpiCode::TramitesOkPct => {
            let tramites = CustomsProcedureRepository::new(db)
                .find_finished_in_range(from, to)
                .await?;
            if tramites.is_empty() {
                return Ok(None);
            }

            let aprobados = tramites
                .iter()
                .filter(|t| t.estado == entity::customs_procedure::TramiteEstado::Aprobado)
                .count();

            Ok(Some(KpiComputation {
                valor: metric::round4(metric::percentage(aprobados, tramites.len())),
                extra: json!({
                    "total": tramites.len(),
                    "aprobados": aprobados,
                }),
            }))
        }
    }
}

/// Mean/min/max/count computation for elapsed-hours KPIs; `None` on an
/// empty sample.
fn sample_computation(hours: &[f64]) -> Option<KpiComputation> {
    let valor = metric::round4(metric::mean(hours)?);
    let min = hours.iter().copied().fold(f64::INFINITY, f64::min);
    let max = hours.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(KpiComputation {
        valor,
        extra: json!({
            "count": hours.len(),
            "min": metric::round4(min),
            "max": metric::round4(max),
        }),
    })
}
