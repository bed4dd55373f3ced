//! Metric primitives: pure, stateless calculations over entity snapshots.
//!
//! No I/O and no side effects. Missing timestamps yield `None` (skip, not
//! zero) so aggregation boundaries can filter silently; negative elapsed
//! times are passed through unmodified since they flag data-entry problems
//! that callers must surface, not hide.

use crate::server::util::time::elapsed_hours;

/// Arrival within this many seconds of the scheduled slot counts as on
/// time (±15 minutes).
const ON_TIME_TOLERANCE_SECS: i64 = 15 * 60;

/// Punctuality classification of an attended appointment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PunctualityClass {
    ATiempo,
    Tarde,
}

/// Elapsed hours a vessel occupied port resources, arrival to departure.
/// `None` unless both `ata` and `atd` are present; no clamping.
pub fn turnaround_hours(call: &entity::vessel_call::Model) -> Option<f64> {
    Some(elapsed_hours(call.ata?, call.atd?))
}

/// Elapsed hours between an appointment's scheduled slot and its arrival,
/// sign preserved: an early arrival yields a negative value. Consumers
/// needing an "excessive wait" reading must pick one of the named
/// variants below; that choice is per-consumer, not baked in here.
pub fn waiting_time_hours(cita: &entity::appointment::Model) -> Option<f64> {
    Some(elapsed_hours(cita.hora_programada, cita.hora_llegada?))
}

/// Waiting time floored at zero: an early arrival is not time spent
/// waiting.
pub fn waiting_time_excess_hours(cita: &entity::appointment::Model) -> Option<f64> {
    waiting_time_hours(cita).map(|h| h.max(0.0))
}

/// Absolute deviation from the scheduled slot, in hours.
pub fn waiting_time_magnitude_hours(cita: &entity::appointment::Model) -> Option<f64> {
    waiting_time_hours(cita).map(f64::abs)
}

/// Classifies an appointment's punctuality and reports the raw deviation
/// in minutes (negative = early). Unclassifiable without an arrival.
pub fn classify_appointment(
    cita: &entity::appointment::Model,
) -> Option<(PunctualityClass, i64)> {
    let llegada = cita.hora_llegada?;
    let deviation = llegada - cita.hora_programada;

    let class = if deviation.num_seconds().abs() <= ON_TIME_TOLERANCE_SECS {
        PunctualityClass::ATiempo
    } else {
        PunctualityClass::Tarde
    };

    Some((class, deviation.num_minutes()))
}

/// Elapsed hours of a customs procedure, start to finish.
pub fn customs_cycle_hours(tramite: &entity::customs_procedure::Model) -> Option<f64> {
    Some(elapsed_hours(tramite.fecha_inicio, tramite.fecha_fin?))
}

/// Mean of a sample; `None` on an empty sample. Consumers must branch on
/// the no-data case before treating an aggregate as a value.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Percentage on a 0-100 scale; 0.0 on a zero denominator, never NaN.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    part as f64 * 100.0 / total as f64
}

/// Rounds to the 4 decimal places every persisted `valor` carries.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
