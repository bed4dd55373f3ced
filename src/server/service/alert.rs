//! Early-warning detector: live scan of operational data against
//! configurable thresholds.
//!
//! Alerts are ephemeral. Every scan recomputes from the operational tables;
//! nothing is persisted and a VERDE reading is suppressed entirely.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::alert::{ActiveAlertsDto, AlertDto, AlertLevel, AlertTipo},
    server::{
        data::{
            appointment::AppointmentRepository, berth::BerthRepository,
            gate_event::GateEventRepository, vessel_call::VesselCallRepository,
        },
        error::Error,
        service::{
            metric,
            setting::{AlertThresholds, SettingsService},
        },
        util::time::{elapsed_hours, overlap_hours, range_bounds, validate_range, Clock},
    },
};

const BERTH_CONGESTION_ACTIONS: &[&str] = &[
    "Revisar la programación de atraques del día",
    "Evaluar reasignación de naves a amarres con holgura",
    "Coordinar con operaciones la extensión de turnos de muelle",
];

const TRUCK_ACCUMULATION_ACTIONS: &[&str] = &[
    "Habilitar ventanillas adicionales en puerta",
    "Reprogramar citas hacia franjas de menor demanda",
    "Notificar a las empresas de transporte con citas próximas",
];

/// Per-request threshold overrides; query parameters beat stored settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdOverrides {
    pub berth_utilization: Option<f64>,
    pub truck_waiting_time: Option<f64>,
}

pub struct EarlyWarningService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a SettingsService<'a>,
    clock: &'a dyn Clock,
}

impl<'a> EarlyWarningService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        settings: &'a SettingsService<'a>,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            db,
            settings,
            clock,
        }
    }

    /// Scans `[desde, hasta)` for berth congestion and truck accumulation.
    /// Only AMARILLO and ROJO readings become alerts; the overall status is
    /// the worst level found, VERDE when the list is empty.
    pub async fn detect_alerts(
        &self,
        desde: NaiveDate,
        hasta: NaiveDate,
        overrides: ThresholdOverrides,
    ) -> Result<ActiveAlertsDto, Error> {
        validate_range(desde, hasta)?;
        let (from, to) = range_bounds(desde, hasta);

        let mut thresholds = AlertThresholds::load(self.settings).await?;
        if let Some(pct) = overrides.berth_utilization {
            thresholds.berth_utilization = pct;
        }
        if let Some(hours) = overrides.truck_waiting_time {
            thresholds.truck_waiting_time = hours;
        }

        let detectado_en = self.clock.now();
        let mut alerts = Vec::new();

        // Berth congestion: occupied hours over available hours, per berth.
        let available_hours = elapsed_hours(from, to);
        let berths = BerthRepository::new(self.db).find_active().await?;
        let berthed = VesselCallRepository::new(self.db)
            .find_berthed_in_range(from, to)
            .await?;

        let mut occupied_by_berth: HashMap<i32, f64> = HashMap::new();
        for call in &berthed {
            let (Some(berth_id), Some(atb)) = (call.berth_id, call.atb) else {
                continue;
            };
            // An open call occupies the berth through the range end.
            let atd = call.atd.unwrap_or(to);
            *occupied_by_berth.entry(berth_id).or_insert(0.0) +=
                overlap_hours(atb, atd, from, to);
        }

        for berth in &berths {
            if available_hours <= 0.0 {
                continue;
            }
            let occupied = occupied_by_berth.get(&berth.id).copied().unwrap_or(0.0);
            let utilizacion = metric::round4(occupied * 100.0 / available_hours);
            let nivel = grade(utilizacion, thresholds.berth_utilization);
            if nivel == AlertLevel::Verde {
                continue;
            }

            alerts.push(AlertDto {
                tipo: AlertTipo::CongestionMuelle,
                nivel,
                referencia: Some(berth.nombre.clone()),
                valor: utilizacion,
                umbral: thresholds.berth_utilization,
                unidad: "%".to_string(),
                descripcion: format!(
                    "Utilización del amarre {} en {:.2}% frente al umbral de {:.2}%",
                    berth.nombre, utilizacion, thresholds.berth_utilization
                ),
                acciones_recomendadas: actions(BERTH_CONGESTION_ACTIONS),
                citas_afectadas: None,
                camiones_en_patio: None,
                detectado_en,
            });
        }

        // Truck accumulation: mean excess wait of attended appointments.
        let attended = AppointmentRepository::new(self.db)
            .find_attended_in_range(from, to)
            .await?;
        let waits: Vec<f64> = attended
            .iter()
            .filter_map(metric::waiting_time_excess_hours)
            .collect();

        if let Some(media) = metric::mean(&waits) {
            let media = metric::round4(media);
            let nivel = grade(media, thresholds.truck_waiting_time);
            if nivel != AlertLevel::Verde {
                let citas_afectadas = waits
                    .iter()
                    .filter(|w| **w > thresholds.truck_waiting_time)
                    .count() as u64;

                let events = GateEventRepository::new(self.db)
                    .find_in_range(from, to)
                    .await?;
                let camiones_en_patio = events
                    .iter()
                    .map(|e| match e.accion {
                        entity::gate_event::GateAccion::Entrada => 1i64,
                        entity::gate_event::GateAccion::Salida => -1i64,
                    })
                    .sum();

                alerts.push(AlertDto {
                    tipo: AlertTipo::AcumulacionCamiones,
                    nivel,
                    referencia: None,
                    valor: media,
                    umbral: thresholds.truck_waiting_time,
                    unidad: "h".to_string(),
                    descripcion: format!(
                        "Espera media de camiones de {:.2} h frente al umbral de {:.2} h",
                        media, thresholds.truck_waiting_time
                    ),
                    acciones_recomendadas: actions(TRUCK_ACCUMULATION_ACTIONS),
                    citas_afectadas: Some(citas_afectadas),
                    camiones_en_patio: Some(camiones_en_patio),
                    detectado_en,
                });
            }
        }

        let estado_general = alerts
            .iter()
            .map(|a| a.nivel)
            .max()
            .unwrap_or(AlertLevel::Verde);

        Ok(ActiveAlertsDto {
            desde,
            hasta,
            estado_general,
            alerts,
        })
    }
}

/// Grades a measured value against its threshold: within the threshold is
/// VERDE, up to 1.5x the threshold is AMARILLO, beyond that ROJO.
pub fn grade(valor: f64, umbral: f64) -> AlertLevel {
    if valor <= umbral {
        AlertLevel::Verde
    } else if valor <= umbral * 1.5 {
        AlertLevel::Amarillo
    } else {
        AlertLevel::Rojo
    }
}

fn actions(actions: &[&str]) -> Vec<String> {
    actions.iter().map(|a| a.to_string()).collect()
}
