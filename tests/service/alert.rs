//! Tests for EarlyWarningService::detect_alerts
//!
//! These tests verify the detector including:
//! - VERDE suppression (readings within threshold emit nothing)
//! - AMARILLO and ROJO grading bands
//! - Open berth calls clamped to the scan range
//! - Truck accumulation detail (affected appointments, yard balance)
//! - Per-request threshold overrides

use entity::appointment::AppointmentEstado;
use entity::gate_event::GateAccion;
use muelle::model::alert::{AlertLevel, AlertTipo};
use muelle::server::{
    service::{
        alert::{EarlyWarningService, ThresholdOverrides},
        setting::{SettingsCache, SettingsService},
    },
    util::time::FixedClock,
};
use muelle_test_utils::{factory, TestBuilder};

#[tokio::test]
async fn utilization_within_threshold_emits_no_alert() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_setting_table()
        .build()
        .await
        .unwrap();

    let berth = factory::insert_berth(&test.db, "Amarre 1").await.unwrap();
    // Occupied 20 of 24 hours: 83.33% against the default 85% threshold.
    factory::insert_vessel_call(
        &test.db,
        Some(berth.id),
        Some(factory::dt(2024, 6, 1, 1, 0)),
        Some(factory::dt(2024, 6, 1, 2, 0)),
        Some(factory::dt(2024, 6, 1, 22, 0)),
    )
    .await
    .unwrap();

    let cache = SettingsCache::new();
    let settings = SettingsService::new(&test.db, &cache);
    let clock = FixedClock(factory::dt(2024, 6, 2, 8, 0));
    let detector = EarlyWarningService::new(&test.db, &settings, &clock);

    let result = detector
        .detect_alerts(
            factory::d(2024, 6, 1),
            factory::d(2024, 6, 2),
            ThresholdOverrides::default(),
        )
        .await
        .unwrap();

    assert_eq!(result.estado_general, AlertLevel::Verde);
    assert!(result.alerts.is_empty());
}

#[tokio::test]
async fn open_call_clamps_to_range_end_and_grades_amarillo() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_setting_table()
        .build()
        .await
        .unwrap();

    let berth = factory::insert_berth(&test.db, "Amarre 1").await.unwrap();
    // Berthed before the range, still alongside: fully occupies the day.
    factory::insert_vessel_call(
        &test.db,
        Some(berth.id),
        Some(factory::dt(2024, 5, 30, 8, 0)),
        Some(factory::dt(2024, 5, 30, 10, 0)),
        None,
    )
    .await
    .unwrap();

    let cache = SettingsCache::new();
    let settings = SettingsService::new(&test.db, &cache);
    let clock = FixedClock(factory::dt(2024, 6, 2, 8, 0));
    let detector = EarlyWarningService::new(&test.db, &settings, &clock);

    let result = detector
        .detect_alerts(
            factory::d(2024, 6, 1),
            factory::d(2024, 6, 2),
            ThresholdOverrides::default(),
        )
        .await
        .unwrap();

    // 100% is above 85% but within 1.5x (127.5%).
    assert_eq!(result.estado_general, AlertLevel::Amarillo);
    assert_eq!(result.alerts.len(), 1);

    let alert = &result.alerts[0];
    assert_eq!(alert.tipo, AlertTipo::CongestionMuelle);
    assert_eq!(alert.nivel, AlertLevel::Amarillo);
    assert_eq!(alert.referencia.as_deref(), Some("Amarre 1"));
    assert_eq!(alert.valor, 100.0);
    assert_eq!(alert.umbral, 85.0);
    assert_eq!(alert.detectado_en, factory::dt(2024, 6, 2, 8, 0));
    assert!(!alert.acciones_recomendadas.is_empty());
}

#[tokio::test]
async fn truck_accumulation_grades_rojo_with_yard_detail() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_setting_table()
        .build()
        .await
        .unwrap();

    let company = factory::insert_company(&test.db, "Transportes Sur")
        .await
        .unwrap();
    // Two attended appointments waiting 7h each: above 1.5x the 4h
    // threshold.
    for hour in [8, 10] {
        factory::insert_appointment(
            &test.db,
            company.id,
            factory::dt(2024, 6, 1, hour, 0),
            Some(factory::dt(2024, 6, 1, hour + 7, 0)),
            AppointmentEstado::Atendida,
        )
        .await
        .unwrap();
    }
    for (placa, accion, hour) in [
        ("ABC-101", GateAccion::Entrada, 8),
        ("ABC-102", GateAccion::Entrada, 9),
        ("ABC-103", GateAccion::Entrada, 10),
        ("ABC-101", GateAccion::Salida, 16),
    ] {
        factory::insert_gate_event(&test.db, placa, accion, factory::dt(2024, 6, 1, hour, 0))
            .await
            .unwrap();
    }

    let cache = SettingsCache::new();
    let settings = SettingsService::new(&test.db, &cache);
    let clock = FixedClock(factory::dt(2024, 6, 2, 8, 0));
    let detector = EarlyWarningService::new(&test.db, &settings, &clock);

    let result = detector
        .detect_alerts(
            factory::d(2024, 6, 1),
            factory::d(2024, 6, 2),
            ThresholdOverrides::default(),
        )
        .await
        .unwrap();

    assert_eq!(result.estado_general, AlertLevel::Rojo);
    assert_eq!(result.alerts.len(), 1);

    let alert = &result.alerts[0];
    assert_eq!(alert.tipo, AlertTipo::AcumulacionCamiones);
    assert_eq!(alert.nivel, AlertLevel::Rojo);
    assert_eq!(alert.valor, 7.0);
    assert_eq!(alert.umbral, 4.0);
    assert_eq!(alert.citas_afectadas, Some(2));
    assert_eq!(alert.camiones_en_patio, Some(2));
}

#[tokio::test]
async fn query_overrides_take_precedence_over_settings() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_setting_table()
        .build()
        .await
        .unwrap();

    let company = factory::insert_company(&test.db, "Transportes Sur")
        .await
        .unwrap();
    factory::insert_appointment(
        &test.db,
        company.id,
        factory::dt(2024, 6, 1, 8, 0),
        Some(factory::dt(2024, 6, 1, 15, 0)),
        AppointmentEstado::Atendida,
    )
    .await
    .unwrap();

    let cache = SettingsCache::new();
    let settings = SettingsService::new(&test.db, &cache);
    let clock = FixedClock(factory::dt(2024, 6, 2, 8, 0));
    let detector = EarlyWarningService::new(&test.db, &settings, &clock);

    // 7h wait trips the default 4h threshold, but not an override of 10h.
    let result = detector
        .detect_alerts(
            factory::d(2024, 6, 1),
            factory::d(2024, 6, 2),
            ThresholdOverrides {
                truck_waiting_time: Some(10.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(result.estado_general, AlertLevel::Verde);
    assert!(result.alerts.is_empty());
}
