//! Tests for KpiPanelService::compare_panel_period
//!
//! These tests verify the live panel comparison including:
//! - Previous-period window derivation (equal length, immediately before)
//! - Fresh computation from operational data (no persisted snapshots used)
//! - Deterministic generation timestamp via the injected clock
//! - Range validation

use muelle::server::{
    error::{kpi::KpiError, Error},
    service::kpi::panel::KpiPanelService,
    util::time::FixedClock,
};
use muelle_test_utils::{factory, TestBuilder};

#[tokio::test]
async fn panel_compares_against_the_preceding_window_of_equal_length() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .build()
        .await
        .unwrap();

    // Previous window [2024-06-01, 2024-06-08): one 40h turnaround.
    factory::insert_vessel_call(
        &test.db,
        None,
        Some(factory::dt(2024, 6, 1, 8, 0)),
        Some(factory::dt(2024, 6, 1, 10, 0)),
        Some(factory::dt(2024, 6, 3, 0, 0)),
    )
    .await
    .unwrap();
    // Current window [2024-06-08, 2024-06-15): one 50h turnaround.
    factory::insert_vessel_call(
        &test.db,
        None,
        Some(factory::dt(2024, 6, 8, 6, 0)),
        Some(factory::dt(2024, 6, 8, 8, 0)),
        Some(factory::dt(2024, 6, 10, 8, 0)),
    )
    .await
    .unwrap();

    let clock = FixedClock(factory::dt(2024, 6, 15, 12, 0));
    let panel_service = KpiPanelService::new(&test.db, &clock);

    let snapshot = panel_service
        .compare_panel_period(factory::d(2024, 6, 8), factory::d(2024, 6, 15))
        .await
        .unwrap();

    assert_eq!(snapshot.generado_en, factory::dt(2024, 6, 15, 12, 0));
    assert_eq!(snapshot.kpis.len(), 4);

    let turnaround = snapshot
        .kpis
        .iter()
        .find(|k| k.codigo == "turnaround_h")
        .unwrap();
    assert_eq!(turnaround.valor_actual, Some(50.0));
    assert_eq!(turnaround.valor_anterior, Some(40.0));
    assert_eq!(turnaround.diferencia, 10.0);
    assert_eq!(turnaround.pct_cambio, 25.0);
    assert_eq!(turnaround.tendencia, "↑");
    // Turnaround improves downward; 50h is adverse and misses the 48h goal.
    assert!(!turnaround.tendencia_positiva);
    assert!(!turnaround.cumple_meta);

    // KPIs without data in either window stay null, not zero.
    let tramites = snapshot
        .kpis
        .iter()
        .find(|k| k.codigo == "tramites_ok_pct")
        .unwrap();
    assert_eq!(tramites.valor_actual, None);
    assert_eq!(tramites.valor_anterior, None);
}

#[tokio::test]
async fn inverted_range_is_rejected() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .build()
        .await
        .unwrap();

    let clock = FixedClock(factory::dt(2024, 6, 15, 12, 0));
    let panel_service = KpiPanelService::new(&test.db, &clock);

    let result = panel_service
        .compare_panel_period(factory::d(2024, 6, 15), factory::d(2024, 6, 8))
        .await;

    assert!(matches!(
        result,
        Err(Error::KpiError(KpiError::InvalidPeriod(_)))
    ));
}
