//! Tests for SlaComplianceService
//!
//! These tests verify the compliance engine including:
//! - Per-actor evaluation against the seeded SLA catalog
//! - Tier rollups and the fleet summary
//! - Penalty accrual on failed SLAs from the settings store
//! - Measure persistence with lazy actor creation

use entity::appointment::AppointmentEstado;
use entity::customs_procedure::TramiteEstado;
use muelle::model::sla::ComplianceTier;
use muelle::server::service::{
    setting::{SettingsCache, SettingsService},
    sla::compliance::SlaComplianceService,
};
use muelle_test_utils::{factory, TestBuilder};
use sea_orm::EntityTrait;

#[tokio::test]
async fn transport_company_rollup_accrues_penalties_on_failed_slas() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_sla_tables()
        .with_setting_table()
        .build()
        .await
        .unwrap();

    let cache = SettingsCache::new();
    let settings = SettingsService::new(&test.db, &cache);
    settings
        .set("penalidad_sla_puntualidad_citas_pct", "5", None)
        .await
        .unwrap();

    let company = factory::insert_company(&test.db, "Transportes Sur")
        .await
        .unwrap();
    // Two attended appointments, 1h and 2h late: mean wait 1.5h passes
    // the 3h SLA, punctuality 0% fails the 80% SLA.
    factory::insert_appointment(
        &test.db,
        company.id,
        factory::dt(2024, 6, 1, 8, 0),
        Some(factory::dt(2024, 6, 1, 9, 0)),
        AppointmentEstado::Atendida,
    )
    .await
    .unwrap();
    factory::insert_appointment(
        &test.db,
        company.id,
        factory::dt(2024, 6, 1, 10, 0),
        Some(factory::dt(2024, 6, 1, 12, 0)),
        AppointmentEstado::Atendida,
    )
    .await
    .unwrap();

    let compliance = SlaComplianceService::new(&test.db, &settings);
    let response = compliance
        .evaluate_actors(factory::d(2024, 6, 1), factory::d(2024, 6, 2))
        .await
        .unwrap();

    assert_eq!(response.reports.len(), 1);
    let report = &response.reports[0];
    assert_eq!(report.ref_table, "company");
    assert_eq!(report.ref_id, company.id);
    assert_eq!(report.nombre, "Transportes Sur");
    assert_eq!(report.total_mediciones, 2);
    assert_eq!(report.cumplidos, 1);
    assert_eq!(report.pct_cumplimiento, 50.0);
    assert_eq!(report.estado, ComplianceTier::Regular);
    assert_eq!(report.penalidades_totales, 5.0);

    let espera = report
        .slas
        .iter()
        .find(|s| s.codigo == "sla_espera_camion")
        .unwrap();
    assert_eq!(espera.valor, 1.5);
    assert!(espera.cumplio);

    let puntualidad = report
        .slas
        .iter()
        .find(|s| s.codigo == "sla_puntualidad_citas")
        .unwrap();
    assert_eq!(puntualidad.valor, 0.0);
    assert!(!puntualidad.cumplio);
    assert_eq!(puntualidad.penalidad_pct, 5.0);

    assert_eq!(response.summary.total_actores, 1);
    assert_eq!(response.summary.regular, 1);
    assert_eq!(response.summary.promedio_cumplimiento, 50.0);
}

#[tokio::test]
async fn customs_entity_rollup_uses_cycle_and_approval_slas() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_sla_tables()
        .with_setting_table()
        .build()
        .await
        .unwrap();

    let entidad = factory::insert_customs_entity(&test.db, "Aduana Norte")
        .await
        .unwrap();
    // Four procedures finished on the day, 24h cycle each, three approved.
    for estado in [
        TramiteEstado::Aprobado,
        TramiteEstado::Aprobado,
        TramiteEstado::Aprobado,
        TramiteEstado::Rechazado,
    ] {
        factory::insert_customs_procedure(
            &test.db,
            entidad.id,
            factory::dt(2024, 5, 31, 9, 0),
            Some(factory::dt(2024, 6, 1, 9, 0)),
            estado,
        )
        .await
        .unwrap();
    }

    let cache = SettingsCache::new();
    let settings = SettingsService::new(&test.db, &cache);
    let compliance = SlaComplianceService::new(&test.db, &settings);

    let response = compliance
        .evaluate_actors(factory::d(2024, 6, 1), factory::d(2024, 6, 2))
        .await
        .unwrap();

    assert_eq!(response.reports.len(), 1);
    let report = &response.reports[0];
    assert_eq!(report.ref_table, "customs_entity");
    assert_eq!(report.tipo, "ENTIDAD_ADUANA");

    let ciclo = report
        .slas
        .iter()
        .find(|s| s.codigo == "sla_ciclo_tramite")
        .unwrap();
    assert_eq!(ciclo.valor, 24.0);
    assert!(ciclo.cumplio);

    let despacho = report
        .slas
        .iter()
        .find(|s| s.codigo == "sla_despacho_aprobado")
        .unwrap();
    assert_eq!(despacho.valor, 75.0);
    assert!(!despacho.cumplio);

    assert_eq!(report.estado, ComplianceTier::Regular);
}

#[tokio::test]
async fn record_period_persists_measures_and_reuses_actors() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_sla_tables()
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
        Some(factory::dt(2024, 6, 1, 8, 10)),
        AppointmentEstado::Atendida,
    )
    .await
    .unwrap();

    let cache = SettingsCache::new();
    let settings = SettingsService::new(&test.db, &cache);
    let compliance = SlaComplianceService::new(&test.db, &settings);

    let inserted = compliance
        .record_period(factory::d(2024, 6, 1))
        .await
        .unwrap();
    assert_eq!(inserted, 2);

    let measures = entity::prelude::SlaMeasure::find()
        .all(&test.db)
        .await
        .unwrap();
    assert_eq!(measures.len(), 2);
    assert!(measures
        .iter()
        .all(|m| m.periodo == factory::d(2024, 6, 1)));
    assert!(measures.iter().all(|m| m.extra["penalidad_pct"] == 0.0));

    // Recording again reuses the actor proxy and replaces the period's
    // measures instead of duplicating either.
    let reinserted = compliance
        .record_period(factory::d(2024, 6, 1))
        .await
        .unwrap();
    assert_eq!(reinserted, 2);

    let actors = entity::prelude::Actor::find().all(&test.db).await.unwrap();
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].ref_table, "company");
    assert_eq!(actors[0].ref_id, company.id);
    assert_eq!(actors[0].name, "Transportes Sur");

    let measures = entity::prelude::SlaMeasure::find()
        .all(&test.db)
        .await
        .unwrap();
    assert_eq!(measures.len(), 2);
}

#[tokio::test]
async fn range_without_activity_yields_an_empty_report() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_sla_tables()
        .with_setting_table()
        .build()
        .await
        .unwrap();

    let cache = SettingsCache::new();
    let settings = SettingsService::new(&test.db, &cache);
    let compliance = SlaComplianceService::new(&test.db, &settings);

    let response = compliance
        .evaluate_actors(factory::d(2024, 6, 1), factory::d(2024, 6, 2))
        .await
        .unwrap();

    assert!(response.reports.is_empty());
    assert_eq!(response.summary.total_actores, 0);
    assert_eq!(response.summary.promedio_cumplimiento, 0.0);
}
