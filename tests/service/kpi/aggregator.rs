//! Tests for KpiAggregatorService::recompute
//!
//! These tests verify the batch recompute behavior including:
//! - Daily snapshot computation and persistence with audit detail
//! - Idempotency (AlreadyComputed no-op without force)
//! - Force replacement via delete-then-insert
//! - No-data and missing-definition skips
//! - Full transaction rollback on a mid-write failure

use entity::appointment::AppointmentEstado;
use muelle::model::kpi::{KpiOutcome, RecomputeStatus};
use muelle::server::{data::kpi::KpiValueRepository, service::kpi::aggregator::KpiAggregatorService};
use muelle_test_utils::{factory, TestBuilder};
use sea_orm::{ConnectionTrait, EntityTrait};

#[tokio::test]
async fn recompute_persists_daily_turnaround_snapshot() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_kpi_tables()
        .build()
        .await
        .unwrap();

    // Three departures on 2024-06-01 with turnarounds of 12h, 24h, 48h.
    factory::insert_vessel_call(
        &test.db,
        None,
        Some(factory::dt(2024, 5, 31, 20, 0)),
        Some(factory::dt(2024, 5, 31, 22, 0)),
        Some(factory::dt(2024, 6, 1, 8, 0)),
    )
    .await
    .unwrap();
    factory::insert_vessel_call(
        &test.db,
        None,
        Some(factory::dt(2024, 5, 31, 8, 0)),
        Some(factory::dt(2024, 5, 31, 10, 0)),
        Some(factory::dt(2024, 6, 1, 8, 0)),
    )
    .await
    .unwrap();
    factory::insert_vessel_call(
        &test.db,
        None,
        Some(factory::dt(2024, 5, 30, 8, 0)),
        Some(factory::dt(2024, 5, 30, 10, 0)),
        Some(factory::dt(2024, 6, 1, 8, 0)),
    )
    .await
    .unwrap();

    let aggregator = KpiAggregatorService::new(&test.db);
    let summary = aggregator
        .recompute(factory::d(2024, 6, 1), false)
        .await
        .unwrap();

    assert_eq!(summary.status, RecomputeStatus::Computed);
    assert!(summary.warnings.is_empty());

    let turnaround = summary
        .kpis
        .iter()
        .find(|k| k.codigo == "turnaround_h")
        .unwrap();
    assert_eq!(turnaround.outcome, KpiOutcome::Computed { valor: 28.0 });

    let rows = KpiValueRepository::new(&test.db)
        .find_by_period(factory::d(2024, 6, 1))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.valor, 28.0);
    assert_eq!(row.meta, 48.0);
    assert_eq!(row.fuente, "vessel_call");
    assert_eq!(row.extra["count"], 3);
    assert_eq!(row.extra["min"], 12.0);
    assert_eq!(row.extra["max"], 48.0);
}

#[tokio::test]
async fn recompute_without_force_is_a_noop_on_computed_period() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_kpi_tables()
        .build()
        .await
        .unwrap();

    factory::insert_vessel_call(
        &test.db,
        None,
        Some(factory::dt(2024, 5, 31, 8, 0)),
        Some(factory::dt(2024, 5, 31, 10, 0)),
        Some(factory::dt(2024, 6, 1, 8, 0)),
    )
    .await
    .unwrap();

    let aggregator = KpiAggregatorService::new(&test.db);
    let first = aggregator
        .recompute(factory::d(2024, 6, 1), false)
        .await
        .unwrap();
    assert_eq!(first.status, RecomputeStatus::Computed);

    let second = aggregator
        .recompute(factory::d(2024, 6, 1), false)
        .await
        .unwrap();
    assert_eq!(second.status, RecomputeStatus::AlreadyComputed);
    assert!(second.kpis.is_empty());
    assert_eq!(second.warnings.len(), 1);

    let rows = KpiValueRepository::new(&test.db)
        .find_by_period(factory::d(2024, 6, 1))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn force_recompute_replaces_existing_snapshots() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_kpi_tables()
        .build()
        .await
        .unwrap();

    factory::insert_vessel_call(
        &test.db,
        None,
        Some(factory::dt(2024, 5, 31, 8, 0)),
        Some(factory::dt(2024, 5, 31, 10, 0)),
        Some(factory::dt(2024, 6, 1, 8, 0)),
    )
    .await
    .unwrap();

    let aggregator = KpiAggregatorService::new(&test.db);
    aggregator
        .recompute(factory::d(2024, 6, 1), false)
        .await
        .unwrap();

    // More data arrives late; the force path must replace, not duplicate.
    factory::insert_vessel_call(
        &test.db,
        None,
        Some(factory::dt(2024, 5, 30, 8, 0)),
        Some(factory::dt(2024, 5, 30, 10, 0)),
        Some(factory::dt(2024, 6, 1, 8, 0)),
    )
    .await
    .unwrap();

    let summary = aggregator
        .recompute(factory::d(2024, 6, 1), true)
        .await
        .unwrap();
    assert_eq!(summary.status, RecomputeStatus::Computed);

    let rows = KpiValueRepository::new(&test.db)
        .find_by_period(factory::d(2024, 6, 1))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    // Mean of 24h and 48h.
    assert_eq!(rows[0].valor, 36.0);
}

#[tokio::test]
async fn empty_period_skips_every_kpi_and_stores_nothing() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_kpi_tables()
        .build()
        .await
        .unwrap();

    let aggregator = KpiAggregatorService::new(&test.db);
    let summary = aggregator
        .recompute(factory::d(2024, 6, 1), false)
        .await
        .unwrap();

    assert_eq!(summary.status, RecomputeStatus::Computed);
    assert_eq!(summary.kpis.len(), 4);
    assert!(summary
        .kpis
        .iter()
        .all(|k| k.outcome == KpiOutcome::SkippedNoData));

    let rows = KpiValueRepository::new(&test.db)
        .find_by_period(factory::d(2024, 6, 1))
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn missing_definition_skips_with_warning_and_the_rest_proceed() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_kpi_tables()
        .build()
        .await
        .unwrap();

    // Remove one catalog entry; the rest of the run must not be affected.
    let defs = entity::prelude::KpiDefinition::find()
        .all(&test.db)
        .await
        .unwrap();
    let turnaround_def = defs.iter().find(|d| d.code == "turnaround_h").unwrap();
    entity::prelude::KpiDefinition::delete_by_id(turnaround_def.id)
        .exec(&test.db)
        .await
        .unwrap();

    factory::insert_vessel_call(
        &test.db,
        None,
        Some(factory::dt(2024, 5, 31, 8, 0)),
        Some(factory::dt(2024, 5, 31, 10, 0)),
        Some(factory::dt(2024, 6, 1, 8, 0)),
    )
    .await
    .unwrap();
    let company = factory::insert_company(&test.db, "Transportes Sur")
        .await
        .unwrap();
    factory::insert_appointment(
        &test.db,
        company.id,
        factory::dt(2024, 6, 1, 10, 0),
        Some(factory::dt(2024, 6, 1, 11, 0)),
        AppointmentEstado::Atendida,
    )
    .await
    .unwrap();

    let aggregator = KpiAggregatorService::new(&test.db);
    let summary = aggregator
        .recompute(factory::d(2024, 6, 1), false)
        .await
        .unwrap();

    assert_eq!(summary.status, RecomputeStatus::Computed);
    assert_eq!(summary.warnings.len(), 1);
    assert!(summary.warnings[0].contains("turnaround_h"));

    let turnaround = summary
        .kpis
        .iter()
        .find(|k| k.codigo == "turnaround_h")
        .unwrap();
    assert_eq!(turnaround.outcome, KpiOutcome::SkippedMissingDefinition);

    let espera = summary
        .kpis
        .iter()
        .find(|k| k.codigo == "espera_camion_h")
        .unwrap();
    assert_eq!(espera.outcome, KpiOutcome::Computed { valor: 1.0 });
}

#[tokio::test]
async fn failed_write_rolls_back_the_whole_period() {
    let test = TestBuilder::new()
        .with_operational_tables()
        .with_kpi_tables()
        .build()
        .await
        .unwrap();

    factory::insert_vessel_call(
        &test.db,
        None,
        Some(factory::dt(2024, 5, 31, 8, 0)),
        Some(factory::dt(2024, 5, 31, 10, 0)),
        Some(factory::dt(2024, 6, 1, 8, 0)),
    )
    .await
    .unwrap();
    let company = factory::insert_company(&test.db, "Transportes Sur")
        .await
        .unwrap();
    factory::insert_appointment(
        &test.db,
        company.id,
        factory::dt(2024, 6, 1, 10, 0),
        Some(factory::dt(2024, 6, 1, 11, 0)),
        AppointmentEstado::Atendida,
    )
    .await
    .unwrap();
    let entidad = factory::insert_customs_entity(&test.db, "Aduana Norte")
        .await
        .unwrap();
    factory::insert_customs_procedure(
        &test.db,
        entidad.id,
        factory::dt(2024, 5, 31, 9, 0),
        Some(factory::dt(2024, 6, 1, 9, 0)),
        entity::customs_procedure::TramiteEstado::Aprobado,
    )
    .await
    .unwrap();

    // Fail the last insert of the transaction; the three snapshots
    // written before it must not survive on their own.
    test.db
        .execute_unprepared(
            "CREATE TRIGGER abort_customs_kpi \
             BEFORE INSERT ON kpi_value \
             WHEN NEW.fuente = 'customs_procedure' \
             BEGIN SELECT RAISE(ABORT, 'injected failure'); END;",
        )
        .await
        .unwrap();

    let aggregator = KpiAggregatorService::new(&test.db);
    let result = aggregator.recompute(factory::d(2024, 6, 1), false).await;
    assert!(result.is_err());

    let rows = KpiValueRepository::new(&test.db)
        .find_by_period(factory::d(2024, 6, 1))
        .await
        .unwrap();
    assert!(rows.is_empty());
}
