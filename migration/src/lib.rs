pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_berth_table;
mod m20260110_000002_create_company_table;
mod m20260110_000003_create_customs_entity_table;
mod m20260110_000004_create_vessel_call_table;
mod m20260110_000005_create_appointment_table;
mod m20260110_000006_create_customs_procedure_table;
mod m20260110_000007_create_gate_event_table;
mod m20260110_000008_create_kpi_definition_table;
mod m20260110_000009_create_kpi_value_table;
mod m20260110_000010_create_sla_definition_table;
mod m20260110_000011_create_actor_table;
mod m20260110_000012_create_sla_measure_table;
mod m20260110_000013_create_setting_table;
mod m20260110_000014_seed_catalogs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_berth_table::Migration),
            Box::new(m20260110_000002_create_company_table::Migration),
            Box::new(m20260110_000003_create_customs_entity_table::Migration),
            Box::new(m20260110_000004_create_vessel_call_table::Migration),
            Box::new(m20260110_000005_create_appointment_table::Migration),
            Box::new(m20260110_000006_create_customs_procedure_table::Migration),
            Box::new(m20260110_000007_create_gate_event_table::Migration),
            Box::new(m20260110_000008_create_kpi_definition_table::Migration),
            Box::new(m20260110_000009_create_kpi_value_table::Migration),
            Box::new(m20260110_000010_create_sla_definition_table::Migration),
            Box::new(m20260110_000011_create_actor_table::Migration),
            Box::new(m20260110_000012_create_sla_measure_table::Migration),
            Box::new(m20260110_000013_create_setting_table::Migration),
            Box::new(m20260110_000014_seed_catalogs::Migration),
        ]
    }
}
