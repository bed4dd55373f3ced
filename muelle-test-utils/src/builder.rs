//! Declarative test builder.
//!
//! Configure which table groups a test needs, then call `build()` to get a
//! [`TestContext`] with an in-memory SQLite database. Catalog tables
//! (`kpi_definition`, `sla_definition`) are seeded with the same rows the
//! production migration inserts, so tests exercise the real catalogs.

use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, DbBackend, EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError, factory};

/// Builder for declarative test initialization.
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    seed_kpi_catalog: bool,
    seed_sla_catalog: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the operational input tables: berth, company, customs_entity,
    /// vessel_call, appointment, customs_procedure, and gate_event.
    pub fn with_operational_tables(mut self) -> Self {
        self = self
            .with_table(entity::prelude::Berth)
            .with_table(entity::prelude::Company)
            .with_table(entity::prelude::CustomsEntity)
            .with_table(entity::prelude::VesselCall)
            .with_table(entity::prelude::Appointment)
            .with_table(entity::prelude::CustomsProcedure)
            .with_table(entity::prelude::GateEvent);
        self
    }

    /// Add the KPI tables (`kpi_definition`, `kpi_value`) with the catalog
    /// seeded.
    pub fn with_kpi_tables(mut self) -> Self {
        self = self
            .with_table(entity::prelude::KpiDefinition)
            .with_table(entity::prelude::KpiValue);
        self.seed_kpi_catalog = true;
        self
    }

    /// Add the SLA tables (`sla_definition`, `actor`, `sla_measure`) with
    /// the catalog seeded.
    pub fn with_sla_tables(mut self) -> Self {
        self = self
            .with_table(entity::prelude::SlaDefinition)
            .with_table(entity::prelude::Actor)
            .with_table(entity::prelude::SlaMeasure);
        self.seed_sla_catalog = true;
        self
    }

    /// Add the `setting` table.
    pub fn with_setting_table(self) -> Self {
        self.with_table(entity::prelude::Setting)
    }

    /// Add a single entity's table. Chain for multiple tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Execute the queued setup and return the ready test context.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        for table in &self.tables {
            context.db.execute(table).await?;
        }

        if self.seed_kpi_catalog {
            factory::seed_kpi_definitions(&context.db).await?;
        }
        if self.seed_sla_catalog {
            factory::seed_sla_definitions(&context.db).await?;
        }

        Ok(context)
    }
}
