use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000008_create_kpi_definition_table::KpiDefinition;

static FK_KPI_VALUE_KPI_ID: &str = "fk_kpi_value_kpi_id";
static IDX_KPI_VALUE_KPI_PERIODO: &str = "idx_kpi_value_kpi_id_periodo";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KpiValue::Table)
                    .if_not_exists()
                    .col(pk_auto(KpiValue::Id))
                    .col(integer(KpiValue::KpiId))
                    .col(date(KpiValue::Periodo))
                    .col(double(KpiValue::Valor))
                    .col(double(KpiValue::Meta))
                    .col(string(KpiValue::Fuente))
                    .col(json(KpiValue::Extra))
                    .col(timestamp(KpiValue::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_KPI_VALUE_KPI_ID)
                    .from_tbl(KpiValue::Table)
                    .from_col(KpiValue::KpiId)
                    .to_tbl(KpiDefinition::Table)
                    .to_col(KpiDefinition::Id)
                    .to_owned(),
            )
            .await?;

        // One snapshot per KPI per period; force-recompute deletes then
        // reinserts rather than updating in place.
        manager
            .create_index(
                Index::create()
                    .name(IDX_KPI_VALUE_KPI_PERIODO)
                    .table(KpiValue::Table)
                    .col(KpiValue::KpiId)
                    .col(KpiValue::Periodo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KPI_VALUE_KPI_PERIODO)
                    .table(KpiValue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_KPI_VALUE_KPI_ID)
                    .table(KpiValue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(KpiValue::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum KpiValue {
    Table,
    Id,
    KpiId,
    Periodo,
    Valor,
    Meta,
    Fuente,
    Extra,
    CreatedAt,
}
