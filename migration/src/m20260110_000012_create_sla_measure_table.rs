use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260110_000010_create_sla_definition_table::SlaDefinition,
    m20260110_000011_create_actor_table::Actor,
};

static FK_SLA_MEASURE_SLA_ID: &str = "fk_sla_measure_sla_id";
static FK_SLA_MEASURE_ACTOR_ID: &str = "fk_sla_measure_actor_id";
static IDX_SLA_MEASURE_SLA_ACTOR_PERIODO: &str = "idx_sla_measure_sla_id_actor_id_periodo";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SlaMeasure::Table)
                    .if_not_exists()
                    .col(pk_auto(SlaMeasure::Id))
                    .col(integer(SlaMeasure::SlaId))
                    .col(integer(SlaMeasure::ActorId))
                    .col(date(SlaMeasure::Periodo))
                    .col(double(SlaMeasure::Valor))
                    .col(boolean(SlaMeasure::Cumplio))
                    .col(json(SlaMeasure::Extra))
                    .col(timestamp(SlaMeasure::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SLA_MEASURE_SLA_ID)
                    .from_tbl(SlaMeasure::Table)
                    .from_col(SlaMeasure::SlaId)
                    .to_tbl(SlaDefinition::Table)
                    .to_col(SlaDefinition::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SLA_MEASURE_ACTOR_ID)
                    .from_tbl(SlaMeasure::Table)
                    .from_col(SlaMeasure::ActorId)
                    .to_tbl(Actor::Table)
                    .to_col(Actor::Id)
                    .to_owned(),
            )
            .await?;

        // One measure per (sla, actor, period); a re-recorded period
        // deletes and reinserts rather than accumulating rows.
        manager
            .create_index(
                Index::create()
                    .name(IDX_SLA_MEASURE_SLA_ACTOR_PERIODO)
                    .table(SlaMeasure::Table)
                    .col(SlaMeasure::SlaId)
                    .col(SlaMeasure::ActorId)
                    .col(SlaMeasure::Periodo)
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
                    .name(IDX_SLA_MEASURE_SLA_ACTOR_PERIODO)
                    .table(SlaMeasure::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SLA_MEASURE_ACTOR_ID)
                    .table(SlaMeasure::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SLA_MEASURE_SLA_ID)
                    .table(SlaMeasure::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SlaMeasure::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SlaMeasure {
    Table,
    Id,
    SlaId,
    ActorId,
    Periodo,
    Valor,
    Cumplio,
    Extra,
    CreatedAt,
}
