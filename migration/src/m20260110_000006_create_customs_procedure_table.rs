use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000003_create_customs_entity_table::CustomsEntity;

static FK_CUSTOMS_PROCEDURE_ENTIDAD_ID: &str = "fk_customs_procedure_entidad_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomsProcedure::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomsProcedure::Id))
                    .col(integer(CustomsProcedure::EntidadId))
                    .col(timestamp(CustomsProcedure::FechaInicio))
                    .col(timestamp_null(CustomsProcedure::FechaFin))
                    .col(string_len(CustomsProcedure::Estado, 20))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CUSTOMS_PROCEDURE_ENTIDAD_ID)
                    .from_tbl(CustomsProcedure::Table)
                    .from_col(CustomsProcedure::EntidadId)
                    .to_tbl(CustomsEntity::Table)
                    .to_col(CustomsEntity::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CUSTOMS_PROCEDURE_ENTIDAD_ID)
                    .table(CustomsProcedure::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CustomsProcedure::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CustomsProcedure {
    Table,
    Id,
    EntidadId,
    FechaInicio,
    FechaFin,
    Estado,
}
