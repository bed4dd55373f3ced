use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_berth_table::Berth;

static FK_VESSEL_CALL_BERTH_ID: &str = "fk_vessel_call_berth_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VesselCall::Table)
                    .if_not_exists()
                    .col(pk_auto(VesselCall::Id))
                    .col(string(VesselCall::NombreBuque))
                    .col(integer_null(VesselCall::BerthId))
                    .col(timestamp_null(VesselCall::Eta))
                    .col(timestamp_null(VesselCall::Etb))
                    .col(timestamp_null(VesselCall::Ata))
                    .col(timestamp_null(VesselCall::Atb))
                    .col(timestamp_null(VesselCall::Atd))
                    .col(string_len(VesselCall::Estado, 20))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VESSEL_CALL_BERTH_ID)
                    .from_tbl(VesselCall::Table)
                    .from_col(VesselCall::BerthId)
                    .to_tbl(Berth::Table)
                    .to_col(Berth::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VESSEL_CALL_BERTH_ID)
                    .table(VesselCall::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VesselCall::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VesselCall {
    Table,
    Id,
    NombreBuque,
    BerthId,
    Eta,
    Etb,
    Ata,
    Atb,
    Atd,
    Estado,
}
