use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000002_create_company_table::Company;

static FK_APPOINTMENT_COMPANY_ID: &str = "fk_appointment_company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::CompanyId))
                    .col(timestamp(Appointment::HoraProgramada))
                    .col(timestamp_null(Appointment::HoraLlegada))
                    .col(string_len(Appointment::Estado, 20))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPOINTMENT_COMPANY_ID)
                    .from_tbl(Appointment::Table)
                    .from_col(Appointment::CompanyId)
                    .to_tbl(Company::Table)
                    .to_col(Company::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPOINTMENT_COMPANY_ID)
                    .table(Appointment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    CompanyId,
    HoraProgramada,
    HoraLlegada,
    Estado,
}
