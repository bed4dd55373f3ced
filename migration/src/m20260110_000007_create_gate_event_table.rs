use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GateEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(GateEvent::Id))
                    .col(string(GateEvent::TruckPlaca))
                    .col(string_len(GateEvent::Accion, 10))
                    .col(timestamp(GateEvent::EventTs))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GateEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GateEvent {
    Table,
    Id,
    TruckPlaca,
    Accion,
    EventTs,
}
