use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SlaDefinition::Table)
                    .if_not_exists()
                    .col(pk_auto(SlaDefinition::Id))
                    .col(string_uniq(SlaDefinition::Code))
                    .col(string(SlaDefinition::Name))
                    .col(string_len(SlaDefinition::TipoActor, 20))
                    .col(double(SlaDefinition::Umbral))
                    .col(string_len(SlaDefinition::Comparador, 2))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SlaDefinition::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SlaDefinition {
    Table,
    Id,
    Code,
    Name,
    TipoActor,
    Umbral,
    Comparador,
}
