use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KpiDefinition::Table)
                    .if_not_exists()
                    .col(pk_auto(KpiDefinition::Id))
                    .col(string_uniq(KpiDefinition::Code))
                    .col(string(KpiDefinition::Name))
                    .col(string(KpiDefinition::Description))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KpiDefinition::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum KpiDefinition {
    Table,
    Id,
    Code,
    Name,
    Description,
}
