use sea_orm_migration::{prelude::*, schema::*};

static IDX_ACTOR_REF: &str = "idx_actor_ref_table_ref_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Actor::Table)
                    .if_not_exists()
                    .col(pk_auto(Actor::Id))
                    .col(string(Actor::RefTable))
                    .col(integer(Actor::RefId))
                    .col(string_len(Actor::Tipo, 20))
                    .col(string(Actor::Name))
                    .col(timestamp(Actor::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Weak reference to the source row; one actor per source row.
        manager
            .create_index(
                Index::create()
                    .name(IDX_ACTOR_REF)
                    .table(Actor::Table)
                    .col(Actor::RefTable)
                    .col(Actor::RefId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_ACTOR_REF).table(Actor::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Actor::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Actor {
    Table,
    Id,
    RefTable,
    RefId,
    Tipo,
    Name,
    CreatedAt,
}
