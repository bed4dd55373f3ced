use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct CustomsEntityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomsEntityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<Vec<entity::customs_entity::Model>, DbErr> {
        entity::prelude::CustomsEntity::find()
            .filter(entity::customs_entity::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}
