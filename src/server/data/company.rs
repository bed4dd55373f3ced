use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct CompanyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<Vec<entity::company::Model>, DbErr> {
        entity::prelude::Company::find()
            .filter(entity::company::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}
