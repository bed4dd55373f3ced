use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct BerthRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BerthRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Berths currently in service; inactive berths are excluded from
    /// utilization scans.
    pub async fn find_active(&self) -> Result<Vec<entity::berth::Model>, DbErr> {
        entity::prelude::Berth::find()
            .filter(entity::berth::Column::Activo.eq(true))
            .all(self.db)
            .await
    }
}
