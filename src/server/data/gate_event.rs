use chrono::NaiveDateTime;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct GateEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GateEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gate crossings within `[from, to)`.
    pub async fn find_in_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<entity::gate_event::Model>, DbErr> {
        entity::prelude::GateEvent::find()
            .filter(entity::gate_event::Column::EventTs.gte(from))
            .filter(entity::gate_event::Column::EventTs.lt(to))
            .all(self.db)
            .await
    }
}
