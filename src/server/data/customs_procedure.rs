use chrono::NaiveDateTime;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct CustomsProcedureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomsProcedureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Procedures whose `fecha_fin` falls within `[from, to)`; any terminal
    /// state counts, the dispatch-rate denominator.
    pub async fn find_finished_in_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<entity::customs_procedure::Model>, DbErr> {
        entity::prelude::CustomsProcedure::find()
            .filter(entity::customs_procedure::Column::FechaFin.gte(from))
            .filter(entity::customs_procedure::Column::FechaFin.lt(to))
            .all(self.db)
            .await
    }
}
