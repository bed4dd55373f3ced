use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

pub struct KpiDefinitionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KpiDefinitionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<entity::kpi_definition::Model>, DbErr> {
        entity::prelude::KpiDefinition::find()
            .filter(entity::kpi_definition::Column::Code.eq(code))
            .one(self.db)
            .await
    }
}

pub struct KpiValueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KpiValueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether any KPI snapshot exists for the period; the aggregator's
    /// idempotency check.
    pub async fn any_for_period(&self, periodo: NaiveDate) -> Result<bool, DbErr> {
        let existing = entity::prelude::KpiValue::find()
            .filter(entity::kpi_value::Column::Periodo.eq(periodo))
            .one(self.db)
            .await?;

        Ok(existing.is_some())
    }

    pub async fn find_by_period(
        &self,
        periodo: NaiveDate,
    ) -> Result<Vec<entity::kpi_value::Model>, DbErr> {
        entity::prelude::KpiValue::find()
            .filter(entity::kpi_value::Column::Periodo.eq(periodo))
            .all(self.db)
            .await
    }

    /// Removes every snapshot for the period. Runs on the caller's
    /// transaction: a force recompute deletes and reinserts as one atomic
    /// unit, strictly ordered delete-before-insert.
    pub async fn delete_for_period<C: ConnectionTrait>(
        &self,
        conn: &C,
        periodo: NaiveDate,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::KpiValue::delete_many()
            .filter(entity::kpi_value::Column::Periodo.eq(periodo))
            .exec(conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Inserts one snapshot on the caller's transaction.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        kpi_id: i32,
        periodo: NaiveDate,
        valor: f64,
        meta: f64,
        fuente: &str,
        extra: serde_json::Value,
        now: NaiveDateTime,
    ) -> Result<entity::kpi_value::Model, DbErr> {
        let value = entity::kpi_value::ActiveModel {
            kpi_id: ActiveValue::Set(kpi_id),
            periodo: ActiveValue::Set(periodo),
            valor: ActiveValue::Set(valor),
            meta: ActiveValue::Set(meta),
            fuente: ActiveValue::Set(fuente.to_string()),
            extra: ActiveValue::Set(extra),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        value.insert(conn).await
    }
}
