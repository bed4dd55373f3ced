use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

pub struct SlaDefinitionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SlaDefinitionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_tipo(
        &self,
        tipo: entity::actor::ActorTipo,
    ) -> Result<Vec<entity::sla_definition::Model>, DbErr> {
        entity::prelude::SlaDefinition::find()
            .filter(entity::sla_definition::Column::TipoActor.eq(tipo))
            .all(self.db)
            .await
    }
}

pub struct ActorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the actor proxy for a source row, creating it on first use.
    /// The (ref_table, ref_id) pair is the identity; the name is captured
    /// at creation time and not kept in sync with the source.
    pub async fn get_or_create(
        &self,
        ref_table: &str,
        ref_id: i32,
        tipo: entity::actor::ActorTipo,
        name: &str,
        now: NaiveDateTime,
    ) -> Result<entity::actor::Model, DbErr> {
        let existing = entity::prelude::Actor::find()
            .filter(entity::actor::Column::RefTable.eq(ref_table))
            .filter(entity::actor::Column::RefId.eq(ref_id))
            .one(self.db)
            .await?;

        if let Some(actor) = existing {
            return Ok(actor);
        }

        let actor = entity::actor::ActiveModel {
            ref_table: ActiveValue::Set(ref_table.to_string()),
            ref_id: ActiveValue::Set(ref_id),
            tipo: ActiveValue::Set(tipo),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        actor.insert(self.db).await
    }
}

pub struct SlaMeasureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SlaMeasureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Removes every measure for the period. Runs on the caller's
    /// transaction so a re-recorded period deletes and reinserts as one
    /// atomic unit instead of piling up duplicate rows.
    pub async fn delete_for_period<C: ConnectionTrait>(
        &self,
        conn: &C,
        periodo: NaiveDate,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::SlaMeasure::delete_many()
            .filter(entity::sla_measure::Column::Periodo.eq(periodo))
            .exec(conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Inserts one measure on the caller's transaction.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        sla_id: i32,
        actor_id: i32,
        periodo: NaiveDate,
        valor: f64,
        cumplio: bool,
        extra: serde_json::Value,
        now: NaiveDateTime,
    ) -> Result<entity::sla_measure::Model, DbErr> {
        let measure = entity::sla_measure::ActiveModel {
            sla_id: ActiveValue::Set(sla_id),
            actor_id: ActiveValue::Set(actor_id),
            periodo: ActiveValue::Set(periodo),
            valor: ActiveValue::Set(valor),
            cumplio: ActiveValue::Set(cumplio),
            extra: ActiveValue::Set(extra),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        measure.insert(conn).await
    }

    pub async fn find_by_period(
        &self,
        periodo: NaiveDate,
    ) -> Result<Vec<entity::sla_measure::Model>, DbErr> {
        entity::prelude::SlaMeasure::find()
            .filter(entity::sla_measure::Column::Periodo.eq(periodo))
            .all(self.db)
            .await
    }
}
