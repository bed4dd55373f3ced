use sea_orm::entity::prelude::*;

/// One SLA evaluation for one (sla, actor, period).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sla_measure")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sla_id: i32,
    pub actor_id: i32,
    pub periodo: Date,
    pub valor: f64,
    pub cumplio: bool,
    pub extra: Json,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sla_definition::Entity",
        from = "Column::SlaId",
        to = "super::sla_definition::Column::Id"
    )]
    SlaDefinition,
    #[sea_orm(
        belongs_to = "super::actor::Entity",
        from = "Column::ActorId",
        to = "super::actor::Column::Id"
    )]
    Actor,
}

impl Related<super::sla_definition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SlaDefinition.def()
    }
}

impl Related<super::actor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Actor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
