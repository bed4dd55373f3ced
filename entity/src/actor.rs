use sea_orm::entity::prelude::*;

/// Stable proxy identity for a company or customs entity tracked for SLA
/// compliance. Weakly references the source row via (ref_table, ref_id)
/// and never owns it; created lazily on first use.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "actor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ref_table: String,
    pub ref_id: i32,
    pub tipo: ActorTipo,
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ActorTipo {
    #[sea_orm(string_value = "TRANSPORTISTA")]
    Transportista,
    #[sea_orm(string_value = "ENTIDAD_ADUANA")]
    EntidadAduana,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sla_measure::Entity")]
    SlaMeasure,
}

impl Related<super::sla_measure::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SlaMeasure.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
