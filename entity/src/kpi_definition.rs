use sea_orm::entity::prelude::*;

/// Static KPI catalog entry. Created once by migration, immutable.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "kpi_definition")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::kpi_value::Entity")]
    KpiValue,
}

impl Related<super::kpi_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KpiValue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
