use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customs_entity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::customs_procedure::Entity")]
    CustomsProcedure,
}

impl Related<super::customs_procedure::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomsProcedure.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
