use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "berth")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub activo: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vessel_call::Entity")]
    VesselCall,
}

impl Related<super::vessel_call::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VesselCall.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
