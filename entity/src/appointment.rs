use sea_orm::entity::prelude::*;

/// A truck appointment at the gate: scheduled slot versus actual arrival.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub hora_programada: DateTime,
    pub hora_llegada: Option<DateTime>,
    pub estado: AppointmentEstado,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum AppointmentEstado {
    #[sea_orm(string_value = "PROGRAMADA")]
    Programada,
    #[sea_orm(string_value = "CONFIRMADA")]
    Confirmada,
    #[sea_orm(string_value = "ATENDIDA")]
    Atendida,
    #[sea_orm(string_value = "NO_SHOW")]
    NoShow,
    #[sea_orm(string_value = "CANCELADA")]
    Cancelada,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
