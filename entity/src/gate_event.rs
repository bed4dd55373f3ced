use sea_orm::entity::prelude::*;

/// A truck crossing the terminal gate in either direction.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gate_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub truck_placa: String,
    pub accion: GateAccion,
    pub event_ts: DateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum GateAccion {
    #[sea_orm(string_value = "ENTRADA")]
    Entrada,
    #[sea_orm(string_value = "SALIDA")]
    Salida,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
