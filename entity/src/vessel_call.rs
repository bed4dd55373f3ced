use sea_orm::entity::prelude::*;

/// A vessel's port call, tracking the estimated and actual milestone
/// timestamps of its lifecycle (arrival, berthing, departure).
///
/// Invariant enforced at capture time by the operational layer:
/// `atd >= atb >= ata` whenever present, and `ata` being null implies
/// `atb` and `atd` are null.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vessel_call")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre_buque: String,
    pub berth_id: Option<i32>,
    pub eta: Option<DateTime>,
    pub etb: Option<DateTime>,
    pub ata: Option<DateTime>,
    pub atb: Option<DateTime>,
    pub atd: Option<DateTime>,
    pub estado: VesselCallEstado,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum VesselCallEstado {
    #[sea_orm(string_value = "ANUNCIADA")]
    Anunciada,
    #[sea_orm(string_value = "ATRACADA")]
    Atracada,
    #[sea_orm(string_value = "OPERANDO")]
    Operando,
    #[sea_orm(string_value = "ZARPADA")]
    Zarpada,
    #[sea_orm(string_value = "CANCELADA")]
    Cancelada,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::berth::Entity",
        from = "Column::BerthId",
        to = "super::berth::Column::Id"
    )]
    Berth,
}

impl Related<super::berth::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Berth.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
