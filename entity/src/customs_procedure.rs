use sea_orm::entity::prelude::*;

/// A customs procedure (tramite) handled by a customs entity.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customs_procedure")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub entidad_id: i32,
    pub fecha_inicio: DateTime,
    pub fecha_fin: Option<DateTime>,
    pub estado: TramiteEstado,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum TramiteEstado {
    #[sea_orm(string_value = "INICIADO")]
    Iniciado,
    #[sea_orm(string_value = "EN_REVISION")]
    EnRevision,
    #[sea_orm(string_value = "OBSERVADO")]
    Observado,
    #[sea_orm(string_value = "APROBADO")]
    Aprobado,
    #[sea_orm(string_value = "RECHAZADO")]
    Rechazado,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customs_entity::Entity",
        from = "Column::EntidadId",
        to = "super::customs_entity::Column::Id"
    )]
    CustomsEntity,
}

impl Related<super::customs_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomsEntity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
