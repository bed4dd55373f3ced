use sea_orm::entity::prelude::*;

/// One KPI snapshot for one calendar period. Unique on (kpi_id, periodo);
/// a force recompute deletes and reinserts, never updates in place.
///
/// `valor` is rounded to 4 decimal places at rest; percentage KPIs are
/// stored on a 0-100 scale.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "kpi_value")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kpi_id: i32,
    pub periodo: Date,
    pub valor: f64,
    pub meta: f64,
    pub fuente: String,
    pub extra: Json,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kpi_definition::Entity",
        from = "Column::KpiId",
        to = "super::kpi_definition::Column::Id"
    )]
    KpiDefinition,
}

impl Related<super::kpi_definition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KpiDefinition.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
