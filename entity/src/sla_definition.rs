use sea_orm::entity::prelude::*;

/// Static SLA catalog entry: a named threshold actors of a given type are
/// measured against.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sla_definition")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub tipo_actor: super::actor::ActorTipo,
    pub umbral: f64,
    pub comparador: Comparador,
}

/// Comparison direction for an SLA: a measured `valor` passes when
/// `valor <comparador> umbral` holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum Comparador {
    #[sea_orm(string_value = "<")]
    Lt,
    #[sea_orm(string_value = "<=")]
    Le,
    #[sea_orm(string_value = ">")]
    Gt,
    #[sea_orm(string_value = ">=")]
    Ge,
}

impl Comparador {
    /// Whether a measured value satisfies the threshold under this
    /// comparison direction.
    pub fn evaluate(self, valor: f64, umbral: f64) -> bool {
        match self {
            Comparador::Lt => valor < umbral,
            Comparador::Le => valor <= umbral,
            Comparador::Gt => valor > umbral,
            Comparador::Ge => valor >= umbral,
        }
    }
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
