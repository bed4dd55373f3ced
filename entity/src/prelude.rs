pub use super::actor::Entity as Actor;
pub use super::appointment::Entity as Appointment;
pub use super::berth::Entity as Berth;
pub use super::company::Entity as Company;
pub use super::customs_entity::Entity as CustomsEntity;
pub use super::customs_procedure::Entity as CustomsProcedure;
pub use super::gate_event::Entity as GateEvent;
pub use super::kpi_definition::Entity as KpiDefinition;
pub use super::kpi_value::Entity as KpiValue;
pub use super::setting::Entity as Setting;
pub use super::sla_definition::Entity as SlaDefinition;
pub use super::sla_measure::Entity as SlaMeasure;
pub use super::vessel_call::Entity as VesselCall;
