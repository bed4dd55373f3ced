pub mod actor;
pub mod appointment;
pub mod berth;
pub mod company;
pub mod customs_entity;
pub mod customs_procedure;
pub mod gate_event;
pub mod kpi_definition;
pub mod kpi_value;
pub mod setting;
pub mod sla_definition;
pub mod sla_measure;
pub mod vessel_call;

pub mod prelude;
