//! Data access layer repositories.
//!
//! Repositories provide an abstraction over database operations, organized
//! by domain: operational records (vessel calls, appointments, customs
//! procedures, gate events), the KPI snapshot store, the SLA catalog and
//! measures, and process-wide settings.

pub mod appointment;
pub mod berth;
pub mod company;
pub mod customs_entity;
pub mod customs_procedure;
pub mod gate_event;
pub mod kpi;
pub mod setting;
pub mod sla;
pub mod vessel_call;
