//! JSON-serializable DTOs exposed by the HTTP API.

pub mod alert;
pub mod api;
pub mod kpi;
pub mod sla;
