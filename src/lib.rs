//! Muelle — port-logistics coordination platform.
//!
//! Tracks vessel calls, truck appointments, and customs procedures, and
//! derives operational performance from them: persisted per-day KPI
//! snapshots, period-over-period panel comparisons, per-actor SLA
//! compliance rollups, and graded early-warning alerts.

pub mod model;
pub mod server;
