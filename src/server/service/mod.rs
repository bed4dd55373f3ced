//! Service layer for business logic.
//!
//! Services coordinate repositories into the platform's four consumers of
//! the metric primitives: the batch KPI aggregator, the live panel
//! comparator, the SLA compliance engine, and the early-warning detector,
//! plus the TTL-cached settings store they share.

pub mod alert;
pub mod kpi;
pub mod metric;
pub mod setting;
pub mod sla;
