//! HTTP controller endpoints for the Muelle web API.
//!
//! This module contains Axum handlers for KPI aggregation and comparison,
//! SLA compliance, early-warning alerts, and settings management.
//! Controllers handle HTTP requests, validate inputs, interact with
//! services, and return appropriate HTTP responses. They use utoipa for
//! OpenAPI documentation.

pub mod alert;
pub mod kpi;
pub mod setting;
pub mod sla;
