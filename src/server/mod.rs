//! Server application core modules.
//!
//! Contains all backend functionality for the Muelle platform: HTTP routing,
//! database repositories, KPI aggregation and comparison, SLA compliance
//! evaluation, early-warning detection, and the settings store.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
