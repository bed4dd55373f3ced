pub mod app;
pub mod kpi;
