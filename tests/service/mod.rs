mod alert;
mod kpi;
mod setting;
mod sla;
