//! Terminal dashboard for a remote metrics API: polls `GET /api/metrics` on
//! a fixed cadence, keeps a bounded rolling window of samples, and renders
//! summary cards plus time-series charts.

pub mod app;
pub mod history;
pub mod http;
pub mod profiles;
pub mod sampler;
pub mod source;
pub mod types;
pub mod ui;
