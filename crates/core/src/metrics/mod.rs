//! Risk/return statistics over simulated value series.

mod metrics_model;
mod metrics_service;


pub use metrics_model::{Metrics, MetricsConfig, MetricsOutcome};
pub use metrics_service::calculate_metrics;
