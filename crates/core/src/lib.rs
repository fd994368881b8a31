//! Backfolio Core - Backtest simulation and metrics engine.
//!
//! This crate contains the whole backtest engine: aligning per-ticker price
//! histories onto a common calendar, simulating weighted, periodically
//! rebalanced portfolios, and deriving risk/return metrics. It performs no
//! network or storage I/O; raw price text is handed in by the market-data
//! collaborator and results are handed back as plain values.

pub mod backtest;
pub mod calendar;
pub mod constants;
pub mod errors;
pub mod metrics;
pub mod rebalance;
pub mod series;
pub mod simulation;

// Re-export the request-level entry points
pub use backtest::{BacktestRequest, BacktestResponse, BacktestService};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
