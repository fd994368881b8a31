//! Request-level orchestration: wire models and the backtest service.

mod model;
mod service;


pub use model::{BacktestRequest, BacktestResponse, PortfolioReport};
pub use service::BacktestService;
