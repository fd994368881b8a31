//! Core error types for the backtest engine.
//!
//! The engine is fail-fast: a request either completes for every portfolio
//! or is rejected as a whole. Degenerate portfolios (zero starting price)
//! are not errors; they yield empty histories and default metrics.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the backtest engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Backtest engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised while preparing or running a simulation.
///
/// Both variants are client-facing: they describe a request that cannot be
/// served with the available data, not an internal fault.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The aligned calendar ended up with fewer than two common trading
    /// days across the requested tickers and window.
    #[error("insufficient common trading days: found {found}, need at least 2")]
    InsufficientCommonDays { found: usize },

    /// One or more requested tickers have no price series at all. All
    /// missing tickers are reported together, not one at a time.
    #[error("no price history available for ticker(s): {}", .0.join(", "))]
    MissingTickers(Vec<String>),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Portfolio '{0}' has mismatched ticker and weight counts")]
    MismatchedWeights(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}
