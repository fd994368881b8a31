//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while retrieving raw price series.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider. Terminal for
    /// that provider; a chain tries the next one.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// One or more symbols could not be resolved by any provider. Raised
    /// only by bulk fetches, which collect every miss before failing.
    #[error("no price history available for symbol(s): {}", .0.join(", "))]
    MissingSymbols(Vec<String>),

    /// A transport-level failure talking to a remote store.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A local store could not be read.
    #[error("Storage error: {0}")]
    Io(String),

    /// A provider-specific failure that is not a plain miss.
    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },
}

impl MarketDataError {
    /// Whether this error means "this symbol does not exist here", as
    /// opposed to a fault reaching the provider.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MarketDataError::SymbolNotFound(_) | MarketDataError::MissingSymbols(_)
        )
    }
}
