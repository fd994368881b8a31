//! Price history provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;

/// Trait for sources of raw per-symbol daily price text.
///
/// Implementations return the feed exactly as stored: a header line
/// followed by `date,price` rows. Parsing and validation happen in the
/// engine, not here.
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error
    /// messages.
    fn id(&self) -> &'static str;

    /// Fetch the raw price history text for one symbol.
    ///
    /// Returns [`MarketDataError::SymbolNotFound`] when the symbol simply
    /// is not in this store, and a transport/storage error otherwise.
    async fn fetch_series_text(&self, symbol: &str) -> Result<String, MarketDataError>;
}
