use async_trait::async_trait;
use log::warn;

use crate::errors::MarketDataError;

use super::PriceHistoryProvider;

/// An ordered list of providers tried in sequence; the first success wins.
///
/// A plain miss falls through silently, a transport or storage failure
/// falls through with a warning. An exhausted chain reports the symbol as
/// not found only if some provider actually reported a miss; when every
/// failure was a fault, the last fault is propagated instead so the caller
/// does not mistake an unreachable store for absent data.
pub struct ProviderChain {
    providers: Vec<Box<dyn PriceHistoryProvider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Box<dyn PriceHistoryProvider>>) -> Self {
        Self { providers }
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl PriceHistoryProvider for ProviderChain {
    fn id(&self) -> &'static str {
        "CHAIN"
    }

    async fn fetch_series_text(&self, symbol: &str) -> Result<String, MarketDataError> {
        let mut saw_miss = false;
        let mut last_fault: Option<MarketDataError> = None;
        for provider in &self.providers {
            match provider.fetch_series_text(symbol).await {
                Ok(text) => return Ok(text),
                Err(err) if err.is_not_found() => saw_miss = true,
                Err(err) => {
                    warn!(
                        "Provider {} failed for '{}': {}, trying next",
                        provider.id(),
                        symbol,
                        err
                    );
                    last_fault = Some(err);
                }
            }
        }
        match last_fault {
            Some(fault) if !saw_miss => Err(fault),
            _ => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
        }
    }
}
