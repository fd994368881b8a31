//! Concurrent bulk retrieval of raw price series.

use std::collections::HashMap;

use futures::future::join_all;
use log::debug;

use crate::errors::MarketDataError;
use crate::provider::PriceHistoryProvider;

/// Fetches the raw series text for every symbol concurrently.
///
/// All-or-nothing: if any symbol cannot be resolved, the whole call fails
/// with [`MarketDataError::MissingSymbols`] listing every miss together, so
/// the engine can refuse the request in one round trip. A transport fault
/// on any symbol aborts immediately instead.
pub async fn fetch_all<I, S>(
    provider: &dyn PriceHistoryProvider,
    symbols: I,
) -> Result<HashMap<String, String>, MarketDataError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let symbols: Vec<String> = symbols
        .into_iter()
        .map(|symbol| symbol.as_ref().to_string())
        .collect();

    let fetches = symbols
        .iter()
        .map(|symbol| provider.fetch_series_text(symbol));
    let results = join_all(fetches).await;

    let mut series_by_symbol = HashMap::with_capacity(symbols.len());
    let mut missing = Vec::new();
    for (symbol, result) in symbols.into_iter().zip(results) {
        match result {
            Ok(text) => {
                series_by_symbol.insert(symbol, text);
            }
            Err(err) if err.is_not_found() => missing.push(symbol),
            Err(err) => return Err(err),
        }
    }

    if !missing.is_empty() {
        missing.sort();
        return Err(MarketDataError::MissingSymbols(missing));
    }

    debug!("Fetched {} price series", series_by_symbol.len());
    Ok(series_by_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Serves only the symbols it was seeded with.
    struct SeededProvider {
        known: Vec<&'static str>,
    }

    #[async_trait]
    impl PriceHistoryProvider for SeededProvider {
        fn id(&self) -> &'static str {
            "SEEDED"
        }

        async fn fetch_series_text(&self, symbol: &str) -> Result<String, MarketDataError> {
            if self.known.iter().any(|known| *known == symbol) {
                Ok(format!("Date,Close\n2020-01-02,{}\n", symbol.len()))
            } else {
                Err(MarketDataError::SymbolNotFound(symbol.to_string()))
            }
        }
    }

    #[tokio::test]
    async fn fetches_every_known_symbol() {
        let provider = SeededProvider { known: vec!["AAA", "BBB"] };
        let map = fetch_all(&provider, ["AAA", "BBB"]).await.unwrap();
        assert_eq!(map.len(), 2);
        assert!(map["AAA"].starts_with("Date,Close"));
    }

    #[tokio::test]
    async fn collects_all_misses_before_failing() {
        let provider = SeededProvider { known: vec!["AAA"] };
        let err = fetch_all(&provider, ["ZZZZ", "AAA", "YYYY"]).await.unwrap_err();
        match err {
            MarketDataError::MissingSymbols(symbols) => {
                assert_eq!(symbols, vec!["YYYY".to_string(), "ZZZZ".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn empty_symbol_list_is_fine() {
        let provider = SeededProvider { known: vec![] };
        let map = fetch_all(&provider, Vec::<String>::new()).await.unwrap();
        assert!(map.is_empty());
    }
}
