use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;

use crate::errors::MarketDataError;

use super::PriceHistoryProvider;

/// Fetches price histories from a remote object store or CDN that serves
/// one `<SYMBOL>.csv` per symbol under a common base URL.
pub struct HttpStoreProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStoreProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url_for(&self, symbol: &str) -> String {
        format!("{}/{}.csv", self.base_url, symbol)
    }
}

#[async_trait]
impl PriceHistoryProvider for HttpStoreProvider {
    fn id(&self) -> &'static str {
        "HTTP_STORE"
    }

    async fn fetch_series_text(&self, symbol: &str) -> Result<String, MarketDataError> {
        let url = self.url_for(symbol);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        if !response.status().is_success() {
            return Err(MarketDataError::Provider {
                provider: self.id().to_string(),
                message: format!("{} returned {}", url, response.status()),
            });
        }

        let text = response.text().await?;
        debug!("Fetched {} bytes for '{}' from {}", text.len(), symbol, url);
        Ok(text)
    }
}
