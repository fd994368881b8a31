use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;

use crate::errors::MarketDataError;

use super::PriceHistoryProvider;

/// Reads price histories from a local directory of `<SYMBOL>.csv` files,
/// the layout produced by the data updater's price download job.
pub struct FileStoreProvider {
    root: PathBuf,
}

impl FileStoreProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, symbol: &str) -> PathBuf {
        self.root.join(format!("{symbol}.csv"))
    }
}

#[async_trait]
impl PriceHistoryProvider for FileStoreProvider {
    fn id(&self) -> &'static str {
        "FILE_STORE"
    }

    async fn fetch_series_text(&self, symbol: &str) -> Result<String, MarketDataError> {
        let path = self.path_for(symbol);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                debug!("Loaded {} bytes for '{}' from {:?}", text.len(), symbol, path);
                Ok(text)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(MarketDataError::SymbolNotFound(symbol.to_string()))
            }
            Err(err) => Err(MarketDataError::Io(format!(
                "failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }
}
