//! Price history providers and the fallback chain across them.

mod chain;
mod file_store;
mod http_store;
mod traits;

pub use chain::ProviderChain;
pub use file_store::FileStoreProvider;
pub use http_store::HttpStoreProvider;
pub use traits::PriceHistoryProvider;
