//! Backfolio Market Data Crate
//!
//! The engine's external collaborator: provider-agnostic retrieval of raw
//! per-ticker daily price text. The engine itself never performs I/O; this
//! crate hands it a completed symbol-to-text mapping.
//!
//! # Overview
//!
//! - [`PriceHistoryProvider`] - trait implemented by every price source
//! - [`FileStoreProvider`] - reads `<root>/<SYMBOL>.csv` from a local store
//! - [`HttpStoreProvider`] - fetches `<base>/<SYMBOL>.csv` from a remote store
//! - [`ProviderChain`] - ordered fallback across providers
//! - [`fetch_all`] - concurrent bulk fetch that reports every missing
//!   symbol at once
//!
//! There is no retry, caching, or rate limiting here: a symbol either
//! resolves through the chain or the whole request fails fast.

pub mod errors;
pub mod fetch;
pub mod provider;

pub use errors::MarketDataError;
pub use fetch::fetch_all;
pub use provider::{FileStoreProvider, HttpStoreProvider, PriceHistoryProvider, ProviderChain};
