use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use backfolio_core::backtest::BacktestService;
use backfolio_core::metrics::MetricsConfig;
use backfolio_market_data::{
    FileStoreProvider, HttpStoreProvider, PriceHistoryProvider, ProviderChain,
};

use crate::config::Config;

pub struct AppState {
    pub provider: Arc<dyn PriceHistoryProvider>,
    pub backtest_service: BacktestService,
}

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let mut providers: Vec<Box<dyn PriceHistoryProvider>> =
        vec![Box::new(FileStoreProvider::new(&config.price_store_dir))];
    if let Some(base_url) = &config.price_store_url {
        providers.push(Box::new(HttpStoreProvider::new(base_url)));
    }
    let provider: Arc<dyn PriceHistoryProvider> = Arc::new(ProviderChain::new(providers));

    let metrics_config = MetricsConfig {
        risk_free_rate: config.risk_free_rate,
        ..MetricsConfig::default()
    };

    Ok(Arc::new(AppState {
        provider,
        backtest_service: BacktestService::new(metrics_config),
    }))
}
