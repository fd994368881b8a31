use rust_decimal::Decimal;

use backfolio_core::constants::DEFAULT_RISK_FREE_RATE;

/// Server configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Local directory of `<SYMBOL>.csv` price files.
    pub price_store_dir: String,
    /// Optional remote store serving the same layout, tried after the
    /// local directory.
    pub price_store_url: Option<String>,
    /// Annual risk-free rate used in Sharpe/Sortino.
    pub risk_free_rate: Decimal,
}

impl Config {
    pub fn from_env() -> Self {
        let risk_free_rate = match std::env::var("BACKFOLIO_RISK_FREE_RATE") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                eprintln!("Ignoring unparseable BACKFOLIO_RISK_FREE_RATE: {raw}");
                DEFAULT_RISK_FREE_RATE
            }),
            Err(_) => DEFAULT_RISK_FREE_RATE,
        };

        Self {
            listen_addr: std::env::var("BACKFOLIO_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            price_store_dir: std::env::var("BACKFOLIO_PRICE_DIR")
                .unwrap_or_else(|_| "./data/prices".to_string()),
            price_store_url: std::env::var("BACKFOLIO_PRICE_URL").ok(),
            risk_free_rate,
        }
    }
}
