use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::metrics::Metrics;
use crate::simulation::{PortfolioConfig, ValuePoint};

/// A declarative backtest request, in the shape it arrives on the wire.
///
/// The year/month window fields are numeric strings on the wire and parsed
/// here; `benchmark` may be an empty string, meaning "no benchmark".
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestRequest {
    pub portfolios: Vec<PortfolioConfig>,
    pub initial_amount: Decimal,
    #[serde_as(as = "DisplayFromStr")]
    pub start_year: i32,
    #[serde_as(as = "DisplayFromStr")]
    pub start_month: u32,
    #[serde_as(as = "DisplayFromStr")]
    pub end_year: i32,
    #[serde_as(as = "DisplayFromStr")]
    pub end_month: u32,
    #[serde(default)]
    pub benchmark: String,
}

impl BacktestRequest {
    /// The benchmark ticker, if one was actually requested.
    pub fn benchmark_ticker(&self) -> Option<&str> {
        let trimmed = self.benchmark.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Every ticker this request needs a price series for: the union of all
    /// portfolio tickers plus the benchmark.
    pub fn required_tickers(&self) -> BTreeSet<String> {
        let mut tickers: BTreeSet<String> = self
            .portfolios
            .iter()
            .flat_map(|portfolio| portfolio.tickers.iter().cloned())
            .collect();
        if let Some(benchmark) = self.benchmark_ticker() {
            tickers.insert(benchmark.to_string());
        }
        tickers
    }
}

/// Metrics plus value history for one simulated portfolio (or the
/// benchmark, which reports in the same shape).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortfolioReport {
    pub name: String,
    #[serde(flatten)]
    pub metrics: Metrics,
    #[serde(rename = "portfolioHistory")]
    pub portfolio_history: Vec<ValuePoint>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BacktestResponse {
    pub data: Vec<PortfolioReport>,
    pub benchmark: Option<PortfolioReport>,
    pub warning: Option<String>,
}
