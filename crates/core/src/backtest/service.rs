use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use crate::calendar::{align_series, DateWindow};
use crate::errors::{EngineError, Result, ValidationError};
use crate::metrics::{calculate_metrics, MetricsConfig};
use crate::series::PriceSeries;
use crate::simulation::{simulate_benchmark, simulate_portfolio};

use super::{BacktestRequest, BacktestResponse, PortfolioReport};

/// Runs whole backtest requests against a completed ticker-to-series
/// mapping.
///
/// The service is synchronous and side-effect free: fetching the raw series
/// is the market-data collaborator's job, and a request either completes
/// for every portfolio or is rejected as a whole. Degenerate portfolios
/// (zero price on the first aligned day) are the one exception: they come
/// back with an empty history and default metrics while their siblings run
/// normally, and the response `warning` names them.
#[derive(Debug, Clone, Default)]
pub struct BacktestService {
    metrics_config: MetricsConfig,
}

impl BacktestService {
    pub fn new(metrics_config: MetricsConfig) -> Self {
        Self { metrics_config }
    }

    pub fn run(
        &self,
        request: &BacktestRequest,
        series_by_ticker: &HashMap<String, PriceSeries>,
    ) -> Result<BacktestResponse> {
        self.validate(request)?;

        let tickers = request.required_tickers();
        let missing: Vec<String> = tickers
            .iter()
            .filter(|ticker| !series_by_ticker.contains_key(*ticker))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(EngineError::MissingTickers(missing).into());
        }

        let window = DateWindow::from_months(
            request.start_year,
            request.start_month,
            request.end_year,
            request.end_month,
        )?;
        let calendar = align_series(series_by_ticker, &tickers, &window)?;

        let mut degenerate: Vec<String> = Vec::new();

        let benchmark_history = request
            .benchmark_ticker()
            .map(|ticker| simulate_benchmark(ticker, &calendar, request.initial_amount));

        let benchmark = match (request.benchmark_ticker(), &benchmark_history) {
            (Some(ticker), Some(history)) => {
                if history.is_empty() {
                    degenerate.push(ticker.to_string());
                }
                let metrics =
                    calculate_metrics(history, None, &self.metrics_config).into_report();
                Some(PortfolioReport {
                    name: ticker.to_string(),
                    metrics,
                    portfolio_history: history.clone(),
                })
            }
            _ => None,
        };

        // A degenerate benchmark can't anchor beta/alpha.
        let benchmark_for_beta = benchmark_history
            .as_deref()
            .filter(|history| !history.is_empty());

        let mut data = Vec::with_capacity(request.portfolios.len());
        for portfolio in &request.portfolios {
            let history = simulate_portfolio(
                portfolio,
                &calendar,
                request.initial_amount,
                self.metrics_config.epsilon,
            );
            if history.is_empty() {
                degenerate.push(portfolio.name.clone());
            }
            let metrics =
                calculate_metrics(&history, benchmark_for_beta, &self.metrics_config)
                    .into_report();
            debug!(
                "Portfolio '{}': {} value points over {} calendar days",
                portfolio.name,
                history.len(),
                calendar.len()
            );
            data.push(PortfolioReport {
                name: portfolio.name.clone(),
                metrics,
                portfolio_history: history,
            });
        }

        let warning = (!degenerate.is_empty()).then(|| {
            format!(
                "No usable simulation for: {} (zero price on the first aligned trading day)",
                degenerate.join(", ")
            )
        });

        Ok(BacktestResponse {
            data,
            benchmark,
            warning,
        })
    }

    fn validate(&self, request: &BacktestRequest) -> Result<()> {
        if request.initial_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "initialAmount must be positive".to_string(),
            )
            .into());
        }
        for portfolio in &request.portfolios {
            if portfolio.tickers.len() != portfolio.weights.len() {
                return Err(ValidationError::MismatchedWeights(portfolio.name.clone()).into());
            }
        }
        Ok(())
    }
}
