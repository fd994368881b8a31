use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use backfolio_core::series::{parse_price_series, PriceSeries};
use backfolio_core::{BacktestRequest, BacktestResponse};
use backfolio_market_data::fetch_all;

use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn run_backtest(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BacktestRequest>,
) -> ApiResult<Json<BacktestResponse>> {
    let tickers = request.required_tickers();
    tracing::info!(
        "Backtest request: {} portfolio(s), {} ticker(s)",
        request.portfolios.len(),
        tickers.len()
    );

    let raw_series = fetch_all(state.provider.as_ref(), &tickers).await?;
    let series_by_ticker: HashMap<String, PriceSeries> = raw_series
        .into_iter()
        .map(|(ticker, text)| {
            let series = parse_price_series(&text);
            (ticker, series)
        })
        .collect();

    let response = state.backtest_service.run(&request, &series_by_ticker)?;
    Ok(Json(response))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/backtest", post(run_backtest))
}
