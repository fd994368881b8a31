use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rebalance::RebalancePeriod;

/// One user-defined portfolio: weighted tickers plus a rebalancing period.
///
/// Ticker order is significant for weight pairing. Weights are percentage
/// points; they are expected to sum to 100 but that is not enforced — the
/// simulator normalizes by dividing by 100 either way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub name: String,
    pub tickers: Vec<String>,
    pub weights: Vec<Decimal>,
    pub rebalancing_period: RebalancePeriod,
}

/// One mark-to-market point of a simulated value series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ValuePoint {
    pub date: NaiveDate,
    pub value: Decimal,
}
