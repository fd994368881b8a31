use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DAYS_PER_YEAR, DEFAULT_RISK_FREE_RATE, EPSILON, TRADING_DAYS_PER_YEAR,
};

/// Explicit configuration for the metrics calculator.
///
/// These were ambient globals in earlier iterations of the engine; they are
/// passed in so two requests can use different risk-free rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsConfig {
    /// Annual risk-free rate used for Sharpe and Sortino excess returns.
    pub risk_free_rate: Decimal,
    /// Trading days per year used to annualize daily statistics.
    pub trading_days_per_year: u32,
    /// Calendar days per year used for CAGR year counting.
    pub days_per_year: Decimal,
    /// Near-zero guard for divisions and degenerate-value detection.
    pub epsilon: Decimal,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
            days_per_year: DAYS_PER_YEAR,
            epsilon: EPSILON,
        }
    }
}

/// The standard risk/return statistics for one value series.
///
/// `beta` and `alpha` are `None` when not computable (no benchmark,
/// mismatched return series, or degenerate benchmark variance) — absent is
/// distinct from a computed zero, and serializes as JSON `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metrics {
    pub cagr: Decimal,
    pub mdd: Decimal,
    pub volatility: Decimal,
    pub sharpe_ratio: Decimal,
    pub sortino_ratio: Decimal,
    pub beta: Option<Decimal>,
    pub alpha: Option<Decimal>,
}

impl Metrics {
    pub(crate) fn zeroed() -> Self {
        Self {
            cagr: Decimal::ZERO,
            mdd: Decimal::ZERO,
            volatility: Decimal::ZERO,
            sharpe_ratio: Decimal::ZERO,
            sortino_ratio: Decimal::ZERO,
            beta: None,
            alpha: None,
        }
    }
}

/// Outcome of a metrics calculation, before collapsing to the wire shape.
///
/// Degenerate and insufficient inputs are explicit variants instead of
/// sentinel values; the `-1` full-loss marker for MDD only appears when an
/// outcome is turned into its canonical report.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsOutcome {
    /// Enough data; all ratios computed.
    Computed(Metrics),
    /// Fewer than two value points: nothing can be derived.
    Insufficient,
    /// The series starts at (effectively) zero value.
    Degenerate,
}

impl MetricsOutcome {
    /// Collapses the outcome into the canonical metrics record reported at
    /// the request boundary.
    pub fn into_report(self) -> Metrics {
        match self {
            MetricsOutcome::Computed(metrics) => metrics,
            MetricsOutcome::Insufficient => Metrics::zeroed(),
            MetricsOutcome::Degenerate => Metrics {
                mdd: dec!(-1),
                ..Metrics::zeroed()
            },
        }
    }
}
