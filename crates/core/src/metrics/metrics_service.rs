use log::debug;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::constants::{DECIMAL_PRECISION, SQRT_TRADING_DAYS_APPROX};
use crate::simulation::ValuePoint;

use super::{Metrics, MetricsConfig, MetricsOutcome};

/// Computes CAGR, maximum drawdown, volatility, Sharpe, Sortino and (with a
/// benchmark) beta/alpha for one value series.
///
/// The benchmark is only consulted when it has the same length as the
/// portfolio series and, after the same low-value skip rule, yields a return
/// series of matching length with at least two points. Anything else leaves
/// beta and alpha absent.
pub fn calculate_metrics(
    history: &[ValuePoint],
    benchmark: Option<&[ValuePoint]>,
    config: &MetricsConfig,
) -> MetricsOutcome {
    if history.len() < 2 {
        return MetricsOutcome::Insufficient;
    }

    let start_value = history[0].value;
    let end_value = history[history.len() - 1].value;
    if start_value < config.epsilon {
        return MetricsOutcome::Degenerate;
    }

    let days = (history[history.len() - 1].date - history[0].date).num_days();
    let years = Decimal::from(days) / config.days_per_year;
    let cagr = annualized_growth(start_value, end_value, years, config.epsilon);

    let mdd = max_drawdown(history, config.epsilon);

    let returns = daily_returns(history, config.epsilon);
    let annualization = Decimal::from(config.trading_days_per_year)
        .sqrt()
        .unwrap_or(SQRT_TRADING_DAYS_APPROX);

    let volatility = sample_stdev(&returns) * annualization;
    let sharpe_ratio = if volatility > config.epsilon {
        (cagr - config.risk_free_rate) / volatility
    } else {
        Decimal::ZERO
    };

    let downside_deviation = downside_deviation(&returns) * annualization;
    let sortino_ratio = if downside_deviation > config.epsilon {
        (cagr - config.risk_free_rate) / downside_deviation
    } else {
        Decimal::ZERO
    };

    let (beta, alpha) = benchmark
        .map(|bench| beta_and_alpha(history, bench, &returns, cagr, years, config))
        .unwrap_or((None, None));

    MetricsOutcome::Computed(Metrics {
        cagr: cagr.round_dp(DECIMAL_PRECISION),
        mdd: mdd.round_dp(DECIMAL_PRECISION),
        volatility: volatility.round_dp(DECIMAL_PRECISION),
        sharpe_ratio: sharpe_ratio.round_dp(DECIMAL_PRECISION),
        sortino_ratio: sortino_ratio.round_dp(DECIMAL_PRECISION),
        beta: beta.map(|value| value.round_dp(DECIMAL_PRECISION)),
        alpha: alpha.map(|value| value.round_dp(DECIMAL_PRECISION)),
    })
}

/// (end/start)^(1/years) - 1, with 0 for a zero-length span and a hard -1
/// cap when the series has lost (effectively) everything.
fn annualized_growth(start: Decimal, end: Decimal, years: Decimal, epsilon: Decimal) -> Decimal {
    if years <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let growth = end / start;
    if growth <= epsilon {
        return dec!(-1);
    }
    growth.powd(Decimal::ONE / years) - Decimal::ONE
}

/// Worst peak-to-trough decline; always <= 0, and 0 for a non-decreasing
/// series.
fn max_drawdown(history: &[ValuePoint], epsilon: Decimal) -> Decimal {
    let mut peak = history[0].value;
    let mut mdd = Decimal::ZERO;
    for point in history {
        if point.value > peak {
            peak = point.value;
        }
        if peak > epsilon {
            let drawdown = (point.value - peak) / peak;
            mdd = mdd.min(drawdown);
        }
    }
    mdd
}

/// Day-over-day simple returns. A point whose predecessor is at or below
/// the epsilon floor is skipped outright rather than recorded as a crash to
/// -100%.
fn daily_returns(history: &[ValuePoint], epsilon: Decimal) -> Vec<Decimal> {
    let mut returns = Vec::with_capacity(history.len().saturating_sub(1));
    for window in history.windows(2) {
        let previous = window[0].value;
        if previous > epsilon {
            returns.push(window[1].value / previous - Decimal::ONE);
        }
    }
    returns
}

/// Sample standard deviation (denominator n-1). Volatility deliberately
/// uses the sample convention while beta uses population statistics; the
/// asymmetry is part of the engine's contract.
fn sample_stdev(returns: &[Decimal]) -> Decimal {
    if returns.len() < 2 {
        return Decimal::ZERO;
    }
    let count = Decimal::from(returns.len());
    let mean = returns.iter().sum::<Decimal>() / count;
    let sum_squared_diff: Decimal = returns
        .iter()
        .map(|&value| {
            let diff = value - mean;
            diff * diff
        })
        .sum();
    let variance = sum_squared_diff / (count - Decimal::ONE);
    variance.sqrt().unwrap_or(Decimal::ZERO)
}

/// Root mean square of the negative returns only (population denominator),
/// 0 when fewer than two downside points exist.
fn downside_deviation(returns: &[Decimal]) -> Decimal {
    let downside: Vec<Decimal> = returns
        .iter()
        .copied()
        .filter(|value| value.is_sign_negative() && !value.is_zero())
        .collect();
    if downside.len() < 2 {
        return Decimal::ZERO;
    }
    let count = Decimal::from(downside.len());
    let mean_square = downside.iter().map(|&value| value * value).sum::<Decimal>() / count;
    mean_square.sqrt().unwrap_or(Decimal::ZERO)
}

/// Regression beta against the benchmark returns and the CAPM alpha built
/// on it. Covariance and variance both use the population denominator n.
fn beta_and_alpha(
    history: &[ValuePoint],
    benchmark: &[ValuePoint],
    portfolio_returns: &[Decimal],
    cagr: Decimal,
    years: Decimal,
    config: &MetricsConfig,
) -> (Option<Decimal>, Option<Decimal>) {
    if benchmark.len() != history.len() {
        debug!(
            "Benchmark series length {} does not match portfolio length {}, skipping beta/alpha",
            benchmark.len(),
            history.len()
        );
        return (None, None);
    }

    let benchmark_returns = daily_returns(benchmark, config.epsilon);
    if benchmark_returns.len() != portfolio_returns.len() || portfolio_returns.len() < 2 {
        return (None, None);
    }

    let count = Decimal::from(portfolio_returns.len());
    let portfolio_mean = portfolio_returns.iter().sum::<Decimal>() / count;
    let benchmark_mean = benchmark_returns.iter().sum::<Decimal>() / count;

    let mut covariance = Decimal::ZERO;
    let mut benchmark_variance = Decimal::ZERO;
    for (p, b) in portfolio_returns.iter().zip(&benchmark_returns) {
        let p_diff = *p - portfolio_mean;
        let b_diff = *b - benchmark_mean;
        covariance += p_diff * b_diff;
        benchmark_variance += b_diff * b_diff;
    }
    covariance /= count;
    benchmark_variance /= count;

    if benchmark_variance <= config.epsilon {
        return (None, None);
    }
    let beta = covariance / benchmark_variance;

    let benchmark_start = benchmark[0].value;
    if benchmark_start <= config.epsilon {
        return (Some(beta), None);
    }
    let benchmark_end = benchmark[benchmark.len() - 1].value;
    let benchmark_cagr =
        annualized_growth(benchmark_start, benchmark_end, years, config.epsilon);
    let expected_return =
        config.risk_free_rate + beta * (benchmark_cagr - config.risk_free_rate);
    let alpha = cagr - expected_return;

    (Some(beta), Some(alpha))
}
