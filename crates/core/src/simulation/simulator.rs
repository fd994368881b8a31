use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calendar::AlignedCalendar;
use crate::rebalance::rebalance_dates;

use super::{PortfolioConfig, ValuePoint};

/// Simulates a weighted, periodically rebalanced portfolio over the aligned
/// calendar, returning one `(date, value)` point per calendar date.
///
/// Share counts are fixed at date 0 from the normalized weights and only
/// change on rebalance trigger dates. A zero price on date 0 makes the whole
/// portfolio degenerate: the history comes back empty and sibling portfolios
/// in the same request are unaffected. A zero price on a trigger date skips
/// that rebalance and carries the existing shares forward.
pub fn simulate_portfolio(
    portfolio: &PortfolioConfig,
    calendar: &AlignedCalendar,
    initial_amount: Decimal,
    epsilon: Decimal,
) -> Vec<ValuePoint> {
    if portfolio.tickers.is_empty() || calendar.is_empty() {
        return Vec::new();
    }

    let mut price_rows: Vec<&[Decimal]> = Vec::with_capacity(portfolio.tickers.len());
    for ticker in &portfolio.tickers {
        match calendar.prices_for(ticker) {
            Some(row) => price_rows.push(row),
            None => {
                warn!(
                    "Portfolio '{}': ticker '{}' is absent from the aligned calendar",
                    portfolio.name, ticker
                );
                return Vec::new();
            }
        }
    }

    if price_rows.iter().any(|row| row[0].is_zero()) {
        warn!(
            "Portfolio '{}': zero price on the first aligned day, returning empty history",
            portfolio.name
        );
        return Vec::new();
    }

    let weights: Vec<Decimal> = portfolio
        .weights
        .iter()
        .map(|weight| weight / dec!(100))
        .collect();

    let mut shares: Vec<Decimal> = weights
        .iter()
        .zip(&price_rows)
        .map(|(weight, row)| initial_amount * *weight / (row[0] + epsilon))
        .collect();

    let dates = calendar.dates();
    let triggers = rebalance_dates(dates, portfolio.rebalancing_period);

    let mut history = Vec::with_capacity(dates.len());
    history.push(ValuePoint {
        date: dates[0],
        value: initial_amount,
    });

    for index in 1..dates.len() {
        let date = dates[index];
        let value: Decimal = shares
            .iter()
            .zip(&price_rows)
            .map(|(count, row)| *count * row[index])
            .sum();
        history.push(ValuePoint { date, value });

        if triggers.contains(&date) {
            if price_rows.iter().any(|row| row[index].is_zero()) {
                warn!(
                    "Portfolio '{}': zero price on rebalance date {}, carrying shares forward",
                    portfolio.name, date
                );
                continue;
            }
            for ((count, weight), row) in shares.iter_mut().zip(&weights).zip(&price_rows) {
                *count = value * *weight / (row[index] + epsilon);
            }
        }
    }

    history
}

/// The degenerate single-asset case: buy and hold, never rebalanced.
pub fn simulate_benchmark(
    ticker: &str,
    calendar: &AlignedCalendar,
    initial_amount: Decimal,
) -> Vec<ValuePoint> {
    let Some(prices) = calendar.prices_for(ticker) else {
        return Vec::new();
    };
    if prices.is_empty() {
        return Vec::new();
    }
    if prices[0].is_zero() {
        warn!(
            "Benchmark '{}': zero price on the first aligned day, returning empty history",
            ticker
        );
        return Vec::new();
    }

    let shares = initial_amount / prices[0];
    calendar
        .dates()
        .iter()
        .zip(prices)
        .map(|(date, price)| ValuePoint {
            date: *date,
            value: shares * *price,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{align_series, DateWindow};
    use crate::constants::EPSILON;
    use crate::rebalance::RebalancePeriod;
    use crate::series::PriceSeries;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::collections::{BTreeSet, HashMap};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn calendar_for(series: &[(&str, &[(&str, Decimal)])]) -> AlignedCalendar {
        let map: HashMap<String, PriceSeries> = series
            .iter()
            .map(|(ticker, rows)| {
                (
                    ticker.to_string(),
                    rows.iter().map(|(d, p)| (date(d), *p)).collect(),
                )
            })
            .collect();
        let tickers: BTreeSet<String> = map.keys().cloned().collect();
        let window = DateWindow::from_months(2019, 1, 2022, 12).unwrap();
        align_series(&map, &tickers, &window).unwrap()
    }

    fn portfolio(
        tickers: &[&str],
        weights: &[Decimal],
        period: RebalancePeriod,
    ) -> PortfolioConfig {
        PortfolioConfig {
            name: "test".to_string(),
            tickers: tickers.iter().map(|t| t.to_string()).collect(),
            weights: weights.to_vec(),
            rebalancing_period: period,
        }
    }

    fn assert_close(actual: Decimal, expected: Decimal, tolerance: Decimal) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn single_asset_never_rebalanced_tracks_price() {
        // 100% A at 1000: shares = 10; values follow the price ride exactly.
        let calendar = calendar_for(&[(
            "A",
            &[
                ("2020-01-01", dec!(100)),
                ("2020-07-01", dec!(105)),
                ("2021-01-01", dec!(121)),
            ],
        )]);
        let config = portfolio(&["A"], &[dec!(100)], RebalancePeriod::Never);
        let history = simulate_portfolio(&config, &calendar, dec!(1000), EPSILON);

        assert_eq!(history.len(), 3);
        assert_eq!(history[0].value, dec!(1000));
        assert_close(history[1].value, dec!(1050), dec!(0.001));
        assert_close(history[2].value, dec!(1210), dec!(0.001));
    }

    #[test]
    fn initial_value_matches_initial_amount() {
        let calendar = calendar_for(&[
            (
                "A",
                &[
                    ("2020-01-02", dec!(37.5)),
                    ("2020-01-03", dec!(38)),
                ],
            ),
            (
                "B",
                &[
                    ("2020-01-02", dec!(212.4)),
                    ("2020-01-03", dec!(210)),
                ],
            ),
        ]);
        let config = portfolio(&["A", "B"], &[dec!(30), dec!(70)], RebalancePeriod::Never);
        let history = simulate_portfolio(&config, &calendar, dec!(10000), EPSILON);
        assert_eq!(history[0].value, dec!(10000));
    }

    #[test]
    fn never_period_keeps_share_counts_fixed() {
        // Prices return to their starting levels on the last day; with fixed
        // shares the portfolio value must return to the initial amount.
        let calendar = calendar_for(&[
            (
                "A",
                &[
                    ("2020-01-02", dec!(100)),
                    ("2020-02-03", dec!(180)),
                    ("2020-03-02", dec!(100)),
                ],
            ),
            (
                "B",
                &[
                    ("2020-01-02", dec!(50)),
                    ("2020-02-03", dec!(20)),
                    ("2020-03-02", dec!(50)),
                ],
            ),
        ]);
        let config = portfolio(&["A", "B"], &[dec!(50), dec!(50)], RebalancePeriod::Never);
        let history = simulate_portfolio(&config, &calendar, dec!(1000), EPSILON);
        assert_close(history[2].value, dec!(1000), dec!(0.001));
    }

    #[test]
    fn monthly_rebalance_resets_to_target_weights_at_post_move_prices() {
        // A doubles, B halves; at the month boundary the 50/50 split is
        // restored against the moved prices.
        let calendar = calendar_for(&[
            (
                "A",
                &[
                    ("2020-01-02", dec!(100)),
                    ("2020-02-03", dec!(200)),
                    ("2020-02-04", dec!(200)),
                ],
            ),
            (
                "B",
                &[
                    ("2020-01-02", dec!(100)),
                    ("2020-02-03", dec!(50)),
                    ("2020-02-04", dec!(50)),
                ],
            ),
        ]);
        let config = portfolio(&["A", "B"], &[dec!(50), dec!(50)], RebalancePeriod::Monthly);
        let history = simulate_portfolio(&config, &calendar, dec!(1000), EPSILON);

        // 5 shares of each at t0; value on the trigger date = 5*200 + 5*50.
        let trigger_value = history[1].value;
        assert_close(trigger_value, dec!(1250), dec!(0.001));

        // Prices are flat afterwards, so the post-rebalance legs each hold
        // half of the trigger-date value.
        assert_close(history[2].value, trigger_value, dec!(0.001));
    }

    #[test]
    fn zero_initial_price_returns_empty_history() {
        let calendar = calendar_for(&[
            (
                "A",
                &[("2020-01-02", dec!(0)), ("2020-01-03", dec!(10))],
            ),
            (
                "B",
                &[("2020-01-02", dec!(5)), ("2020-01-03", dec!(6))],
            ),
        ]);
        let config = portfolio(&["A", "B"], &[dec!(50), dec!(50)], RebalancePeriod::Never);
        let history = simulate_portfolio(&config, &calendar, dec!(1000), EPSILON);
        assert!(history.is_empty());
    }

    #[test]
    fn zero_price_on_trigger_date_skips_that_rebalance() {
        let calendar = calendar_for(&[
            (
                "A",
                &[
                    ("2020-01-02", dec!(100)),
                    ("2020-02-03", dec!(0)),
                    ("2020-02-04", dec!(100)),
                ],
            ),
            (
                "B",
                &[
                    ("2020-01-02", dec!(100)),
                    ("2020-02-03", dec!(100)),
                    ("2020-02-04", dec!(100)),
                ],
            ),
        ]);
        let config = portfolio(&["A", "B"], &[dec!(50), dec!(50)], RebalancePeriod::Monthly);
        let history = simulate_portfolio(&config, &calendar, dec!(1000), EPSILON);

        // Shares were never redistributed, so when A recovers to 100 the
        // portfolio is back at the initial amount.
        assert_close(history[2].value, dec!(1000), dec!(0.001));
    }

    #[test]
    fn empty_ticker_list_returns_empty_history() {
        let calendar = calendar_for(&[(
            "A",
            &[("2020-01-02", dec!(1)), ("2020-01-03", dec!(2))],
        )]);
        let config = portfolio(&[], &[], RebalancePeriod::Never);
        assert!(simulate_portfolio(&config, &calendar, dec!(1000), EPSILON).is_empty());
    }

    #[test]
    fn benchmark_is_buy_and_hold() {
        let calendar = calendar_for(&[(
            "SPY",
            &[
                ("2020-01-02", dec!(100)),
                ("2020-06-01", dec!(90)),
                ("2021-01-04", dec!(130)),
            ],
        )]);
        let history = simulate_benchmark("SPY", &calendar, dec!(1000));
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].value, dec!(1000));
        assert_eq!(history[1].value, dec!(900));
        assert_eq!(history[2].value, dec!(1300));
    }

    #[test]
    fn benchmark_with_zero_start_price_is_empty() {
        let calendar = calendar_for(&[(
            "SPY",
            &[("2020-01-02", dec!(0)), ("2020-01-03", dec!(1))],
        )]);
        assert!(simulate_benchmark("SPY", &calendar, dec!(1000)).is_empty());
    }

    #[test]
    fn benchmark_for_unknown_ticker_is_empty() {
        let calendar = calendar_for(&[(
            "SPY",
            &[("2020-01-02", dec!(1)), ("2020-01-03", dec!(2))],
        )]);
        assert!(simulate_benchmark("QQQ", &calendar, dec!(1000)).is_empty());
    }
}
