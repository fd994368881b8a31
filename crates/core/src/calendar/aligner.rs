use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{EngineError, Result};
use crate::series::PriceSeries;

use super::{AlignedCalendar, DateWindow};

/// Merges per-ticker price series onto one common calendar.
///
/// The calendar is the union of all dates inside the window, restricted to
/// dates where *every* requested ticker has a price. A single missing ticker
/// on a date removes that date for all tickers; no price is ever
/// synthesized or carried forward.
///
/// Fails with [`EngineError::InsufficientCommonDays`] when fewer than two
/// common dates remain, and with [`EngineError::MissingTickers`] when a
/// requested ticker has no series at all.
pub fn align_series(
    series_by_ticker: &HashMap<String, PriceSeries>,
    tickers: &BTreeSet<String>,
    window: &DateWindow,
) -> Result<AlignedCalendar> {
    let missing: Vec<String> = tickers
        .iter()
        .filter(|ticker| !series_by_ticker.contains_key(*ticker))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(EngineError::MissingTickers(missing).into());
    }

    let mut union: BTreeSet<NaiveDate> = BTreeSet::new();
    for ticker in tickers {
        if let Some(series) = series_by_ticker.get(ticker) {
            union.extend(series.dates().filter(|date| window.contains(date)));
        }
    }

    let dates: Vec<NaiveDate> = union
        .into_iter()
        .filter(|date| {
            tickers.iter().all(|ticker| {
                series_by_ticker
                    .get(ticker)
                    .is_some_and(|series| series.price_on(date).is_some())
            })
        })
        .collect();

    if dates.len() < 2 {
        return Err(EngineError::InsufficientCommonDays { found: dates.len() }.into());
    }

    debug!(
        "Aligned {} ticker(s) onto {} common trading days ({} to {})",
        tickers.len(),
        dates.len(),
        dates[0],
        dates[dates.len() - 1]
    );

    let mut prices: HashMap<String, Vec<Decimal>> = HashMap::with_capacity(tickers.len());
    for ticker in tickers {
        if let Some(series) = series_by_ticker.get(ticker) {
            let row: Vec<Decimal> = dates
                .iter()
                .filter_map(|date| series.price_on(date))
                .collect();
            prices.insert(ticker.clone(), row);
        }
    }

    Ok(AlignedCalendar::new(dates, prices))
}
