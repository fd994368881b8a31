use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};

/// A request window expressed in whole months: inclusive first day of the
/// start month through the inclusive last day of the end month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    pub fn from_months(
        start_year: i32,
        start_month: u32,
        end_year: i32,
        end_month: u32,
    ) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(start_year, start_month, 1).ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "invalid start of window: {}-{}",
                start_year, start_month
            ))
        })?;
        let end_month_start = NaiveDate::from_ymd_opt(end_year, end_month, 1).ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "invalid end of window: {}-{}",
                end_year, end_month
            ))
        })?;
        let end = Self::last_day_of_month(end_month_start);
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        *date >= self.start && *date <= self.end
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    fn last_day_of_month(first_day: NaiveDate) -> NaiveDate {
        let next_month = if first_day.month() == 12 {
            NaiveDate::from_ymd_opt(first_day.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first_day.year(), first_day.month() + 1, 1)
        };
        match next_month {
            Some(day) => day - Duration::days(1),
            // Only reachable at the far end of the supported date range.
            None => first_day,
        }
    }
}

/// An increasing sequence of dates plus, for each ticker, an equal-length
/// price row. Every index has a defined price for every ticker (strict
/// intersection semantics, no forward-fill).
#[derive(Debug, Clone, Default)]
pub struct AlignedCalendar {
    dates: Vec<NaiveDate>,
    prices: HashMap<String, Vec<Decimal>>,
}

impl AlignedCalendar {
    pub(crate) fn new(dates: Vec<NaiveDate>, prices: HashMap<String, Vec<Decimal>>) -> Self {
        Self { dates, prices }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The price row for one ticker, index-aligned with [`dates`](Self::dates).
    pub fn prices_for(&self, ticker: &str) -> Option<&[Decimal]> {
        self.prices.get(ticker).map(|row| row.as_slice())
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
