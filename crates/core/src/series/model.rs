use std::collections::btree_map::{BTreeMap, Iter};

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// An ordered mapping of calendar day to closing price for one ticker.
///
/// Built once by the parser and immutable afterwards. Duplicate dates
/// resolve last-write-wins; ordering across tickers is established later by
/// the aligner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries(BTreeMap<NaiveDate, Decimal>);

impl PriceSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, price: Decimal) {
        self.0.insert(date, price);
    }

    pub fn price_on(&self, date: &NaiveDate) -> Option<Decimal> {
        self.0.get(date).copied()
    }

    /// Dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.0.keys()
    }

    pub fn iter(&self) -> Iter<'_, NaiveDate, Decimal> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(NaiveDate, Decimal)> for PriceSeries {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, Decimal)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
