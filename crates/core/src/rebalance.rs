//! Rebalance scheduling: which calendar dates re-apply the target weights.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How often a portfolio's target weights are re-applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RebalancePeriod {
    /// The initial allocation persists for the life of the simulation.
    #[default]
    Never,
    Annually,
    Quarterly,
    Monthly,
}

/// The scheduling bucket a date falls into for a given period.
///
/// Modeled as an explicit enum rather than a concatenated year/month string
/// so that bucket transitions are a plain equality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketKey {
    Year(i32),
    Quarter(i32, u32),
    Month(i32, u32),
}

/// Pure transition function from date to scheduling bucket.
/// Returns `None` for [`RebalancePeriod::Never`].
pub fn bucket_of(date: NaiveDate, period: RebalancePeriod) -> Option<BucketKey> {
    match period {
        RebalancePeriod::Never => None,
        RebalancePeriod::Annually => Some(BucketKey::Year(date.year())),
        RebalancePeriod::Quarterly => {
            Some(BucketKey::Quarter(date.year(), (date.month() - 1) / 3 + 1))
        }
        RebalancePeriod::Monthly => Some(BucketKey::Month(date.year(), date.month())),
    }
}

/// Derives the set of trigger dates from an aligned calendar.
///
/// A trigger fires on the first date of every new bucket, scanning left to
/// right. The very first calendar date never triggers: the initial share
/// allocation already encodes the target weights, and day 0 must not count
/// as a rebalance event downstream.
pub fn rebalance_dates(dates: &[NaiveDate], period: RebalancePeriod) -> HashSet<NaiveDate> {
    let mut triggers = HashSet::new();
    let mut last_bucket: Option<BucketKey> = None;

    for (index, date) in dates.iter().enumerate() {
        let Some(bucket) = bucket_of(*date, period) else {
            break;
        };
        if last_bucket != Some(bucket) {
            if index > 0 {
                triggers.insert(*date);
            }
            last_bucket = Some(bucket);
        }
    }

    triggers
}
