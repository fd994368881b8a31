use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use super::PriceSeries;

/// Parses raw price-feed text (a header line followed by `date,price` rows)
/// into a [`PriceSeries`].
///
/// Rows with a missing field, an unparseable date, or a non-numeric price
/// are dropped; a bad row never fails the whole series. Zero data rows
/// produce an empty series, which the aligner rejects downstream.
pub fn parse_price_series(raw: &str) -> PriceSeries {
    let mut series = PriceSeries::new();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut dropped = 0usize;
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(_) => {
                dropped += 1;
                continue;
            }
        };
        let (Some(date_field), Some(price_field)) = (record.get(0), record.get(1)) else {
            dropped += 1;
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(date_field.trim(), "%Y-%m-%d") else {
            dropped += 1;
            continue;
        };
        let Ok(price) = price_field.trim().parse::<Decimal>() else {
            dropped += 1;
            continue;
        };
        // Last write wins on duplicate dates.
        series.insert(date, price);
    }

    if dropped > 0 {
        debug!("Dropped {} malformed price row(s)", dropped);
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parses_header_and_rows() {
        let raw = "Date,Close\n2020-01-02,100.5\n2020-01-03,101.25\n";
        let series = parse_price_series(raw);
        assert_eq!(series.len(), 2);
        assert_eq!(series.price_on(&date("2020-01-02")), Some(dec!(100.5)));
        assert_eq!(series.price_on(&date("2020-01-03")), Some(dec!(101.25)));
    }

    #[test]
    fn drops_malformed_rows() {
        let raw = "Date,Close\n\
                   2020-01-02,100\n\
                   not-a-date,50\n\
                   2020-01-03,abc\n\
                   2020-01-06\n\
                   2020-01-07,103\n";
        let series = parse_price_series(raw);
        assert_eq!(series.len(), 2);
        assert_eq!(series.price_on(&date("2020-01-07")), Some(dec!(103)));
        assert_eq!(series.price_on(&date("2020-01-06")), None);
    }

    #[test]
    fn duplicate_dates_resolve_last_write_wins() {
        let raw = "Date,Close\n2020-01-02,100\n2020-01-02,105\n2020-01-03,110\n";
        let series = parse_price_series(raw);
        assert_eq!(series.len(), 2);
        assert_eq!(series.price_on(&date("2020-01-02")), Some(dec!(105)));
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(parse_price_series("").is_empty());
        assert!(parse_price_series("Date,Close\n").is_empty());
    }

    #[test]
    fn dates_iterate_in_ascending_order() {
        let raw = "Date,Close\n2020-03-02,3\n2020-01-02,1\n2020-02-03,2\n";
        let series = parse_price_series(raw);
        let dates: Vec<_> = series.dates().copied().collect();
        assert_eq!(
            dates,
            vec![date("2020-01-02"), date("2020-02-03"), date("2020-03-02")]
        );
    }
}
