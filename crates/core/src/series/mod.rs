//! Per-ticker daily price series and the raw-text parser that produces them.

mod model;
mod parser;

pub use model::PriceSeries;
pub use parser::parse_price_series;
