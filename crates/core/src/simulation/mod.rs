//! Share-based wealth evolution over the aligned calendar.

mod model;
mod simulator;

pub use model::{PortfolioConfig, ValuePoint};
pub use simulator::{simulate_benchmark, simulate_portfolio};
