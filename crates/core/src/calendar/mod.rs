//! The common trading calendar shared by every ticker in a request.

mod aligner;
mod model;

pub use aligner::align_series;
pub use model::{AlignedCalendar, DateWindow};
