//! Core data structures for forecast output and reporting periods.

mod forecast;
mod granularity;
mod labels;

pub use forecast::{ForecastPoint, ForecastSplit};
pub use granularity::Granularity;
pub use labels::label_periods;
