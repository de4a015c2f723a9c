//! # civic-forecast
//!
//! Forecasting engine for aggregated municipal trip counts.
//!
//! Takes a dense, chronologically ordered series of per-period counts and
//! extends it with a least-squares trend and bounds that widen with the
//! horizon. The engine is a pure numeric transform: it knows observation
//! indices only, and calendar periods are attached afterwards with
//! [`core::label_periods`].
//!
//! ```
//! use civic_forecast::prelude::*;
//!
//! let trips = [120.0, 130.0, 125.0, 140.0, 150.0];
//! let points = project(&trips, 3, Granularity::Daily.window_size());
//! assert_eq!(points.len(), trips.len() + 3);
//! assert!(points[5..].iter().all(|p| !p.historical && p.lower_bound >= 0.0));
//! ```

pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{label_periods, ForecastPoint, ForecastSplit, Granularity};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{project, Projector, TrendProjection};
    pub use crate::utils::trailing_mean;
}
