//! Forecasting engines.
//!
//! - [`TrendProjection`]: least-squares trend over a trailing window, with
//!   bounds that widen linearly with the horizon.

mod traits;
mod trend;

pub use traits::{BoxedProjector, Projector};
pub use trend::{
    project, project_with_granularity, TrendProjection, TrendProjectionBuilder, WindowFit,
};
