//! Numeric helpers shared by the projector and its callers.

pub mod ols;
pub mod stats;

pub use ols::{index_slope, trailing_slope};
pub use stats::{trailing_mean, trailing_std_dev, trailing_window};
