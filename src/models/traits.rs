//! Projector trait defining the common interface for forecasting engines.

use crate::core::ForecastPoint;

/// Common interface for engines that extend an observed series.
///
/// Implementations echo every observation as a historical point and then
/// append `periods_ahead` projected points. They never fail: degenerate input
/// yields a degenerate (but well-formed) forecast.
///
/// This trait is object-safe and can be used with `Box<dyn Projector>`.
pub trait Projector {
    /// Project `periods_ahead` steps past the end of `historical`.
    fn project(&self, historical: &[f64], periods_ahead: usize) -> Vec<ForecastPoint>;

    /// Get the engine name.
    fn name(&self) -> &str;
}

/// Type alias for boxed projector trait objects.
///
/// # Example
///
/// ```
/// use civic_forecast::models::{BoxedProjector, Projector, TrendProjection};
///
/// let engine: BoxedProjector = Box::new(TrendProjection::new(14));
/// assert_eq!(engine.name(), "TrendProjection");
/// ```
pub type BoxedProjector = Box<dyn Projector + Send + Sync>;
