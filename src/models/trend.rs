//! Trend projection with horizon-widening bounds.
//!
//! The forecast is `y_hat[t+i] = y[t] + i * trend`, where the trend is the
//! least-squares slope of a trailing window. Bounds are
//! `y_hat ± dispersion * (1 + 0.2 * i)` with dispersion the population
//! standard deviation of the same window. This widening rule is a fixed
//! heuristic, not a statistical prediction interval.

use tracing::{debug, trace};

use crate::core::{ForecastPoint, Granularity};
use crate::error::{ForecastError, Result};
use crate::models::Projector;
use crate::utils::{trailing_slope, trailing_std_dev};

/// Growth of the bound multiplier per projected step.
const WIDENING_PER_STEP: f64 = 0.2;

/// Smallest window a trend can be estimated from.
const MIN_WINDOW: usize = 2;

/// Window estimates a projection is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowFit {
    /// Effective window after clamping.
    pub window_size: usize,
    /// Slope per period.
    pub trend: f64,
    /// Population standard deviation of the window.
    pub dispersion: f64,
    /// Most recent observation, the projection origin.
    pub last_value: f64,
}

impl WindowFit {
    /// Projected point `step` periods past the last observation.
    ///
    /// `predicted` and `lower_bound` are floored at zero; `upper_bound` is not.
    pub fn point_at(&self, step: usize) -> ForecastPoint {
        let step = step as f64;
        let predicted = self.last_value + self.trend * step;
        let multiplier = 1.0 + WIDENING_PER_STEP * step;
        let lower = predicted - self.dispersion * multiplier;
        let upper = predicted + self.dispersion * multiplier;

        ForecastPoint::projected(predicted.max(0.0), lower.max(0.0), upper)
    }
}

/// Linear-trend forecaster over a trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendProjection {
    window: usize,
}

/// Builder for TrendProjection.
#[derive(Debug, Clone, Default)]
pub struct TrendProjectionBuilder {
    window: Option<usize>,
}

impl TrendProjectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trailing window size.
    pub fn window(mut self, window: usize) -> Self {
        self.window = Some(window);
        self
    }

    /// Take the window from a reporting granularity.
    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.window = Some(granularity.window_size());
        self
    }

    pub fn build(self) -> Result<TrendProjection> {
        let window = self
            .window
            .unwrap_or_else(|| Granularity::default().window_size());
        if window == 0 {
            return Err(ForecastError::InvalidParameter(
                "window must be positive".to_string(),
            ));
        }
        Ok(TrendProjection { window })
    }
}

impl TrendProjection {
    /// Create a projector with the given trailing window.
    ///
    /// Windows larger than the series are clamped at projection time.
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Create a builder for validated configuration.
    pub fn builder() -> TrendProjectionBuilder {
        TrendProjectionBuilder::new()
    }

    /// Projector using the window preset of a granularity.
    pub fn for_granularity(granularity: Granularity) -> Self {
        Self::new(granularity.window_size())
    }

    /// Get the configured window size.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Effective window for a series of `len` observations.
    ///
    /// Raised to two points where the series allows, never past `len`.
    fn effective_window(&self, len: usize) -> usize {
        self.window.min(len).max(MIN_WINDOW).min(len)
    }

    /// Estimate trend and dispersion for `historical`.
    ///
    /// Returns `None` for an empty series.
    pub fn fit_window(&self, historical: &[f64]) -> Option<WindowFit> {
        let &last_value = historical.last()?;
        let window_size = self.effective_window(historical.len());
        if window_size != self.window {
            trace!(
                requested = self.window,
                effective = window_size,
                observations = historical.len(),
                "window clamped to available data"
            );
        }

        Some(WindowFit {
            window_size,
            trend: trailing_slope(historical, window_size),
            dispersion: trailing_std_dev(historical, window_size),
            last_value,
        })
    }
}

impl Default for TrendProjection {
    fn default() -> Self {
        Self::for_granularity(Granularity::default())
    }
}

impl Projector for TrendProjection {
    fn project(&self, historical: &[f64], periods_ahead: usize) -> Vec<ForecastPoint> {
        let Some(fit) = self.fit_window(historical) else {
            trace!("empty series, nothing to project");
            return Vec::new();
        };

        debug!(
            observations = historical.len(),
            periods_ahead,
            window_size = fit.window_size,
            trend = fit.trend,
            dispersion = fit.dispersion,
            "projecting trend"
        );

        let mut points = Vec::with_capacity(historical.len() + periods_ahead);
        points.extend(historical.iter().copied().map(ForecastPoint::observed));
        points.extend((1..=periods_ahead).map(|step| fit.point_at(step)));
        points
    }

    fn name(&self) -> &str {
        "TrendProjection"
    }
}

/// Project `periods_ahead` steps using a trailing window of `window_size`.
///
/// # Example
/// ```
/// use civic_forecast::models::project;
///
/// let points = project(&[10.0, 12.0, 14.0, 16.0, 18.0], 3, 5);
/// let projected: Vec<f64> = points[5..].iter().map(|p| p.predicted).collect();
/// assert_eq!(projected, vec![20.0, 22.0, 24.0]);
/// ```
pub fn project(historical: &[f64], periods_ahead: usize, window_size: usize) -> Vec<ForecastPoint> {
    TrendProjection::new(window_size).project(historical, periods_ahead)
}

/// Project with the horizon and window preset of `granularity`.
pub fn project_with_granularity(historical: &[f64], granularity: Granularity) -> Vec<ForecastPoint> {
    TrendProjection::for_granularity(granularity).project(historical, granularity.periods_ahead())
}
