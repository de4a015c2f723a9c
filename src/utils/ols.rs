//! Least-squares trend over a trailing window.

use crate::utils::stats::trailing_window;

/// OLS slope of `series` against its own positions `0..n`.
///
/// Uses the closed form `(n·ΣXY − ΣX·ΣY) / (n·ΣX² − (ΣX)²)`. A zero
/// denominator (fewer than two points) yields a slope of 0.
pub fn index_slope(series: &[f64]) -> f64 {
    let n = series.len() as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for (i, &y) in series.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = n * sum_x2 - sum_x * sum_x;

    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

/// Trend of the last `window` observations, re-indexed from zero.
///
/// # Example
/// ```
/// use civic_forecast::utils::trailing_slope;
///
/// // Only the last three points count: 7, 9, 11
/// let slope = trailing_slope(&[50.0, 1.0, 7.0, 9.0, 11.0], 3);
/// assert!((slope - 2.0).abs() < 1e-12);
/// ```
pub fn trailing_slope(values: &[f64], window: usize) -> f64 {
    let window = trailing_window(values, window);
    if window.len() < 2 {
        return 0.0;
    }
    index_slope(window)
}
