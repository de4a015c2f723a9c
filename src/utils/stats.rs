//! Window statistics used by the projector.

/// Return the last `window` observations of `values`.
///
/// The window is clamped to the series length, so asking for more points
/// than exist yields the whole series.
pub fn trailing_window(values: &[f64], window: usize) -> &[f64] {
    let window = window.min(values.len());
    &values[values.len() - window..]
}

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divisor `n`) of a slice.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / values.len() as f64
}

/// Population standard deviation of the last `window` observations.
///
/// Windows shorter than two points carry no spread and return 0.
///
/// # Example
/// ```
/// use civic_forecast::utils::trailing_std_dev;
///
/// let spread = trailing_std_dev(&[10.0, 12.0, 14.0, 16.0, 18.0], 5);
/// assert!((spread - 8.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn trailing_std_dev(values: &[f64], window: usize) -> f64 {
    let window = trailing_window(values, window);
    if window.len() < 2 {
        return 0.0;
    }
    population_variance(window).sqrt()
}

/// Unweighted mean of the last `window` observations.
///
/// Returns 0 for an empty series or a zero window.
///
/// # Example
/// ```
/// use civic_forecast::utils::trailing_mean;
///
/// assert_eq!(trailing_mean(&[1.0, 2.0, 3.0, 4.0], 2), 3.5);
/// assert_eq!(trailing_mean(&[], 7), 0.0);
/// ```
pub fn trailing_mean(values: &[f64], window: usize) -> f64 {
    let window = trailing_window(values, window);
    if window.is_empty() {
        return 0.0;
    }
    mean(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn trailing_window_clamps_to_length() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(trailing_window(&values, 2), &[2.0, 3.0]);
        assert_eq!(trailing_window(&values, 10), &[1.0, 2.0, 3.0]);
        assert!(trailing_window(&values, 0).is_empty());
        assert!(trailing_window(&[], 4).is_empty());
    }

    #[test]
    fn mean_calculates_correctly() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(mean(&[10.0]), 10.0, epsilon = 1e-10);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn population_variance_divides_by_n() {
        // Sample variance of [1, 2, 3, 4, 5] is 2.5, population variance is 2.0
        assert_relative_eq!(
            population_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            2.0,
            epsilon = 1e-10
        );
        assert_relative_eq!(population_variance(&[7.0]), 0.0, epsilon = 1e-10);
        assert!(population_variance(&[]).is_nan());
    }

    #[test]
    fn trailing_std_dev_uses_only_the_window() {
        let values = [100.0, -50.0, 10.0, 12.0, 14.0, 16.0, 18.0];
        assert_relative_eq!(trailing_std_dev(&values, 5), 8.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn trailing_std_dev_short_windows_are_zero() {
        assert_eq!(trailing_std_dev(&[5.0], 10), 0.0);
        assert_eq!(trailing_std_dev(&[5.0, 9.0], 1), 0.0);
        assert_eq!(trailing_std_dev(&[], 3), 0.0);
    }

    #[test]
    fn trailing_std_dev_constant_window_is_zero() {
        assert_relative_eq!(trailing_std_dev(&[4.0; 8], 6), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn trailing_mean_clamps_window() {
        assert_relative_eq!(trailing_mean(&[2.0, 4.0, 6.0], 10), 4.0, epsilon = 1e-12);
        assert_relative_eq!(trailing_mean(&[2.0, 4.0, 6.0], 1), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn trailing_mean_empty_inputs_are_zero() {
        assert_eq!(trailing_mean(&[], 5), 0.0);
        assert_eq!(trailing_mean(&[1.0, 2.0], 0), 0.0);
    }
}
