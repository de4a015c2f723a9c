//! Attaching calendar periods to forecast points.

use chrono::NaiveDate;
use tracing::debug;

use crate::core::{ForecastPoint, ForecastSplit, Granularity};
use crate::error::{ForecastError, Result};

/// Label projector output with calendar periods and split it in two.
///
/// `periods` holds the start date of each observed period, in order.
/// Historical point `k` takes `periods[k]`. A shorter list labels a prefix of
/// the history; the unlabelled observations still count as elapsed periods,
/// so the `s`-th projected point sits `s` steps past the last observation.
///
/// # Errors
/// Returns [`ForecastError::DimensionMismatch`] if there are more periods than
/// historical points, and [`ForecastError::DateOverflow`] if a projected date
/// falls outside the calendar.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use civic_forecast::core::{label_periods, Granularity};
/// use civic_forecast::models::project;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let periods = vec![start, start.succ_opt().unwrap()];
/// let points = project(&[10.0, 12.0], 1, 14);
///
/// let split = label_periods(points, &periods, Granularity::Daily).unwrap();
/// assert_eq!(split.forecast[0].period, NaiveDate::from_ymd_opt(2024, 1, 3));
/// ```
pub fn label_periods(
    points: Vec<ForecastPoint>,
    periods: &[NaiveDate],
    granularity: Granularity,
) -> Result<ForecastSplit> {
    let observed = points.iter().filter(|p| p.historical).count();
    if periods.len() > observed {
        return Err(ForecastError::DimensionMismatch {
            expected: observed,
            got: periods.len(),
        });
    }

    let last_period = periods.last().copied();
    let unlabelled = observed - periods.len();
    if last_period.is_none() && observed < points.len() {
        debug!(
            projected = points.len() - observed,
            "no observed periods, projected points left unlabelled"
        );
    }

    let mut split = ForecastSplit::default();
    let mut step = 0;
    for point in points {
        if point.historical {
            let labelled = match periods.get(split.historical.len()) {
                Some(&date) => point.with_period(date),
                None => point,
            };
            split.historical.push(labelled);
        } else {
            step += 1;
            let labelled = match last_period {
                Some(last) => {
                    point.with_period(granularity.advance(last, unlabelled + step)?)
                }
                None => point,
            };
            split.forecast.push(labelled);
        }
    }

    Ok(split)
}
