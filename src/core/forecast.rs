//! Forecast points as returned to API clients.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of a forecast: either an echoed observation or a projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Calendar period, attached by the caller after projection.
    #[serde(with = "period_format")]
    pub period: Option<NaiveDate>,
    pub predicted: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// True for echoed observations, false for projections.
    pub historical: bool,
}

impl ForecastPoint {
    /// Echo an observation with a zero-width interval.
    pub fn observed(value: f64) -> Self {
        Self {
            period: None,
            predicted: value,
            lower_bound: value,
            upper_bound: value,
            historical: true,
        }
    }

    /// A projected value with its bounds.
    pub fn projected(predicted: f64, lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            period: None,
            predicted,
            lower_bound,
            upper_bound,
            historical: false,
        }
    }

    /// Attach a calendar period.
    pub fn with_period(mut self, period: NaiveDate) -> Self {
        self.period = Some(period);
        self
    }

    /// Distance between the bounds.
    pub fn interval_width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    pub fn is_projected(&self) -> bool {
        !self.historical
    }
}

/// Forecast output split into its observed and projected halves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSplit {
    pub historical: Vec<ForecastPoint>,
    pub forecast: Vec<ForecastPoint>,
}

impl ForecastSplit {
    /// Partition points by their historical flag, keeping order.
    pub fn from_points(points: impl IntoIterator<Item = ForecastPoint>) -> Self {
        let (historical, forecast) = points.into_iter().partition(|p| p.historical);
        Self {
            historical,
            forecast,
        }
    }

    /// Total number of points.
    pub fn len(&self) -> usize {
        self.historical.len() + self.forecast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.historical.is_empty() && self.forecast.is_empty()
    }
}

/// Periods travel as `YYYY-MM-DD`, with an empty string for unlabelled points.
mod period_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(period: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match period {
            Some(date) => serializer.collect_str(&date.format(FORMAT)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
