//! Reporting granularity and the parameters chosen for each.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};

use crate::error::{ForecastError, Result};

/// Period unit of an aggregated series.
///
/// Parsing only accepts explicit codes, so an empty string is an error. A
/// request that omits the unit should fall back to [`Granularity::default`],
/// which is daily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    /// Default number of periods to project.
    pub fn periods_ahead(self) -> usize {
        match self {
            Granularity::Daily => 30,
            Granularity::Weekly => 12,
            Granularity::Monthly => 6,
        }
    }

    /// Default trailing window for trend and dispersion.
    pub fn window_size(self) -> usize {
        match self {
            Granularity::Daily => 14,
            Granularity::Weekly => 8,
            Granularity::Monthly => 6,
        }
    }

    /// Short query code.
    pub fn code(self) -> &'static str {
        match self {
            Granularity::Daily => "d",
            Granularity::Weekly => "w",
            Granularity::Monthly => "m",
        }
    }

    /// Move `date` forward by `steps` periods.
    ///
    /// Monthly steps follow calendar months and clamp the day to the end of
    /// shorter months (Jan 31 + 1 month = Feb 29 in a leap year). Dates never
    /// roll over into the following month, so Dec 31 + 2 months is Feb 29 and
    /// not Mar 2. Month-start periods are unaffected.
    pub fn advance(self, date: NaiveDate, steps: usize) -> Result<NaiveDate> {
        let overflow = || {
            ForecastError::DateOverflow(format!("{} + {} {} periods", date, steps, self))
        };

        let next = match self {
            Granularity::Daily => {
                let days = u64::try_from(steps).map_err(|_| overflow())?;
                date.checked_add_days(Days::new(days))
            }
            Granularity::Weekly => {
                let days = u64::try_from(steps)
                    .ok()
                    .and_then(|s| s.checked_mul(7))
                    .ok_or_else(overflow)?;
                date.checked_add_days(Days::new(days))
            }
            Granularity::Monthly => {
                let months = u32::try_from(steps).map_err(|_| overflow())?;
                date.checked_add_months(Months::new(months))
            }
        };

        next.ok_or_else(overflow)
    }
}

impl FromStr for Granularity {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "d" | "daily" => Ok(Granularity::Daily),
            "w" | "weekly" => Ok(Granularity::Weekly),
            "m" | "monthly" => Ok(Granularity::Monthly),
            other => Err(ForecastError::InvalidGranularity(other.to_string())),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("d".parse::<Granularity>().unwrap(), Granularity::Daily);
        assert_eq!("daily".parse::<Granularity>().unwrap(), Granularity::Daily);
        assert_eq!("w".parse::<Granularity>().unwrap(), Granularity::Weekly);
        assert_eq!("weekly".parse::<Granularity>().unwrap(), Granularity::Weekly);
        assert_eq!("m".parse::<Granularity>().unwrap(), Granularity::Monthly);
        assert_eq!("monthly".parse::<Granularity>().unwrap(), Granularity::Monthly);
    }

    #[test]
    fn rejects_unknown_codes() {
        let err = "hourly".parse::<Granularity>().unwrap_err();
        assert_eq!(err, ForecastError::InvalidGranularity("hourly".to_string()));
        assert!("".parse::<Granularity>().is_err());
        assert!("D".parse::<Granularity>().is_err());
    }

    #[test]
    fn presets_match_reporting_defaults() {
        assert_eq!(
            (Granularity::Daily.periods_ahead(), Granularity::Daily.window_size()),
            (30, 14)
        );
        assert_eq!(
            (Granularity::Weekly.periods_ahead(), Granularity::Weekly.window_size()),
            (12, 8)
        );
        assert_eq!(
            (Granularity::Monthly.periods_ahead(), Granularity::Monthly.window_size()),
            (6, 6)
        );
        assert_eq!(Granularity::default(), Granularity::Daily);
    }

    #[test]
    fn display_and_code_round_trip_through_parse() {
        for g in [Granularity::Daily, Granularity::Weekly, Granularity::Monthly] {
            assert_eq!(g.code().parse::<Granularity>().unwrap(), g);
            assert_eq!(g.to_string().parse::<Granularity>().unwrap(), g);
        }
    }

    #[test]
    fn advance_daily_and_weekly() {
        let start = date(2024, 2, 27);
        assert_eq!(Granularity::Daily.advance(start, 3).unwrap(), date(2024, 3, 1));
        assert_eq!(Granularity::Weekly.advance(start, 2).unwrap(), date(2024, 3, 12));
        assert_eq!(Granularity::Daily.advance(start, 0).unwrap(), start);
    }

    #[test]
    fn advance_monthly_clamps_to_month_end() {
        let start = date(2024, 1, 31);
        assert_eq!(Granularity::Monthly.advance(start, 1).unwrap(), date(2024, 2, 29));
        assert_eq!(Granularity::Monthly.advance(start, 3).unwrap(), date(2024, 4, 30));
        assert_eq!(Granularity::Monthly.advance(start, 12).unwrap(), date(2025, 1, 31));
    }

    #[test]
    fn advance_monthly_never_rolls_into_next_month() {
        let start = date(2023, 12, 31);
        assert_eq!(Granularity::Monthly.advance(start, 2).unwrap(), date(2024, 2, 29));
        assert_eq!(
            Granularity::Monthly.advance(date(2023, 12, 1), 2).unwrap(),
            date(2024, 2, 1)
        );
    }

    #[test]
    fn missing_unit_falls_back_to_default() {
        let requested: Option<&str> = None;
        let granularity = match requested {
            Some(code) => code.parse::<Granularity>().unwrap(),
            None => Granularity::default(),
        };
        assert_eq!(granularity, Granularity::Daily);
        assert!("".parse::<Granularity>().is_err());
    }

    #[test]
    fn advance_reports_overflow() {
        let result = Granularity::Daily.advance(NaiveDate::MAX, 1);
        assert!(matches!(result, Err(ForecastError::DateOverflow(_))));

        let result = Granularity::Monthly.advance(NaiveDate::MAX, 1);
        assert!(matches!(result, Err(ForecastError::DateOverflow(_))));
    }
}
