//! Daily forecast series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Result, WeatherError};

/// One day of forecast data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    /// Minimum temperature in Celsius
    pub min_temp: f64,
    /// Maximum temperature in Celsius
    pub max_temp: f64,
    /// WMO weather interpretation code
    pub condition_code: i32,
}

/// Ordered multi-day forecast, index 0 is the first (current) day.
///
/// Dates are strictly increasing. An empty series means there is nothing
/// to show, not a zero-day forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    days: Vec<DayForecast>,
}

impl ForecastSeries {
    /// Build a series, rejecting dates that are not strictly increasing
    pub fn new(days: Vec<DayForecast>) -> Result<Self> {
        if let Some(pair) = days.windows(2).find(|pair| pair[0].date >= pair[1].date) {
            return Err(WeatherError::network(format!(
                "forecast dates out of order: {} followed by {}",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self { days })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn days(&self) -> &[DayForecast] {
        &self.days
    }

    #[must_use]
    pub fn first(&self) -> Option<&DayForecast> {
        self.days.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayForecast> {
        self.days.iter()
    }
}
