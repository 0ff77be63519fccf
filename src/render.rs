//! Presentation of the forecast view for the terminal and the HTTP surface

use chrono::{Locale, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::dates::day_label;
use crate::icons::{WeatherIcon, describe, icon_for};
use crate::models::DayForecast;
use crate::orchestrator::ViewState;

pub const TITLE: &str = "Weather App";
pub const LOADING_TEXT: &str = "LOADING...";

/// Minimum temperatures are rounded down
#[must_use]
pub fn floor_temp(celsius: f64) -> i64 {
    celsius.floor() as i64
}

/// Maximum temperatures are rounded up
#[must_use]
pub fn ceil_temp(celsius: f64) -> i64 {
    celsius.ceil() as i64
}

/// One rendered day entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayView {
    pub date: NaiveDate,
    pub icon: WeatherIcon,
    pub glyph: &'static str,
    pub label: String,
    pub min: i64,
    pub max: i64,
    pub description: &'static str,
}

impl DayView {
    #[must_use]
    pub fn from_day(day: &DayForecast, is_today: bool, locale: Locale) -> Self {
        let icon = icon_for(day.condition_code);
        Self {
            date: day.date,
            icon,
            glyph: icon.glyph(),
            label: day_label(day.date, is_today, locale),
            min: floor_temp(day.min_temp),
            max: ceil_temp(day.max_temp),
            description: describe(day.condition_code),
        }
    }

    #[must_use]
    pub fn temperature_range(&self) -> String {
        format!("{}° — {}°", self.min, self.max)
    }
}

/// What gets shown: the query, the loading indicator and, once a
/// forecast exists, the heading and the day list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub query: String,
    pub loading: bool,
    pub heading: Option<String>,
    pub days: Vec<DayView>,
}

impl ViewModel {
    #[must_use]
    pub fn from_state(state: &ViewState, locale: Locale) -> Self {
        let (heading, days) = if state.forecast.is_empty() {
            (None, Vec::new())
        } else {
            let days = state
                .forecast
                .iter()
                .enumerate()
                .map(|(i, day)| DayView::from_day(day, i == 0, locale))
                .collect();
            (Some(format!("Weather {}", state.display_label)), days)
        };

        Self {
            query: state.query.clone(),
            loading: state.loading,
            heading,
            days,
        }
    }
}

impl fmt::Display for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "Location: {}", self.query)?;

        if self.loading {
            writeln!(f, "{LOADING_TEXT}")?;
        }

        if let Some(heading) = &self.heading {
            writeln!(f)?;
            writeln!(f, "{heading}")?;
            for day in &self.days {
                writeln!(
                    f,
                    "  {}  {:<6} {}",
                    day.glyph,
                    day.label,
                    day.temperature_range()
                )?;
            }
        }
        Ok(())
    }
}
