//! Data models for places and forecasts

pub mod forecast;
pub mod location;

pub use forecast::{DayForecast, ForecastSeries};
pub use location::ResolvedPlace;
