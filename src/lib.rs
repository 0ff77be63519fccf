//! Weather lookup - resolve a place name and show its day-by-day forecast
//!
//! This library geocodes a free-text location, fetches a multi-day daily
//! forecast for it and renders a compact view with weather icons, while
//! remembering the last entered location.

pub mod api;
pub mod config;
pub mod dates;
pub mod error;
pub mod icons;
pub mod location_resolver;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod render;
pub mod storage;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use error::WeatherError;
pub use icons::{WeatherIcon, icon_for};
pub use location_resolver::{LocationLookup, LocationResolver};
pub use models::{DayForecast, ForecastSeries, ResolvedPlace};
pub use orchestrator::{ChainOutcome, ChainTicket, Orchestrator, ViewState};
pub use render::{DayView, ViewModel};
pub use storage::{FjallStore, KeyValueStore, MemoryStore};
pub use weather::{ForecastFetcher, ForecastSource, OpenMeteoClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherError>;
