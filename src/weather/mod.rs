use async_trait::async_trait;
use tracing::debug;

use crate::Result;
use crate::models::ForecastSeries;

pub mod open_meteo;

pub use open_meteo::OpenMeteoClient;

/// Source of daily forecasts for a resolved place
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Daily series for the coordinates. The timezone decides where each
    /// day starts and must come from the same geocoding result.
    async fn fetch(&self, latitude: f64, longitude: f64, timezone: &str)
    -> Result<ForecastSeries>;
}

/// Fetches daily forecasts from Open-Meteo
pub struct ForecastFetcher {
    client: OpenMeteoClient,
}

impl ForecastFetcher {
    #[must_use]
    pub fn new(client: OpenMeteoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ForecastSource for ForecastFetcher {
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<ForecastSeries> {
        let daily = self
            .client
            .daily_forecast(latitude, longitude, timezone)
            .await?;
        let series = daily.into_series()?;
        debug!("Fetched {} forecast day(s)", series.len());
        Ok(series)
    }
}
