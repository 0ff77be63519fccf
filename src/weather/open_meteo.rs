//! `OpenMeteo` API client, response structures and conversion utilities

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::WeatherConfig;
use crate::models::{DayForecast, ForecastSeries, ResolvedPlace};
use crate::{Result, WeatherError};

const USER_AGENT: &str = concat!("weather-lookup/", env!("CARGO_PKG_VERSION"));
const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min";

/// Thin HTTP client for the geocoding and forecast endpoints
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
    forecast_days: u8,
}

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Option<String>,
    pub country_code: Option<String>,
    pub country: Option<String>,
}

/// Forecast response from `OpenMeteo`, only the daily block is requested
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub daily: Option<DailyData>,
}

/// Daily weather data, parallel arrays aligned by index
#[derive(Debug, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    #[serde(rename = "weathercode", alias = "weather_code")]
    pub weather_code: Vec<Option<i32>>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<Option<f64>>,
}

impl From<GeocodingResult> for ResolvedPlace {
    fn from(result: GeocodingResult) -> Self {
        ResolvedPlace {
            latitude: result.latitude,
            longitude: result.longitude,
            timezone: result.timezone.unwrap_or_else(|| "auto".to_string()),
            name: result.name,
            country_code: result.country_code.unwrap_or_default(),
        }
    }
}

impl DailyData {
    /// Zip the parallel arrays into a series. Misaligned arrays, missing
    /// values or unparseable dates make the whole response malformed.
    pub fn into_series(self) -> Result<ForecastSeries> {
        let len = self.time.len();
        if self.weather_code.len() != len
            || self.temperature_max.len() != len
            || self.temperature_min.len() != len
        {
            return Err(WeatherError::network(format!(
                "daily arrays are misaligned: time={}, weathercode={}, max={}, min={}",
                len,
                self.weather_code.len(),
                self.temperature_max.len(),
                self.temperature_min.len()
            )));
        }

        let mut days = Vec::with_capacity(len);
        for (i, date) in self.time.iter().enumerate() {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
                WeatherError::network(format!("invalid forecast date '{date}': {e}"))
            })?;
            let missing = |field: &str| {
                WeatherError::network(format!("missing {field} for {date}"))
            };

            days.push(DayForecast {
                date,
                min_temp: self.temperature_min[i].ok_or_else(|| missing("temperature_2m_min"))?,
                max_temp: self.temperature_max[i].ok_or_else(|| missing("temperature_2m_max"))?,
                condition_code: self.weather_code[i].ok_or_else(|| missing("weathercode"))?,
            });
        }

        ForecastSeries::new(days)
    }
}

impl OpenMeteoClient {
    pub fn from_config(config: &WeatherConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(u64::from(config.timeout_seconds)));
        }
        let client = builder
            .build()
            .map_err(|e| WeatherError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            geocoding_url: config.geocoding_url.trim_end_matches('/').to_string(),
            forecast_url: config.forecast_url.trim_end_matches('/').to_string(),
            forecast_days: config.forecast_days,
        })
    }

    /// Search places by free-text name, best match first
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn geocode(&self, name: &str) -> Result<Vec<GeocodingResult>> {
        let url = format!(
            "{}/search?name={}&count=1&format=json",
            self.geocoding_url,
            urlencoding::encode(name)
        );

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: GeocodingResponse = response.json().await?;

        let results = body.results.unwrap_or_default();
        debug!("Geocoding returned {} candidate(s)", results.len());
        Ok(results)
    }

    /// Daily condition code and min/max temperatures for the coordinates
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<DailyData> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&timezone={}&daily={}&forecast_days={}",
            self.forecast_url,
            latitude,
            longitude,
            urlencoding::encode(timezone),
            DAILY_FIELDS,
            self.forecast_days
        );

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: ForecastResponse = response.json().await?;

        body.daily
            .ok_or_else(|| WeatherError::network("forecast response has no daily block"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily(
        time: &[&str],
        codes: Vec<Option<i32>>,
        max: Vec<Option<f64>>,
        min: Vec<Option<f64>>,
    ) -> DailyData {
        DailyData {
            time: time.iter().map(|t| (*t).to_string()).collect(),
            weather_code: codes,
            temperature_max: max,
            temperature_min: min,
        }
    }

    #[test]
    fn test_into_series_zips_by_index() {
        let data = daily(
            &["2024-01-01", "2024-01-02"],
            vec![Some(0), Some(63)],
            vec![Some(3.2), Some(7.9)],
            vec![Some(-1.5), Some(3.7)],
        );
        let series = data.into_series().unwrap();
        assert_eq!(series.len(), 2);
        let second = &series.days()[1];
        assert_eq!(second.condition_code, 63);
        assert_eq!(second.min_temp, 3.7);
        assert_eq!(second.max_temp, 7.9);
    }

    #[test]
    fn test_into_series_rejects_misaligned_arrays() {
        let data = daily(
            &["2024-01-01", "2024-01-02"],
            vec![Some(0)],
            vec![Some(3.2), Some(7.9)],
            vec![Some(-1.5), Some(3.7)],
        );
        let err = data.into_series().unwrap_err();
        assert!(err.to_string().contains("misaligned"));
    }

    #[test]
    fn test_into_series_rejects_nulls() {
        let data = daily(&["2024-01-01"], vec![Some(0)], vec![None], vec![Some(1.0)]);
        let err = data.into_series().unwrap_err();
        assert!(err.is_network());
        assert!(err.to_string().contains("temperature_2m_max"));
    }

    #[test]
    fn test_into_series_rejects_bad_dates() {
        let data = daily(&["01/01/2024"], vec![Some(0)], vec![Some(2.0)], vec![Some(1.0)]);
        assert!(data.into_series().is_err());
    }

    #[test]
    fn test_geocoding_result_conversion() {
        let result = GeocodingResult {
            name: "Berlin".to_string(),
            latitude: 52.52437,
            longitude: 13.41053,
            timezone: Some("Europe/Berlin".to_string()),
            country_code: Some("DE".to_string()),
            country: Some("Germany".to_string()),
        };
        let place = ResolvedPlace::from(result);
        assert_eq!(place.timezone, "Europe/Berlin");
        assert_eq!(place.display_label(), "Berlin - DE");
    }

    #[test]
    fn test_geocoding_result_defaults() {
        let result = GeocodingResult {
            name: "Somewhere".to_string(),
            latitude: 1.0,
            longitude: 2.0,
            timezone: None,
            country_code: None,
            country: None,
        };
        let place = ResolvedPlace::from(result);
        assert_eq!(place.timezone, "auto");
        assert_eq!(place.country_code, "");
    }

    #[test]
    fn test_daily_data_deserializes_open_meteo_shape() {
        let json = r#"{
            "daily": {
                "time": ["2024-01-01"],
                "weathercode": [3],
                "temperature_2m_max": [4.1],
                "temperature_2m_min": [null]
            }
        }"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        let daily = response.daily.unwrap();
        assert_eq!(daily.weather_code, vec![Some(3)]);
        assert_eq!(daily.temperature_min, vec![None]);
    }
}
