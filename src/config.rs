//! Configuration management for the weather lookup
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::WeatherError;
use anyhow::{Context, Result};
use chrono::Locale;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "weather-lookup";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Open-Meteo endpoints and request settings
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Where the last query is remembered
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Presentation settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// HTTP surface settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL of the geocoding API
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    /// Base URL of the forecast API
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    /// Number of forecast days to request
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
    /// Request timeout in seconds, 0 disables the timeout
    #[serde(default)]
    pub timeout_seconds: u32,
}

/// Durable storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage directory, defaults to the platform data directory
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Key the last query is stored under
    #[serde(default = "default_storage_key")]
    pub key: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Locale used for weekday names, e.g. `en_US` or `de_DE`
    #[serde(default = "default_locale")]
    pub locale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_forecast_days() -> u8 {
    7
}

fn default_storage_key() -> String {
    "location".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_locale() -> String {
    "en_US".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
            forecast_days: default_forecast_days(),
            timeout_seconds: 0,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: default_storage_key(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl StorageConfig {
    /// Storage directory to open, falling back to the working directory
    /// when the platform has no data directory.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join(APP_DIR).join("store"))
                .unwrap_or_else(|| PathBuf::from(".weather-lookup"))
        })
    }
}

impl DisplayConfig {
    pub fn parsed_locale(&self) -> Result<Locale> {
        crate::dates::parse_locale(&self.locale).map_err(Into::into)
    }
}

impl AppConfig {
    /// Load configuration from the given file, or the default config path,
    /// with environment variables on top
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // WEATHER_LOOKUP__WEATHER__TIMEOUT_SECONDS=10 and friends
        builder = builder.add_source(
            Environment::with_prefix("WEATHER_LOOKUP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.weather.geocoding_url.is_empty() {
            self.weather.geocoding_url = default_geocoding_url();
        }
        if self.weather.forecast_url.is_empty() {
            self.weather.forecast_url = default_forecast_url();
        }
        if self.weather.forecast_days == 0 {
            self.weather.forecast_days = default_forecast_days();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.display.locale.is_empty() {
            self.display.locale = default_locale();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds > 300 {
            return Err(
                WeatherError::config("Weather API timeout cannot exceed 300 seconds").into(),
            );
        }

        if !(1..=16).contains(&self.weather.forecast_days) {
            return Err(
                WeatherError::config("Forecast days must be between 1 and 16").into(),
            );
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WeatherError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WeatherError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (field, url) in [
            ("geocoding_url", &self.weather.geocoding_url),
            ("forecast_url", &self.weather.forecast_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(WeatherError::config(format!(
                    "Weather {field} must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        if self.storage.key.is_empty() {
            return Err(WeatherError::config("Storage key cannot be empty").into());
        }

        self.display.parsed_locale()?;

        Ok(())
    }
}
