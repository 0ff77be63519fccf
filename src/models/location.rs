//! Resolved place model for geographic coordinates and metadata

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A place the geocoding service matched for a free-text query
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResolvedPlace {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// IANA timezone identifier (or `auto`)
    pub timezone: String,
    /// Place name as returned by the service
    pub name: String,
    /// Country code (ISO 3166-1 alpha-2), empty when unknown
    pub country_code: String,
}

impl ResolvedPlace {
    #[must_use]
    pub fn new(
        latitude: f64,
        longitude: f64,
        timezone: impl Into<String>,
        name: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            timezone: timezone.into(),
            name: name.into(),
            country_code: country_code.into(),
        }
    }

    /// Heading label, e.g. `Berlin - DE`
    #[must_use]
    pub fn display_label(&self) -> String {
        if self.country_code.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.country_code)
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Current calendar date at the place. Falls back to UTC when the
    /// timezone is not a known IANA name.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        match self.timezone.parse::<Tz>() {
            Ok(tz) => Utc::now().with_timezone(&tz).date_naive(),
            Err(_) => Utc::now().date_naive(),
        }
    }
}
