//! Location Resolution Module
//!
//! Resolves a free-text place name into a `ResolvedPlace` through the
//! geocoding service. The service's first candidate wins.

use async_trait::async_trait;
use tracing::debug;

use crate::models::ResolvedPlace;
use crate::weather::OpenMeteoClient;
use crate::{Result, WeatherError};

#[async_trait]
pub trait LocationLookup: Send + Sync {
    /// Best match for the query, `WeatherError::NotFound` when there is none
    async fn resolve(&self, query: &str) -> Result<ResolvedPlace>;
}

/// Service for resolving location names
pub struct LocationResolver {
    client: OpenMeteoClient,
}

impl LocationResolver {
    #[must_use]
    pub fn new(client: OpenMeteoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LocationLookup for LocationResolver {
    async fn resolve(&self, query: &str) -> Result<ResolvedPlace> {
        debug!("Geocoding location name: {}", query);

        let geocoding = self
            .client
            .geocode(query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::not_found(query))?;

        let country = geocoding.country.clone().unwrap_or_default();
        let place = ResolvedPlace::from(geocoding);
        debug!(
            "Found location: {} {} ({})",
            place.display_label(),
            country,
            place.format_coordinates()
        );

        Ok(place)
    }
}
