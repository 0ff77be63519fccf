//! Query-driven lookup flow
//!
//! A query change persists the raw query and, when it is long enough,
//! runs geocoding followed by the forecast fetch. Every query change bumps
//! a request generation; a chain only writes its results back when its
//! generation is still the current one, so a slow response for an old
//! query can never overwrite a newer one.

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

use crate::location_resolver::LocationLookup;
use crate::models::{ForecastSeries, ResolvedPlace};
use crate::storage::KeyValueStore;
use crate::weather::ForecastSource;
use crate::{Result, WeatherError};

/// Queries shorter than this (in characters) never hit the network
pub const MIN_QUERY_LEN: usize = 2;

/// Everything the view needs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    pub query: String,
    pub loading: bool,
    /// `{name} - {country_code}` of the last successful lookup
    pub display_label: String,
    pub forecast: ForecastSeries,
}

/// Handle for a started chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTicket {
    generation: u64,
    query: String,
}

impl ChainTicket {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug)]
pub enum ChainOutcome {
    /// Query too short, nothing was looked up
    Skipped,
    /// Label and forecast were replaced
    Applied,
    /// Lookup failed and was logged; the previous view stays
    Failed(WeatherError),
    /// A newer query started while this one was in flight; results dropped
    Superseded,
}

#[derive(Debug, Default)]
struct Inner {
    view: ViewState,
    generation: u64,
}

pub struct Orchestrator {
    resolver: Arc<dyn LocationLookup>,
    fetcher: Arc<dyn ForecastSource>,
    store: Arc<dyn KeyValueStore>,
    storage_key: String,
    inner: Mutex<Inner>,
}

impl Orchestrator {
    /// Create the orchestrator, seeding the query from storage
    pub fn new(
        resolver: Arc<dyn LocationLookup>,
        fetcher: Arc<dyn ForecastSource>,
        store: Arc<dyn KeyValueStore>,
        storage_key: impl Into<String>,
    ) -> Result<Self> {
        let storage_key = storage_key.into();
        let query = store.get(&storage_key)?.unwrap_or_default();
        debug!("Restored query '{}' from storage", query);

        Ok(Self {
            resolver,
            fetcher,
            store,
            storage_key,
            inner: Mutex::new(Inner {
                view: ViewState {
                    query,
                    ..ViewState::default()
                },
                generation: 0,
            }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.lock().view.clone()
    }

    /// Record a query change. Returns a ticket when a lookup should run.
    pub fn begin(&self, query: impl Into<String>) -> Option<ChainTicket> {
        let query = query.into();

        let mut inner = self.lock();
        inner.generation += 1;
        inner.view.query = query.clone();

        // persisted regardless of length, under the lock so the stored
        // value always matches the newest generation
        if let Err(e) = self.store.set(&self.storage_key, &query) {
            error!("Failed to persist query '{}': {}", query, e);
        }

        if query.chars().count() < MIN_QUERY_LEN {
            debug!("Query '{}' too short, skipping lookup", query);
            inner.view.loading = false;
            return None;
        }

        inner.view.loading = true;
        Some(ChainTicket {
            generation: inner.generation,
            query,
        })
    }

    /// Run the lookup for a ticket and apply the results if still current
    pub async fn complete(&self, ticket: ChainTicket) -> ChainOutcome {
        let result = self.lookup(&ticket.query).await;

        let mut inner = self.lock();
        if inner.generation != ticket.generation {
            debug!(
                "Discarding results for '{}' (generation {} superseded by {})",
                ticket.query, ticket.generation, inner.generation
            );
            return ChainOutcome::Superseded;
        }

        inner.view.loading = false;
        match result {
            Ok((place, forecast)) => {
                inner.view.display_label = place.display_label();
                inner.view.forecast = forecast;
                ChainOutcome::Applied
            }
            Err(e) => {
                error!("Weather lookup for '{}' failed: {}", ticket.query, e);
                ChainOutcome::Failed(e)
            }
        }
    }

    /// Change the query and wait for its lookup
    pub async fn submit(&self, query: impl Into<String>) -> ChainOutcome {
        match self.begin(query) {
            Some(ticket) => self.complete(ticket).await,
            None => ChainOutcome::Skipped,
        }
    }

    /// Look up the current query again
    pub async fn refresh(&self) -> ChainOutcome {
        let query = self.lock().view.query.clone();
        self.submit(query).await
    }

    async fn lookup(&self, query: &str) -> Result<(ResolvedPlace, ForecastSeries)> {
        let place = self.resolver.resolve(query).await?;
        let forecast = self
            .fetcher
            .fetch(place.latitude, place.longitude, &place.timezone)
            .await?;

        if let Some(first) = forecast.first() {
            let today = place.today();
            if first.date != today {
                warn!(
                    "Forecast for {} starts on {}, expected {}",
                    place.display_label(),
                    first.date,
                    today
                );
            }
        }

        info!(
            "Loaded {}-day forecast for {}",
            forecast.len(),
            place.display_label()
        );
        Ok((place, forecast))
    }
}
