use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use chrono::Locale;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::orchestrator::Orchestrator;
use crate::render::ViewModel;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct ApiState {
    pub orchestrator: Arc<Orchestrator>,
    pub locale: Locale,
}

impl ApiState {
    #[must_use]
    pub fn new(orchestrator: Arc<Orchestrator>, locale: Locale) -> Self {
        Self {
            orchestrator,
            locale,
        }
    }

    fn view(&self) -> ViewModel {
        ViewModel::from_state(&self.orchestrator.snapshot(), self.locale)
    }

    /// Change the query and finish its lookup in a background task.
    /// Returns whether a lookup was started.
    pub fn spawn_lookup(&self, query: impl Into<String>) -> bool {
        let Some(ticket) = self.orchestrator.begin(query) else {
            return false;
        };
        debug!("Starting background lookup for '{}'", ticket.query());
        let orchestrator = self.orchestrator.clone();
        tokio::spawn(async move {
            orchestrator.complete(ticket).await;
        });
        true
    }

    /// Look up the stored query without waiting for it
    pub fn spawn_refresh(&self) -> bool {
        let query = self.orchestrator.snapshot().query;
        self.spawn_lookup(query)
    }
}

#[derive(Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/view", get(get_view))
        .route("/query", post(set_query))
}

/// Plain-text view, same as the terminal
pub async fn get_page(State(state): State<ApiState>) -> String {
    state.view().to_string()
}

async fn get_view(State(state): State<ApiState>) -> Json<ViewModel> {
    Json(state.view())
}

/// Starts the lookup in the background and answers right away with the
/// view as it is now (loading when a lookup was started).
async fn set_query(
    State(state): State<ApiState>,
    Json(payload): Json<QueryRequest>,
) -> (StatusCode, Json<ViewModel>) {
    let status = if state.spawn_lookup(payload.query) {
        StatusCode::ACCEPTED
    } else {
        StatusCode::OK
    };

    (status, Json(state.view()))
}
