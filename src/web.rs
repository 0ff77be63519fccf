use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{self, ApiState};

pub fn app(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::get_page))
        .nest("/api", api::router())
        .with_state(state)
        .layer(cors)
}

pub async fn run(state: ApiState, port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", port);
    axum::serve(listener, app(state))
        .await
        .context("Web server stopped")?;
    Ok(())
}
