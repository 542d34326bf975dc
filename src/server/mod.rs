//! HTTP API server.
//!
//! Thin I/O plumbing around the detector and the WHOIS module. Endpoints:
//! - `POST /predict` - classify a URL
//! - `POST /whois` - structured registration record for a domain
//! - `GET /` - welcome message

mod handlers;
mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::Detector;
use handlers::{predict_handler, root_handler, whois_handler};
pub use types::{ClassifyRequest, ClassifyResponse, WhoisLookupResponse, WhoisRequest};

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The detector, constructed once at startup and read-only thereafter.
    pub detector: Arc<Detector>,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/predict", post(predict_handler))
        .route("/whois", post(whois_handler))
        .with_state(state)
}

/// Binds the listener and serves the API until the process exits.
pub async fn run_server(port: u16, state: AppState) -> Result<(), anyhow::Error> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to port {}: {}", port, e))?;

    log::info!("API server listening on http://0.0.0.0:{port}/");
    log::info!("  - Classify: POST http://0.0.0.0:{port}/predict");
    log::info!("  - WHOIS:    POST http://0.0.0.0:{port}/whois");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}
