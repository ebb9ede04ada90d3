//! HTTP API handlers

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::upstream::LaunchesClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<LaunchesClient>,
    started_at: Instant,
}

impl AppState {
    pub fn new(upstream: Arc<LaunchesClient>) -> Self {
        Self {
            upstream,
            started_at: Instant::now(),
        }
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "launchdeck",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

/// GET /api/launches - Same-origin proxy for the upstream launch collection.
///
/// Relays the upstream body verbatim on success. Any failure collapses into
/// a fixed 500 payload; upstream error detail is logged, never leaked.
pub async fn launches_handler(State(state): State<AppState>) -> Response {
    match state.upstream.launches_raw().await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(%err, "error fetching launches");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch launches" })),
            )
                .into_response()
        }
    }
}
