//! Health API module

use axum::Router;
use axum::routing::get;
use serde::Serialize;
use shared::error::ApiResponse;

use crate::core::ServerState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// GET /health - liveness probe
async fn health() -> ApiResponse<Health> {
    ApiResponse::success(Health { status: "healthy" })
}
