//! Natural-Language Query API module

mod handler;

use axum::Router;
use axum::routing::post;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/nlp", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/generate-sql", post(handler::generate_sql))
}
