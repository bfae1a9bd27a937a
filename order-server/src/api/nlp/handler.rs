//! Natural-Language Query Handlers

use axum::Json;
use axum::extract::State;
use shared::error::{ApiResponse, AppResult};

use crate::api::validate_payload;
use crate::core::ServerState;
use crate::nlp::{self, QueryRequest, QueryResponse};

/// POST /api/nlp/generate-sql - question in, SQL and rows out
pub async fn generate_sql(
    State(state): State<ServerState>,
    Json(payload): Json<QueryRequest>,
) -> AppResult<ApiResponse<QueryResponse>> {
    validate_payload(&payload)?;
    let response =
        nlp::generate_and_execute(&state.pool, state.sql_generator.as_ref(), &payload.query)
            .await?;
    Ok(ApiResponse::success(response))
}
