use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::{Database, StoreError};
use crate::models::*;

/// Default number of records returned by the list endpoint.
const DEFAULT_LIST_LIMIT: u32 = 50;

// ============================================================
// Error Handling
// ============================================================

/// Error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Log a storage failure and return a sanitized response to the client.
/// The full error is logged server-side for debugging, but clients only
/// see a generic message to avoid leaking internal details.
fn storage_error(e: StoreError, client_msg: &str) -> (StatusCode, Json<ErrorBody>) {
    tracing::error!("Storage failure: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: client_msg.to_string(),
        }),
    )
}

fn bad_request(msg: String) -> (StatusCode, Json<ErrorBody>) {
    tracing::warn!("Validation error: {}", msg);
    (StatusCode::BAD_REQUEST, Json(ErrorBody { error: msg }))
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Feedback
// ============================================================

pub async fn submit_feedback(
    State(db): State<Database>,
    Json(input): Json<SubmitFeedbackInput>,
) -> Result<(StatusCode, Json<FeedbackRecord>), (StatusCode, Json<ErrorBody>)> {
    input.validate().map_err(bad_request)?;

    db.insert_feedback(input)
        .map(|record| (StatusCode::CREATED, Json(record)))
        .map_err(|e| storage_error(e, "Failed to save feedback"))
}

/// Query parameters for listing feedback.
#[derive(Debug, Deserialize)]
pub struct ListFeedbackQuery {
    /// Maximum number of records to return. Defaults to 50.
    pub limit: Option<u32>,
}

pub async fn list_feedback(
    State(db): State<Database>,
    Query(query): Query<ListFeedbackQuery>,
) -> Result<Json<Vec<FeedbackRecord>>, (StatusCode, Json<ErrorBody>)> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    db.recent_feedback(limit)
        .map(Json)
        .map_err(|e| storage_error(e, "Failed to load feedback"))
}
