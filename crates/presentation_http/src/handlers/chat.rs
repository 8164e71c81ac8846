//! Chatbot handler

use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message
    #[serde(default)]
    pub message: String,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Assistant response
    pub response: String,
    /// Response timestamp
    pub timestamp: String,
}

/// Relay a chat message to the assistant.
///
/// Empty input is the only error path; inference failures surface as the
/// service's fallback reply with HTTP 200.
#[instrument(skip(state, request), fields(message_len = request.message.len()))]
pub async fn chatbot(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let response = state.chat.ask(&request.message).await?;

    Ok(Json(ChatResponse {
        response,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
