//! Axum route handlers for the career-advice chat.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::chat::advice::get_career_advice;
use crate::errors::AppError;
use crate::models::chat::ChatMessageRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub user_id: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub response: String,
}

/// POST /api/chat
///
/// Gets advice for the message and appends the exchange to the user's log.
/// The degraded apology is persisted like any other reply, so the history
/// reflects what the user actually saw.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let response = get_career_advice(state.llm.as_ref(), &request.message).await;

    sqlx::query("INSERT INTO chat_messages (user_id, message, response) VALUES ($1, $2, $3)")
        .bind(request.user_id)
        .bind(&request.message)
        .bind(&response)
        .execute(&state.db)
        .await?;

    Ok(Json(ChatResponse {
        message: request.message,
        response,
    }))
}

/// GET /api/users/:user_id/chat-messages
///
/// Full history for a user, oldest first.
pub async fn handle_chat_history(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<ChatMessageRow>>, AppError> {
    let rows = sqlx::query_as::<_, ChatMessageRow>(
        "SELECT * FROM chat_messages WHERE user_id = $1 ORDER BY created_at ASC",
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}
