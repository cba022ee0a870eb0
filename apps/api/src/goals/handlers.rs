//! Axum route handlers for user goals.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::goal::GoalRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
}

/// Full replacement; last writer wins.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalRequest {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// POST /api/goals
pub async fn handle_create_goal(
    State(state): State<AppState>,
    Json(request): Json<CreateGoalRequest>,
) -> Result<Json<GoalRow>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let row = sqlx::query_as::<_, GoalRow>(
        "INSERT INTO goals (user_id, title, description) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(request.user_id)
    .bind(&request.title)
    .bind(&request.description)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// GET /api/users/:user_id/goals
pub async fn handle_list_goals(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<GoalRow>>, AppError> {
    let rows = sqlx::query_as::<_, GoalRow>(
        "SELECT * FROM goals WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// PUT /api/goals/:id
pub async fn handle_update_goal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateGoalRequest>,
) -> Result<Json<GoalRow>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let row = sqlx::query_as::<_, GoalRow>(
        "UPDATE goals SET title = $1, description = $2, completed = $3 WHERE id = $4 RETURNING *",
    )
    .bind(&request.title)
    .bind(&request.description)
    .bind(request.completed)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Goal {id} not found")))?;

    Ok(Json(row))
}

/// DELETE /api/goals/:id
pub async fn handle_delete_goal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM goals WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Goal {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}
