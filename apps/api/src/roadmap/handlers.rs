//! Axum route handlers for roadmap generation and persistence.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::roadmap::{Milestone, PricingItem, RoadmapRow, SkillPriority, TimelinePhase};
use crate::roadmap::composer::RoadmapRequest;
use crate::roadmap::generator::generate_roadmap;
use crate::roadmap::normalize::GeneratedRoadmap;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Body for persisting a roadmap the user chose to save. `id` and
/// `created_at` are server-assigned.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoadmapRequest {
    pub user_id: i64,
    pub career_path_id: i64,
    pub title: String,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub skills: Vec<SkillPriority>,
    #[serde(default)]
    pub timeline: Vec<TimelinePhase>,
    #[serde(default)]
    pub pricing: Vec<PricingItem>,
}

/// Body for a full roadmap update. Last writer wins; there is no versioning.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoadmapRequest {
    pub title: String,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub skills: Vec<SkillPriority>,
    #[serde(default)]
    pub timeline: Vec<TimelinePhase>,
    #[serde(default)]
    pub pricing: Vec<PricingItem>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-roadmap
///
/// Runs the generation pipeline without persisting. Always answers 200 with
/// a Roadmap-shaped payload: provider failures arrive as the degraded shape.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<GeneratedRoadmap>, AppError> {
    if request.career.trim().is_empty() {
        return Err(AppError::Validation("career cannot be empty".to_string()));
    }
    if request.goals.trim().is_empty() {
        return Err(AppError::Validation("goals cannot be empty".to_string()));
    }

    let roadmap = generate_roadmap(state.llm.as_ref(), &request).await;
    Ok(Json(roadmap))
}

/// POST /api/roadmaps
pub async fn handle_create_roadmap(
    State(state): State<AppState>,
    Json(request): Json<CreateRoadmapRequest>,
) -> Result<Json<RoadmapRow>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let row = sqlx::query_as::<_, RoadmapRow>(
        r#"
        INSERT INTO roadmaps (user_id, career_path_id, title, milestones, skills, timeline, pricing)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(request.career_path_id)
    .bind(&request.title)
    .bind(to_jsonb(&request.milestones)?)
    .bind(to_jsonb(&request.skills)?)
    .bind(to_jsonb(&request.timeline)?)
    .bind(to_jsonb(&request.pricing)?)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// GET /api/roadmaps/:id
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RoadmapRow>, AppError> {
    let row = sqlx::query_as::<_, RoadmapRow>("SELECT * FROM roadmaps WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Roadmap {id} not found")))?;

    Ok(Json(row))
}

/// GET /api/users/:user_id/roadmaps
pub async fn handle_list_roadmaps(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<RoadmapRow>>, AppError> {
    let rows = sqlx::query_as::<_, RoadmapRow>(
        "SELECT * FROM roadmaps WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// PUT /api/roadmaps/:id
pub async fn handle_update_roadmap(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateRoadmapRequest>,
) -> Result<Json<RoadmapRow>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let row = sqlx::query_as::<_, RoadmapRow>(
        r#"
        UPDATE roadmaps
        SET title = $1, milestones = $2, skills = $3, timeline = $4, pricing = $5
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(&request.title)
    .bind(to_jsonb(&request.milestones)?)
    .bind(to_jsonb(&request.skills)?)
    .bind(to_jsonb(&request.timeline)?)
    .bind(to_jsonb(&request.pricing)?)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Roadmap {id} not found")))?;

    Ok(Json(row))
}

/// DELETE /api/roadmaps/:id
pub async fn handle_delete_roadmap(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM roadmaps WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Roadmap {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// The plan arrays are typed on the way in and stored verbatim as JSONB, so
/// a later read returns exactly what was saved.
fn to_jsonb<T: Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize roadmap field: {e}")))
}
