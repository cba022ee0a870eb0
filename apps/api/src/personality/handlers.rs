//! Axum route handlers for the personality assessment.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::personality::generator::{analyze_personality, PersonalityTestRequest};
use crate::personality::normalize::PersonalityResult;
use crate::state::AppState;

/// POST /api/personality-test
///
/// Always answers 200 with a PersonalityResult-shaped payload: provider
/// failures arrive as the degraded shape.
pub async fn handle_personality_test(
    State(state): State<AppState>,
    Json(request): Json<PersonalityTestRequest>,
) -> Result<Json<PersonalityResult>, AppError> {
    if request.answers.is_empty() {
        return Err(AppError::Validation("answers cannot be empty".to_string()));
    }
    if let Some((question, rating)) = request.answers.iter().find(|(_, r)| !(1..=5).contains(*r)) {
        return Err(AppError::Validation(format!(
            "rating for '{question}' must be between 1 and 5 (got {rating})"
        )));
    }

    let result = analyze_personality(state.llm.as_ref(), &request.answers).await;
    Ok(Json(result))
}
