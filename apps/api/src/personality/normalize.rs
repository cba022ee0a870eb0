//! Shape Normalizer (personality path).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llm_client::shape::{array_field, string_field};

/// Fallback phrase when the provider response carries no personality type.
pub const UNKNOWN_PERSONALITY_TYPE: &str = "Could not determine personality type";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerRecommendation {
    pub name: String,
    pub description: String,
    /// 1 (weak fit) to 5 (excellent fit); 0 on degraded results. Provider
    /// values are passed through unclamped.
    pub fit: i64,
}

/// Canonical personality assessment result. The sequences are always present
/// (possibly empty), never absent or null, including on generation failure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityResult {
    pub personality_type: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommended_careers: Vec<CareerRecommendation>,
    /// Set only on degraded results, for programmatic callers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Coerces a candidate provider object into the canonical result shape.
/// Missing arrays default to empty, a missing type string defaults to the
/// fixed fallback phrase; never raises.
pub fn normalize_personality(candidate: Value) -> PersonalityResult {
    PersonalityResult {
        personality_type: string_field(&candidate, "personalityType", UNKNOWN_PERSONALITY_TYPE),
        strengths: array_field(&candidate, "strengths"),
        weaknesses: array_field(&candidate, "weaknesses"),
        recommended_careers: array_field(&candidate, "recommendedCareers"),
        error: None,
    }
}
