//! Error Classifier (personality path).

use crate::llm_client::LlmError;
use crate::personality::normalize::{CareerRecommendation, PersonalityResult};

pub const ANALYSIS_ERROR_TYPE: &str = "Analysis Error";
pub const RATE_LIMIT_MESSAGE: &str =
    "The AI service is handling too many requests right now. Please retake the test in a few minutes.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Could not complete the personality analysis at this time. Please try again later.";

const STRENGTHS_PLACEHOLDER: &str = "Unable to analyze strengths right now";
const WEAKNESSES_PLACEHOLDER: &str = "Unable to analyze growth areas right now";

/// Builds the degraded personality result for a provider failure: the
/// "Analysis Error" type, one-element strength/weakness placeholders, and a
/// single recommended career named "Error" with fit 0.
pub fn degraded_personality(error: &LlmError) -> PersonalityResult {
    let message = if error.is_rate_limited() {
        RATE_LIMIT_MESSAGE
    } else {
        GENERIC_FAILURE_MESSAGE
    };

    PersonalityResult {
        personality_type: ANALYSIS_ERROR_TYPE.to_string(),
        strengths: vec![STRENGTHS_PLACEHOLDER.to_string()],
        weaknesses: vec![WEAKNESSES_PLACEHOLDER.to_string()],
        recommended_careers: vec![CareerRecommendation {
            name: "Error".to_string(),
            description: message.to_string(),
            fit: 0,
        }],
        error: Some(message.to_string()),
    }
}
