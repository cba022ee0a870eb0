//! Error Classifier (roadmap path) — converts a provider failure into the
//! same canonical shape as a successful call, so UI callers never need a
//! separate branch for "AI call failed".

use crate::llm_client::LlmError;
use crate::models::roadmap::Milestone;
use crate::roadmap::normalize::GeneratedRoadmap;

pub const RATE_LIMIT_MESSAGE: &str =
    "The AI service is handling too many requests right now. Please wait a minute and try again.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Could not generate a career roadmap at this time. Please try again later.";

/// Builds the degraded roadmap for a provider failure: exactly one milestone
/// titled "Error" carrying the classified message, every other sequence
/// empty, and the same message in the `error` field.
pub fn degraded_roadmap(error: &LlmError) -> GeneratedRoadmap {
    let message = if error.is_rate_limited() {
        RATE_LIMIT_MESSAGE
    } else {
        GENERIC_FAILURE_MESSAGE
    };

    GeneratedRoadmap {
        milestones: vec![Milestone {
            title: "Error".to_string(),
            description: message.to_string(),
        }],
        skills: Vec::new(),
        timeline: Vec::new(),
        pricing: Vec::new(),
        error: Some(message.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, message: &str) -> LlmError {
        LlmError::Api {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_quota_failure_yields_rate_limit_milestone() {
        let roadmap = degraded_roadmap(&api_error(400, "monthly quota exceeded"));
        assert_eq!(roadmap.milestones.len(), 1);
        assert_eq!(roadmap.milestones[0].title, "Error");
        assert_eq!(roadmap.milestones[0].description, RATE_LIMIT_MESSAGE);
        assert_eq!(roadmap.error.as_deref(), Some(RATE_LIMIT_MESSAGE));
    }

    #[test]
    fn test_status_429_yields_rate_limit_message() {
        let roadmap = degraded_roadmap(&api_error(429, "overloaded"));
        assert_eq!(roadmap.milestones[0].description, RATE_LIMIT_MESSAGE);
    }

    #[test]
    fn test_generic_failure_yields_generic_message() {
        let roadmap = degraded_roadmap(&api_error(401, "invalid x-api-key"));
        assert_eq!(roadmap.milestones.len(), 1);
        assert_eq!(roadmap.milestones[0].title, "Error");
        assert_eq!(roadmap.milestones[0].description, GENERIC_FAILURE_MESSAGE);
        assert_eq!(roadmap.error.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
    }

    #[test]
    fn test_other_sequences_stay_empty() {
        let roadmap = degraded_roadmap(&api_error(500, "internal"));
        assert!(roadmap.skills.is_empty());
        assert!(roadmap.timeline.is_empty());
        assert!(roadmap.pricing.is_empty());
    }

    #[test]
    fn test_error_field_serializes_when_set() {
        let json = serde_json::to_value(degraded_roadmap(&api_error(429, ""))).unwrap();
        assert!(json.get("error").unwrap().is_string());
    }
}
