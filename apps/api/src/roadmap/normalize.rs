//! Shape Normalizer — guarantees every caller receives the canonical roadmap
//! shape regardless of what the provider returned.

use serde::Serialize;
use serde_json::Value;

use crate::llm_client::shape::array_field;
use crate::models::roadmap::{Milestone, PricingItem, SkillPriority, TimelinePhase};

/// Output of the roadmap pipeline. Not yet persisted: the UI displays it and
/// the user explicitly saves through POST /api/roadmaps.
///
/// Invariant: the four sequences are always present (possibly empty), never
/// absent or null, including on generation failure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRoadmap {
    pub milestones: Vec<Milestone>,
    pub skills: Vec<SkillPriority>,
    pub timeline: Vec<TimelinePhase>,
    pub pricing: Vec<PricingItem>,
    /// Set only on degraded results, for programmatic callers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Coerces a candidate provider object into the canonical roadmap shape.
/// Missing or mistyped arrays default to empty; never raises.
pub fn normalize_roadmap(candidate: Value) -> GeneratedRoadmap {
    GeneratedRoadmap {
        milestones: array_field(&candidate, "milestones"),
        skills: array_field(&candidate, "skills"),
        timeline: array_field(&candidate, "timeline"),
        pricing: array_field(&candidate, "pricing"),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_normalizes_to_empty_sequences() {
        let roadmap = normalize_roadmap(json!({}));
        assert!(roadmap.milestones.is_empty());
        assert!(roadmap.skills.is_empty());
        assert!(roadmap.timeline.is_empty());
        assert!(roadmap.pricing.is_empty());
        assert!(roadmap.error.is_none());
    }

    #[test]
    fn test_present_arrays_are_taken() {
        let roadmap = normalize_roadmap(json!({
            "milestones": [
                {"title": "Learn SQL", "description": "Complete an online SQL course"}
            ],
            "skills": [
                {"name": "SQL", "importance": 5},
                {"name": "Python", "importance": 4}
            ]
        }));
        assert_eq!(roadmap.milestones.len(), 1);
        assert_eq!(roadmap.milestones[0].title, "Learn SQL");
        assert_eq!(roadmap.skills.len(), 2);
        assert_eq!(roadmap.skills[1].importance, 4);
        assert!(roadmap.timeline.is_empty());
        assert!(roadmap.pricing.is_empty());
    }

    #[test]
    fn test_mistyped_array_defaults_empty() {
        let roadmap = normalize_roadmap(json!({"milestones": "oops"}));
        assert!(roadmap.milestones.is_empty());
    }

    #[test]
    fn test_partial_items_default_their_fields() {
        let roadmap = normalize_roadmap(json!({
            "timeline": [{"phase": "Foundation"}]
        }));
        assert_eq!(roadmap.timeline.len(), 1);
        assert_eq!(roadmap.timeline[0].phase, "Foundation");
        assert_eq!(roadmap.timeline[0].duration, "");
        assert!(roadmap.timeline[0].activities.is_empty());
    }

    #[test]
    fn test_out_of_range_importance_passes_through() {
        let roadmap = normalize_roadmap(json!({
            "skills": [{"name": "SQL", "importance": 9}]
        }));
        assert_eq!(roadmap.skills[0].importance, 9);
    }

    #[test]
    fn test_serialized_output_always_has_four_arrays_and_no_error() {
        let json = serde_json::to_value(normalize_roadmap(json!({}))).unwrap();
        for key in ["milestones", "skills", "timeline", "pricing"] {
            assert!(json.get(key).unwrap().is_array());
        }
        assert!(json.get("error").is_none());
    }
}
