//! Prompt Composer — deterministically renders a RoadmapRequest into a single
//! textual instruction with a fixed target JSON schema. Pure function of its
//! input, no side effects.

use serde::Deserialize;

use crate::roadmap::options::{detail_profile, RoadmapOptions, DEFAULT_DETAIL_LEVEL};
use crate::roadmap::prompts::ROADMAP_PROMPT_TEMPLATE;

/// Request body for roadmap generation. `career` and `goals` are required
/// non-empty (enforced at the HTTP boundary); `current_skills` may be empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub career: String,
    #[serde(default)]
    pub current_skills: Vec<String>,
    pub goals: String,
    #[serde(default)]
    pub options: Option<RoadmapOptions>,
}

/// Builds the roadmap generation prompt.
///
/// An empty skill list renders as the single placeholder `None` so the
/// prompt never contains an empty enumeration.
pub fn build_roadmap_prompt(request: &RoadmapRequest) -> String {
    let options = request.options.clone().unwrap_or_default();

    let skills = if request.current_skills.is_empty() {
        "None".to_string()
    } else {
        request.current_skills.join(", ")
    };

    let profile = detail_profile(options.detail_level.unwrap_or(DEFAULT_DETAIL_LEVEL));

    let mut background = String::new();
    if let Some(education) = options.education.as_deref().filter(|s| !s.trim().is_empty()) {
        background.push_str(&format!("Educational background: {education}\n"));
    }
    if let Some(experience) = options
        .experience
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        background.push_str(&format!("Professional experience: {experience}\n"));
    }

    let clauses = options.inclusion_clauses();
    let inclusions = if clauses.is_empty() {
        String::new()
    } else {
        format!("Additionally, {}.\n", clauses.join(", "))
    };

    ROADMAP_PROMPT_TEMPLATE
        .replace("{detail}", profile.adjective)
        .replace("{career}", request.career.trim())
        .replace("{current_skills}", &skills)
        .replace("{goals}", request.goals.trim())
        .replace("{background}", &background)
        .replace(
            "{timeframe}",
            options.timeframe.unwrap_or_default().phrase(),
        )
        .replace("{budget}", options.budget.unwrap_or_default().phrase())
        .replace("{inclusions}", &inclusions)
        .replace("{targets}", &profile.targets.sentence())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::options::{BudgetLevel, Timeframe};

    fn request(options: Option<RoadmapOptions>) -> RoadmapRequest {
        RoadmapRequest {
            career: "Software Development".to_string(),
            current_skills: vec!["Python".to_string(), "Git".to_string()],
            goals: "become a senior engineer".to_string(),
            options,
        }
    }

    #[test]
    fn test_unset_timeframe_renders_medium_term() {
        let prompt = build_roadmap_prompt(&request(None));
        assert!(prompt.contains("medium-term (3-5 years)"));
    }

    #[test]
    fn test_explicit_timeframes_render_their_phrases() {
        let short = build_roadmap_prompt(&request(Some(RoadmapOptions {
            timeframe: Some(Timeframe::Short),
            ..Default::default()
        })));
        assert!(short.contains("short-term (1-2 years)"));

        let long = build_roadmap_prompt(&request(Some(RoadmapOptions {
            timeframe: Some(Timeframe::Long),
            ..Default::default()
        })));
        assert!(long.contains("long-term (5+ years)"));
    }

    #[test]
    fn test_default_budget_renders_moderate() {
        let prompt = build_roadmap_prompt(&request(None));
        assert!(prompt.contains("a moderate budget"));
    }

    #[test]
    fn test_high_budget_renders_significant() {
        let prompt = build_roadmap_prompt(&request(Some(RoadmapOptions {
            budget: Some(BudgetLevel::High),
            ..Default::default()
        })));
        assert!(prompt.contains("a significant budget"));
    }

    #[test]
    fn test_coarse_tier_targets_for_low_detail_levels() {
        for level in 1..=3 {
            let prompt = build_roadmap_prompt(&request(Some(RoadmapOptions {
                detail_level: Some(level),
                ..Default::default()
            })));
            assert!(
                prompt.contains(
                    "4-6 milestones, 5-8 skills, 3-4 timeline phases, and 3-5 pricing items"
                ),
                "level {level} must request the coarse tier"
            );
        }
    }

    #[test]
    fn test_detailed_tier_targets_for_high_detail_levels() {
        for level in 4..=5 {
            let prompt = build_roadmap_prompt(&request(Some(RoadmapOptions {
                detail_level: Some(level),
                ..Default::default()
            })));
            assert!(
                prompt.contains(
                    "5-7 milestones, 6-10 skills, 4-5 timeline phases, and 4-6 pricing items"
                ),
                "level {level} must request the detailed tier"
            );
        }
    }

    #[test]
    fn test_empty_skills_render_none_placeholder() {
        let mut req = request(None);
        req.current_skills = vec![];
        let prompt = build_roadmap_prompt(&req);
        assert!(prompt.contains("Current skills: None"));
    }

    #[test]
    fn test_skills_are_comma_joined() {
        let prompt = build_roadmap_prompt(&request(None));
        assert!(prompt.contains("Current skills: Python, Git"));
    }

    #[test]
    fn test_no_flags_omits_additionally_sentence() {
        let prompt = build_roadmap_prompt(&request(None));
        assert!(!prompt.contains("Additionally,"));
    }

    #[test]
    fn test_flags_join_with_commas() {
        let prompt = build_roadmap_prompt(&request(Some(RoadmapOptions {
            include_certifications: Some(true),
            include_networking: Some(true),
            ..Default::default()
        })));
        assert!(prompt.contains(
            "Additionally, include industry certification recommendations, \
             include networking and community-building strategies."
        ));
    }

    #[test]
    fn test_background_lines_render_when_set() {
        let prompt = build_roadmap_prompt(&request(Some(RoadmapOptions {
            education: Some("BSc Computer Science".to_string()),
            experience: Some("2 years as a QA analyst".to_string()),
            ..Default::default()
        })));
        assert!(prompt.contains("Educational background: BSc Computer Science"));
        assert!(prompt.contains("Professional experience: 2 years as a QA analyst"));
    }

    #[test]
    fn test_background_omitted_when_blank() {
        let prompt = build_roadmap_prompt(&request(Some(RoadmapOptions {
            education: Some("   ".to_string()),
            ..Default::default()
        })));
        assert!(!prompt.contains("Educational background:"));
    }

    #[test]
    fn test_prompt_names_all_four_schema_arrays() {
        let prompt = build_roadmap_prompt(&request(None));
        for key in ["\"milestones\"", "\"skills\"", "\"timeline\"", "\"pricing\""] {
            assert!(prompt.contains(key), "prompt must describe {key}");
        }
        assert!(prompt.contains("\"estimatedCost\""));
    }

    #[test]
    fn test_composition_is_deterministic() {
        let req = request(Some(RoadmapOptions {
            timeframe: Some(Timeframe::Long),
            detail_level: Some(4),
            include_mentorship: Some(true),
            ..Default::default()
        }));
        assert_eq!(build_roadmap_prompt(&req), build_roadmap_prompt(&req));
    }
}
