//! Roadmap generation options — closed enumerations for timeframe, budget,
//! and detail level, each with the human-readable phrase rendered into the
//! prompt.

use serde::{Deserialize, Serialize};

/// Prompt detail level used when the request does not specify one.
pub const DEFAULT_DETAIL_LEVEL: u8 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Short,
    #[default]
    Medium,
    Long,
}

impl Timeframe {
    pub fn phrase(self) -> &'static str {
        match self {
            Timeframe::Short => "short-term (1-2 years)",
            Timeframe::Medium => "medium-term (3-5 years)",
            Timeframe::Long => "long-term (5+ years)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl BudgetLevel {
    pub fn phrase(self) -> &'static str {
        match self {
            BudgetLevel::Low => "minimal",
            BudgetLevel::Medium => "moderate",
            BudgetLevel::High => "significant",
        }
    }
}

/// Optional knobs on a roadmap request. Every field is optional; absent
/// fields take the documented defaults (medium timeframe, moderate budget,
/// detail level 3, no inclusion clauses).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoadmapOptions {
    pub education: Option<String>,
    pub experience: Option<String>,
    pub timeframe: Option<Timeframe>,
    pub budget: Option<BudgetLevel>,
    pub include_certifications: Option<bool>,
    pub include_online_courses: Option<bool>,
    pub include_mentorship: Option<bool>,
    pub include_networking: Option<bool>,
    pub detail_level: Option<u8>,
}

impl RoadmapOptions {
    /// One clause per truthy inclusion flag, in fixed order. The composer
    /// comma-joins these into a single sentence, omitted entirely when no
    /// flag is set.
    pub fn inclusion_clauses(&self) -> Vec<&'static str> {
        let mut clauses = Vec::new();
        if self.include_certifications.unwrap_or(false) {
            clauses.push("include industry certification recommendations");
        }
        if self.include_online_courses.unwrap_or(false) {
            clauses.push("include specific online course suggestions");
        }
        if self.include_mentorship.unwrap_or(false) {
            clauses.push("include mentorship and coaching guidance");
        }
        if self.include_networking.unwrap_or(false) {
            clauses.push("include networking and community-building strategies");
        }
        clauses
    }
}

/// Record-count targets requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailTargets {
    pub milestones: &'static str,
    pub skills: &'static str,
    pub timeline_phases: &'static str,
    pub pricing_items: &'static str,
}

impl DetailTargets {
    pub fn sentence(&self) -> String {
        format!(
            "{} milestones, {} skills, {} timeline phases, and {} pricing items",
            self.milestones, self.skills, self.timeline_phases, self.pricing_items
        )
    }
}

const COARSE_TIER: DetailTargets = DetailTargets {
    milestones: "4-6",
    skills: "5-8",
    timeline_phases: "3-4",
    pricing_items: "3-5",
};

const DETAILED_TIER: DetailTargets = DetailTargets {
    milestones: "5-7",
    skills: "6-10",
    timeline_phases: "4-5",
    pricing_items: "4-6",
};

/// Detail adjective and record-count tier for a requested level.
#[derive(Debug, Clone, Copy)]
pub struct DetailProfile {
    pub adjective: &'static str,
    pub targets: DetailTargets,
}

/// Fixed lookup over the closed 1-5 range. Levels 1-3 share the coarse
/// record-count tier; levels 4-5 get the detailed tier. Out-of-range input
/// falls back to the level-3 defaults.
pub fn detail_profile(level: u8) -> DetailProfile {
    match level {
        1 => DetailProfile {
            adjective: "brief",
            targets: COARSE_TIER,
        },
        2 => DetailProfile {
            adjective: "concise",
            targets: COARSE_TIER,
        },
        3 => DetailProfile {
            adjective: "balanced",
            targets: COARSE_TIER,
        },
        4 => DetailProfile {
            adjective: "detailed",
            targets: DETAILED_TIER,
        },
        5 => DetailProfile {
            adjective: "comprehensive",
            targets: DETAILED_TIER,
        },
        _ => DetailProfile {
            adjective: "balanced",
            targets: COARSE_TIER,
        },
    }
}
