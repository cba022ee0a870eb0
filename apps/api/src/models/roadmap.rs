use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

// Canonical roadmap item shapes. Every field carries a serde default:
// a provider-returned item may be partially populated, and absence is
// data rather than a deserialization failure.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillPriority {
    pub name: String,
    /// 1 (nice to have) to 5 (critical). Provider values are passed through
    /// unclamped.
    pub importance: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelinePhase {
    pub phase: String,
    pub duration: String,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingItem {
    pub item: String,
    pub estimated_cost: String,
    pub notes: String,
}

/// A persisted roadmap. The four plan columns are JSONB and stored verbatim:
/// what generation produced is what a later read returns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRow {
    pub id: i64,
    pub user_id: i64,
    pub career_path_id: i64,
    pub title: String,
    pub milestones: Value,
    pub skills: Value,
    pub timeline: Value,
    pub pricing: Value,
    pub created_at: DateTime<Utc>,
}
