//! Roadmap generation — composes the prompt, calls the provider, and
//! guarantees a well-shaped result.
//!
//! Flow: build_roadmap_prompt → generate_json → normalize_roadmap,
//! with any provider failure classified into a degraded roadmap.
//! Infallible by design: provider errors never escape to the HTTP layer.

use tracing::warn;

use crate::llm_client::GenerationBackend;
use crate::roadmap::composer::{build_roadmap_prompt, RoadmapRequest};
use crate::roadmap::fallback::degraded_roadmap;
use crate::roadmap::normalize::{normalize_roadmap, GeneratedRoadmap};
use crate::roadmap::prompts::ROADMAP_SYSTEM;

/// Runs the roadmap pipeline for one request. One provider call, awaited to
/// completion; no retry, no caching.
pub async fn generate_roadmap(
    llm: &dyn GenerationBackend,
    request: &RoadmapRequest,
) -> GeneratedRoadmap {
    let prompt = build_roadmap_prompt(request);

    match llm.generate_json(&prompt, ROADMAP_SYSTEM).await {
        Ok(candidate) => normalize_roadmap(candidate),
        Err(e) => {
            warn!("Roadmap generation failed: {e}");
            degraded_roadmap(&e)
        }
    }
}
