//! Personality analysis — renders the answers mapping into a prompt, calls
//! the provider, and guarantees a well-shaped result.
//!
//! Infallible by design: provider errors never escape to the HTTP layer.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use crate::llm_client::GenerationBackend;
use crate::personality::fallback::degraded_personality;
use crate::personality::normalize::{normalize_personality, PersonalityResult};
use crate::personality::prompts::{PERSONALITY_PROMPT_TEMPLATE, PERSONALITY_SYSTEM};

/// Request body for the personality test: question id mapped to a 1-5
/// rating. A BTreeMap keeps prompt rendering in stable order, so composition
/// stays a pure function of the input.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonalityTestRequest {
    pub answers: BTreeMap<String, u8>,
}

/// Renders the answers mapping into the analysis prompt, one `id: rating`
/// line per question in sorted order.
pub fn build_personality_prompt(answers: &BTreeMap<String, u8>) -> String {
    let rendered = answers
        .iter()
        .map(|(question, rating)| format!("{question}: {rating}"))
        .collect::<Vec<_>>()
        .join("\n");

    PERSONALITY_PROMPT_TEMPLATE.replace("{answers}", &rendered)
}

/// Runs the personality pipeline for one answers mapping. One provider call,
/// awaited to completion; no retry, no caching.
pub async fn analyze_personality(
    llm: &dyn GenerationBackend,
    answers: &BTreeMap<String, u8>,
) -> PersonalityResult {
    let prompt = build_personality_prompt(answers);

    match llm.generate_json(&prompt, PERSONALITY_SYSTEM).await {
        Ok(candidate) => normalize_personality(candidate),
        Err(e) => {
            warn!("Personality analysis failed: {e}");
            degraded_personality(&e)
        }
    }
}
