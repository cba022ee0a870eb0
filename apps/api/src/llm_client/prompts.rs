#![allow(dead_code)]

// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Substituted by `generate_text` when the provider returns no text content.
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "I'm not sure how to answer that. Could you try rephrasing your question?";
