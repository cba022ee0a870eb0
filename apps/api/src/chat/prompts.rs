// All LLM prompt constants for the Chat module.

/// System prompt for free-form career advice. No JSON mode: the response is
/// shown to the user as-is.
pub const ADVICE_SYSTEM: &str =
    "You are a friendly, knowledgeable career advisor. \
    You answer questions about careers, job roles, skills, education paths, and \
    professional growth in clear, encouraging language. \
    Keep answers practical and reasonably concise.";

/// Returned in place of advice when the provider is unavailable. The chat
/// endpoint still answers 200 and the apology is persisted like any reply.
pub const ADVICE_UNAVAILABLE: &str =
    "I'm sorry, I'm having trouble answering right now. Please try again in a few minutes.";
