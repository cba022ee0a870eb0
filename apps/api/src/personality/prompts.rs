// All LLM prompt constants for the Personality module.
// Cross-cutting fragments live in llm_client::prompts.

/// System prompt for personality analysis — enforces JSON-only output.
pub const PERSONALITY_SYSTEM: &str =
    "You are a career personality assessment analyzer. \
    Given a person's rated answers to a personality questionnaire, you identify their \
    working-style personality type, their strengths and growth areas, and careers that \
    fit their profile. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Personality analysis prompt template. Replace `{answers}` before sending.
pub const PERSONALITY_PROMPT_TEMPLATE: &str = r#"Analyze the following personality assessment answers. Each question was rated on a scale from 1 (strongly disagree) to 5 (strongly agree).

Answers:
{answers}

Return a JSON object with this EXACT schema (no extra fields):
{
  "personalityType": "A short working-style personality label",
  "strengths": ["...", "...", "...", "...", "..."],
  "weaknesses": ["...", "...", "..."],
  "recommendedCareers": [
    {"name": "Data Analyst", "description": "Why this career fits the profile", "fit": 4}
  ]
}

Rules:
- Provide exactly 5 strengths and exactly 3 weaknesses.
- Provide 4-6 recommended careers.
- `fit` is an integer from 1 (weak fit) to 5 (excellent fit)."#;
