// All LLM prompt constants for the Roadmap module.
// Cross-cutting fragments live in llm_client::prompts.

/// System prompt for roadmap generation — enforces JSON-only output.
pub const ROADMAP_SYSTEM: &str =
    "You are an expert career counselor and career roadmap planner. \
    Given a person's target career, current skills, and goals, you produce a practical, \
    step-by-step career development plan with concrete milestones, skill priorities, \
    a phased timeline, and realistic cost estimates. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Roadmap generation prompt template.
/// Replace: {detail}, {career}, {current_skills}, {goals}, {background},
///          {timeframe}, {budget}, {inclusions}, {targets}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a {detail} career development roadmap for someone pursuing a career in {career}.

Current skills: {current_skills}
Career goals: {goals}
{background}Target timeframe: {timeframe}
Budget: plan around a {budget} budget for courses, certifications, and tools.
{inclusions}
Return a JSON object with this EXACT schema (no extra fields):
{
  "milestones": [
    {"title": "Complete a foundational course", "description": "What this milestone covers and why it matters"}
  ],
  "skills": [
    {"name": "SQL", "importance": 4}
  ],
  "timeline": [
    {"phase": "Foundation", "duration": "3 months", "activities": ["Enroll in course", "Build first project"]}
  ],
  "pricing": [
    {"item": "Certification exam", "estimatedCost": "$300", "notes": "One retake included"}
  ]
}

Rules:
- Provide {targets}.
- `importance` is an integer from 1 (nice to have) to 5 (critical).
- Milestones are ordered from first to last.
- Timeline phases together must cover the full target timeframe.
- Pricing estimates are in USD and may be ranges."#;
