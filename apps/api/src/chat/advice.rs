//! Free-form career advice. Unlike the roadmap/personality paths, failures
//! degrade to a fixed apologetic string rather than a structured error shape.

use tracing::warn;

use crate::chat::prompts::{ADVICE_SYSTEM, ADVICE_UNAVAILABLE};
use crate::llm_client::GenerationBackend;

/// Asks the provider for advice on one user message. Infallible: any
/// provider failure yields the fixed apology.
pub async fn get_career_advice(llm: &dyn GenerationBackend, message: &str) -> String {
    match llm.generate_text(message, ADVICE_SYSTEM).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Career advice call failed: {e}");
            ADVICE_UNAVAILABLE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedBackend;

    #[tokio::test]
    async fn test_successful_reply_is_passed_through() {
        let backend = ScriptedBackend::text("A data scientist analyzes data to answer questions.");

        let reply = get_career_advice(&backend, "What does a data scientist do?").await;

        assert_eq!(reply, "A data scientist analyzes data to answer questions.");
    }

    #[tokio::test]
    async fn test_provider_unavailable_yields_fixed_apology() {
        let backend = ScriptedBackend::api_error(503, "upstream connect error");

        let reply = get_career_advice(&backend, "What does a data scientist do?").await;

        assert_eq!(reply, ADVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_rate_limited_chat_also_yields_apology() {
        let backend = ScriptedBackend::api_error(429, "rate limit");

        let reply = get_career_advice(&backend, "hello").await;

        assert_eq!(reply, ADVICE_UNAVAILABLE);
    }
}
