//! Test doubles for the generation pipeline.
//!
//! `ScriptedBackend` stands in for the real Anthropic client so pipeline
//! tests exercise compose/normalize/fallback logic without any network.

use async_trait::async_trait;
use serde_json::Value;

use crate::llm_client::{GenerationBackend, LlmError};

enum Script {
    Json(Value),
    Text(String),
    ApiError { status: u16, message: String },
}

pub struct ScriptedBackend {
    script: Script,
}

impl ScriptedBackend {
    /// Backend whose JSON call succeeds with the given value.
    pub fn json(value: Value) -> Self {
        Self {
            script: Script::Json(value),
        }
    }

    /// Backend whose text call succeeds with the given content.
    pub fn text(content: &str) -> Self {
        Self {
            script: Script::Text(content.to_string()),
        }
    }

    /// Backend whose every call fails with the given provider error.
    pub fn api_error(status: u16, message: &str) -> Self {
        Self {
            script: Script::ApiError {
                status,
                message: message.to_string(),
            },
        }
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate_json(&self, _prompt: &str, _system: &str) -> Result<Value, LlmError> {
        match &self.script {
            Script::Json(value) => Ok(value.clone()),
            Script::Text(_) => panic!("ScriptedBackend scripted for text, not JSON"),
            Script::ApiError { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    async fn generate_text(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
        match &self.script {
            Script::Text(content) => Ok(content.clone()),
            Script::Json(_) => panic!("ScriptedBackend scripted for JSON, not text"),
            Script::ApiError { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
