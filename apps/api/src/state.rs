use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::GenerationBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Text-generation backend behind a trait object so tests can substitute
    /// a scripted fake. Constructed once at startup — no module-level globals.
    pub llm: Arc<dyn GenerationBackend>,
    pub config: Config,
}
