pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::chat::handlers as chat;
use crate::goals::handlers as goals;
use crate::personality::handlers as personality;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation pipeline
        .route(
            "/api/generate-roadmap",
            post(roadmap::handle_generate_roadmap),
        )
        .route(
            "/api/personality-test",
            post(personality::handle_personality_test),
        )
        .route("/api/chat", post(chat::handle_chat))
        .route(
            "/api/users/:user_id/chat-messages",
            get(chat::handle_chat_history),
        )
        // Roadmap persistence
        .route("/api/roadmaps", post(roadmap::handle_create_roadmap))
        .route(
            "/api/roadmaps/:id",
            get(roadmap::handle_get_roadmap)
                .put(roadmap::handle_update_roadmap)
                .delete(roadmap::handle_delete_roadmap),
        )
        .route(
            "/api/users/:user_id/roadmaps",
            get(roadmap::handle_list_roadmaps),
        )
        // Goals
        .route("/api/goals", post(goals::handle_create_goal))
        .route(
            "/api/goals/:id",
            put(goals::handle_update_goal).delete(goals::handle_delete_goal),
        )
        .route("/api/users/:user_id/goals", get(goals::handle_list_goals))
        .with_state(state)
}
