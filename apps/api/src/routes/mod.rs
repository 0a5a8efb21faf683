pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::analyzer::handlers as analyzer_handlers;
use crate::builder::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Builder session API
        .route("/api/v1/resumes", post(handlers::handle_create_session))
        .route(
            "/api/v1/resumes/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route("/api/v1/resumes/:id/score", get(handlers::handle_get_score))
        .route(
            "/api/v1/resumes/:id/section",
            put(handlers::handle_update_section),
        )
        .route(
            "/api/v1/resumes/:id/entries",
            post(handlers::handle_add_entry),
        )
        .route(
            "/api/v1/resumes/:id/entries/:section/:index",
            delete(handlers::handle_remove_entry),
        )
        .route(
            "/api/v1/resumes/:id/skills/draft",
            put(handlers::handle_update_skill_draft),
        )
        .route(
            "/api/v1/resumes/:id/skills",
            post(handlers::handle_add_skill),
        )
        .route(
            "/api/v1/resumes/:id/skills/:kind/:index",
            delete(handlers::handle_remove_skill),
        )
        // Analyzer proxy API
        .route("/api/v1/analysis", post(analyzer_handlers::handle_analyze))
        .route(
            "/api/v1/assistant",
            post(analyzer_handlers::handle_assistant),
        )
        .with_state(state)
}
