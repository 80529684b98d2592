pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat;
use crate::contact;
use crate::resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/chat", post(chat::handlers::handle_chat))
        .route("/api/v1/contact", post(contact::handlers::handle_contact))
        .route("/api/v1/resume", post(resume::handlers::handle_build_resume))
        .with_state(state)
}
