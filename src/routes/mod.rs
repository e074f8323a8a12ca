// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::trace::TraceLayer;

pub const BANNER: &str =
    "Flask server is running! Use the /chat route to interact with the AI.";

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(|| async { BANNER }))
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
