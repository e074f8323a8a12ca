use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
};
use tracing::{info, warn};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

/// Relay one chat message to the model and hand the reply back.
///
/// The `Result` extractor keeps malformed bodies (non-JSON, missing
/// `message` key) out of axum's default rejection path so every
/// validation failure produces the same 400 body.
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Ok(Json(request)) = payload else {
        warn!("rejected chat request with unparseable payload");
        return Err(AppError::InvalidMessage);
    };

    if request.message.trim().is_empty() {
        warn!("rejected chat request with empty message");
        return Err(AppError::InvalidMessage);
    }

    // One upstream call, fresh context, no retry. The message goes out
    // exactly as the caller sent it.
    let reply = state.gemini.generate(&request.message).await?;

    info!(reply_len = reply.len(), "relayed chat message");
    Ok(Json(ChatResponse { response: reply }))
}
