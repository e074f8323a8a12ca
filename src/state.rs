// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gemini::{GeminiClient, GeminiError};

pub type SharedState = Arc<AppState>;

/// Per-process state: just the model client. Nothing here mutates after
/// startup, so handlers share it without locking.
pub struct AppState {
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, GeminiError> {
        Ok(Self {
            gemini: GeminiClient::new(config)?,
        })
    }
}
