//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! Wire types are private to this module; callers get back the reply text
//! or a `GeminiError`. Each call is a single round-trip with no history,
//! so the model sees every request as a fresh conversation.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::config::Config;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("request to model service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model service returned status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("model response contained no text")]
    EmptyReply,
}

/// Client for the generative-language API, built once at startup.
///
/// `reqwest::Client` is an `Arc` internally, so the struct is cheap to
/// share. The upstream timeout from `Config` is baked into the client so
/// a stalled model call fails fast instead of hanging the request.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    generation_config: GenerationConfig,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            generation_config: GenerationConfig::default(),
        })
    }

    /// Send `message` as a single user turn and return the model's reply.
    ///
    /// Exactly one attempt: transport failures, non-2xx statuses and
    /// unusable bodies are all surfaced to the caller without retry.
    pub async fn generate(&self, message: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let payload = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(message.to_string()),
                }],
            }],
            generation_config: self.generation_config.clone(),
        };

        debug!(model = %self.model, message_len = message.len(), "sending generateContent request");

        let response = self.http.post(&url).json(&payload).send().await.map_err(|e| {
            error!(error = %e, "model request failed at transport level");
            e
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "model service rejected request");
            return Err(GeminiError::Status { status, body });
        }

        let parsed = response.json::<GenerateContentResponse>().await?;
        extract_reply(parsed).ok_or(GeminiError::EmptyReply)
    }
}

/// Pull the reply text out of the first candidate, concatenating parts.
fn extract_reply(response: GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let parts = candidate.content?.parts;

    let text: String = parts.into_iter().filter_map(|p| p.text).collect();
    if text.is_empty() { None } else { Some(text) }
}

// Wire types. Field names follow the API's camelCase convention.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    top_k: u32,
    max_output_tokens: u32,
    response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8192,
            response_mime_type: "text/plain".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"hi "},{"text":"there"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(extract_reply(response).as_deref(), Some("hi there"));
    }

    #[test]
    fn missing_candidates_yields_none() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(extract_reply(response).is_none());
    }

    #[test]
    fn candidate_without_text_yields_none() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(extract_reply(response).is_none());
    }

    #[test]
    fn generation_config_serializes_camel_case() {
        let json = serde_json::to_value(GenerationConfig::default()).unwrap();

        assert_eq!(json["temperature"], 1.0);
        assert_eq!(json["topP"], 0.95);
        assert_eq!(json["topK"], 40);
        assert_eq!(json["maxOutputTokens"], 8192);
        assert_eq!(json["responseMimeType"], "text/plain");
    }
}
