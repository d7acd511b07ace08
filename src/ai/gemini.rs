use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{CompletionService, Turn};
use crate::config::{AppConfig, API_KEY_ENV};
use crate::error::{Error, Result};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: &'a [Turn],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// `generateContent` client for the Gemini REST API.
///
/// Built even without a key; every call then fails with `MissingCredential`.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        if config.gemini_api_key.is_empty() {
            log::error!("{} is not set; completion requests will fail", API_KEY_ENV);
        }
        Self {
            http: Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn generate(&self, contents: &[Turn]) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(Error::MissingCredential(API_KEY_ENV));
        }

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateRequest { contents })
            .send()
            .await
            .map_err(|e| Error::Completion(format!("Gemini request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::CompletionStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Completion(format!("Failed to parse Gemini response: {}", e)))?;

        reply_text(body)
    }
}

/// Concatenated text parts of the first candidate.
fn reply_text(body: GenerateResponse) -> Result<String> {
    if let Some(reason) = body.prompt_feedback.and_then(|f| f.block_reason) {
        log::error!("Gemini blocked the prompt: {}", reason);
    }

    let text: String = body
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(Error::EmptyCompletion);
    }
    Ok(text)
}
