use reqwest::Client;

use crate::error::{Error, Result};
use crate::relay::types::{QueryRequest, QueryResponse, SummaryRequest, SummaryResponse, SESSION_HEADER};

/// HTTP client for the relay's `/query` and `/tts-summary` endpoints.
#[derive(Clone)]
pub struct RelayClient {
    http: Client,
    base_url: String,
    session_id: Option<String>,
}

impl RelayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session_id: None,
        }
    }

    /// Tag every request with a conversation of its own.
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Tag every request with a freshly generated session id.
    pub fn with_new_session(self) -> Self {
        self.with_session(uuid::Uuid::new_v4().to_string())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self.http.post(format!("{}{}", self.base_url, path));
        match &self.session_id {
            Some(id) => request.header(SESSION_HEADER, id),
            None => request,
        }
    }

    pub async fn query(&self, request: &QueryRequest) -> Result<String> {
        let response = self
            .post("/query")
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("/query failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RelayStatus(status.as_u16()));
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("Failed to parse /query response: {}", e)))?;
        Ok(body.reply)
    }

    /// Status is not checked: the relay's fallback line is spoken like any summary.
    pub async fn summarize(&self, full_text: &str) -> Result<String> {
        let request = SummaryRequest {
            full_text: full_text.to_string(),
        };
        let response = self
            .post("/tts-summary")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("/tts-summary failed: {}", e)))?;

        let body: SummaryResponse = response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("Failed to parse /tts-summary response: {}", e)))?;
        Ok(body.speech_text)
    }
}
