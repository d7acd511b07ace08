use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use super::types::{QueryRequest, QueryResponse, SummaryRequest, SummaryResponse, SESSION_HEADER};
use super::SharedState;
use crate::ai::prompts::{speech_summary_prompt, EMPTY_QUERY_REPLY, QUERY_FAILURE_REPLY, SUMMARY_FALLBACK};
use crate::ai::{Part, Turn};
use crate::capture::InlineImage;

/// Image part first, then the text part; either may be absent.
pub fn user_parts(request: &QueryRequest) -> Vec<Part> {
    let mut parts = Vec::new();
    if let Some(image) = request.image.as_deref().and_then(InlineImage::from_data_uri) {
        parts.push(Part::image(image));
    }
    if let Some(message) = request.message.as_deref() {
        if !message.trim().is_empty() {
            parts.push(Part::text(message));
        }
    }
    parts
}

/// `POST /query`: append the user turn, replay the whole conversation, record the reply.
pub async fn query(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(request): Json<QueryRequest>,
) -> (StatusCode, Json<QueryResponse>) {
    let parts = user_parts(&request);
    if parts.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(QueryResponse {
                reply: EMPTY_QUERY_REPLY.to_string(),
            }),
        );
    }

    let session_id = headers.get(SESSION_HEADER).and_then(|v| v.to_str().ok());
    let session = state.sessions.get_or_create(session_id);

    let mut conversation = session.conversation.lock().await;
    conversation.push_user(parts);
    log::info!("History length: {} (session {})", conversation.len(), session.id);

    match state.completion.generate(conversation.turns()).await {
        Ok(reply) => {
            conversation.push_model(reply.clone());
            (StatusCode::OK, Json(QueryResponse { reply }))
        }
        Err(e) => {
            log::error!("Gemini API error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(QueryResponse {
                    reply: QUERY_FAILURE_REPLY.to_string(),
                }),
            )
        }
    }
}

/// `POST /tts-summary`: one-shot condensation for speech. Failures answer 500
/// but still carry a speakable fallback line.
pub async fn tts_summary(
    State(state): State<SharedState>,
    Json(request): Json<SummaryRequest>,
) -> (StatusCode, Json<SummaryResponse>) {
    let prompt = Turn::user(vec![Part::text(speech_summary_prompt(&request.full_text))]);

    match state.completion.generate(std::slice::from_ref(&prompt)).await {
        Ok(speech_text) => (StatusCode::OK, Json(SummaryResponse { speech_text })),
        Err(e) => {
            log::error!("TTS summary error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SummaryResponse {
                    speech_text: SUMMARY_FALLBACK.to_string(),
                }),
            )
        }
    }
}
