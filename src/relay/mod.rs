//! HTTP relay between the whiteboard front end and the completion service.

pub mod handlers;
pub mod types;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::ai::CompletionService;
use crate::error::{Error, Result};
use crate::session::SessionManager;

pub struct RelayState {
    pub completion: Arc<dyn CompletionService>,
    pub sessions: SessionManager,
}

impl RelayState {
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self {
            completion,
            sessions: SessionManager::new(),
        }
    }
}

pub type SharedState = Arc<RelayState>;

/// Routes, open CORS and the request body cap.
pub fn router(state: SharedState, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/query", post(handlers::query))
        .route("/tts-summary", post(handlers::tts_summary))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
        .with_state(state)
}

/// Serve until the listener fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    let addr = listener
        .local_addr()
        .map_err(|e| Error::Server(format!("Listener has no address: {}", e)))?;
    log::info!("Relay running at http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Server(format!("Relay server stopped: {}", e)))
}
