pub mod ai;
pub mod canvas;
pub mod capture;
pub mod client;
pub mod config;
pub mod error;
pub mod relay;
pub mod session;

pub use error::{Error, Result};

use std::sync::Arc;

/// Start the relay with the on-disk configuration and block until it stops.
pub async fn run() -> Result<()> {
    env_logger::init();

    // ─── Configuration ───────────────────────────────────────────
    let config = match config::AppConfig::default_dir() {
        Ok(dir) => config::AppConfig::load(&dir),
        Err(e) => {
            log::error!("{}; using defaults", e);
            let mut config = config::AppConfig::default();
            config.apply_env();
            config
        }
    };

    // ─── Completion service ──────────────────────────────────────
    let gemini = ai::gemini::GeminiClient::new(&config);
    log::info!("Using model {}", gemini.model());
    let state = Arc::new(relay::RelayState::new(Arc::new(gemini)));

    // ─── HTTP relay ──────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| Error::Server(format!("Failed to bind {}: {}", config.bind_address, e)))?;

    relay::serve(listener, relay::router(state, config.max_body_bytes)).await
}
