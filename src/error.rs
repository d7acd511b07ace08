//! Error types shared by the canvas, relay and client pipelines

use thiserror::Error;

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The completion-service credential was never configured
    #[error("Completion service credential missing: set {0}")]
    MissingCredential(&'static str),

    /// The completion service could not be reached
    #[error("Completion request failed: {0}")]
    Completion(String),

    /// The completion service answered with a non-success status
    #[error("Completion service error ({status}): {body}")]
    CompletionStatus { status: u16, body: String },

    /// The completion service answered without any text
    #[error("Completion service returned no text")]
    EmptyCompletion,

    /// The relay could not be reached or its body could not be read
    #[error("Relay request failed: {0}")]
    Transport(String),

    /// The relay answered with a non-success status
    #[error("Relay responded with status {0}")]
    RelayStatus(u16),

    #[error("Failed to encode snapshot: {0}")]
    Encode(String),

    /// The speech-recognition engine refused to start or failed mid-utterance
    #[error("Speech recognition failed: {0}")]
    Recognition(String),

    #[error("Speech recognition is not supported here")]
    RecognitionUnsupported,

    #[error("Relay server error: {0}")]
    Server(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Neither text nor a sketch was supplied
    #[error("Nothing to send: enter a prompt or draw something first")]
    EmptyPrompt,
}
