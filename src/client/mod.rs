//! Front-end side: request assembly, chat rendering and spoken summaries.

pub mod chat;
pub mod mode;
pub mod pipeline;
pub mod relay_client;
pub mod speech;

pub use chat::{ChatView, MessageId, TranscriptChat};
pub use mode::PromptMode;
pub use pipeline::{RequestPipeline, SubmitOutcome};
pub use relay_client::RelayClient;
pub use speech::{Speaker, SpeechSummary, Utterance};
