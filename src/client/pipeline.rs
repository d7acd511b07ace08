use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;

use super::chat::ChatView;
use super::mode::PromptMode;
use super::relay_client::RelayClient;
use super::speech::{Speaker, SpeechSummary};
use crate::canvas::StrokeCanvas;
use crate::capture::{EncodedImage, SnapshotEncoder};
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::relay::types::QueryRequest;

/// Shown in the chat for a submission that carries only a sketch.
const SKETCH_ONLY_LABEL: &str = "[sketch]";

pub enum SubmitOutcome {
    /// The reply was shown; `speech` resolves once the spoken summary has been queued.
    Replied { reply: String, speech: JoinHandle<()> },
    /// The request failed; `message` is what the chat now shows.
    Failed { message: String },
}

/// Turns the current prompt and sketch into one relay request and routes the
/// answer to the chat and to speech.
///
/// Submissions are not serialized: a second call made before the first resolves
/// runs concurrently.
pub struct RequestPipeline<C: ChatView> {
    relay: RelayClient,
    mode: PromptMode,
    chat: Arc<Mutex<C>>,
    speech: SpeechSummary,
}

impl<C: ChatView> RequestPipeline<C> {
    pub fn new(relay: RelayClient, mode: PromptMode, chat: Arc<Mutex<C>>, speaker: Arc<dyn Speaker>) -> Self {
        let speech = SpeechSummary::new(relay.clone(), speaker, mode.speech_rate());
        Self {
            relay,
            mode,
            chat,
            speech,
        }
    }

    /// Pipeline talking to the relay at `config.relay_url`.
    pub fn from_config(
        config: &AppConfig,
        mode: PromptMode,
        chat: Arc<Mutex<C>>,
        speaker: Arc<dyn Speaker>,
    ) -> Self {
        Self::new(RelayClient::new(&config.relay_url), mode, chat, speaker)
    }

    pub fn mode(&self) -> PromptMode {
        self.mode
    }

    pub fn chat(&self) -> &Arc<Mutex<C>> {
        &self.chat
    }

    /// Send `text` together with a snapshot of `canvas`.
    pub async fn submit_sketch(&self, text: &str, canvas: &StrokeCanvas) -> Result<SubmitOutcome> {
        let image = SnapshotEncoder::encode(canvas.surface())?;
        self.submit(text, Some(&image)).await
    }

    /// Fails only with [`Error::EmptyPrompt`], after alerting the view; transport
    /// failures become a chat message.
    pub async fn submit(&self, text: &str, image: Option<&EncodedImage>) -> Result<SubmitOutcome> {
        let text = text.trim();
        if text.is_empty() && image.is_none() {
            self.chat.lock().alert(self.mode.empty_prompt_alert());
            return Err(Error::EmptyPrompt);
        }

        let placeholder = {
            let mut chat = self.chat.lock();
            let shown = if text.is_empty() { SKETCH_ONLY_LABEL } else { text };
            chat.push(self.mode.user_label(), shown);
            self.mode
                .placeholder()
                .map(|line| chat.push(self.mode.assistant_label(), line))
        };

        let request = QueryRequest {
            message: (!text.is_empty()).then(|| self.mode.wrap(text)),
            image: image.map(EncodedImage::to_data_uri),
        };
        let result = self.relay.query(&request).await;

        let mut chat = self.chat.lock();
        if let Some(id) = placeholder {
            chat.remove(id);
        }

        match result {
            Ok(reply) => {
                chat.push(self.mode.assistant_label(), &reply);
                drop(chat);
                let speech = self.speech.speak(&reply);
                Ok(SubmitOutcome::Replied { reply, speech })
            }
            Err(e) => {
                log::error!("API error: {}", e);
                let message = self.mode.failure_message(self.relay.base_url());
                chat.push(self.mode.assistant_label(), &message);
                Ok(SubmitOutcome::Failed { message })
            }
        }
    }
}
