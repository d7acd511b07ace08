use std::sync::Arc;
use tokio::task::JoinHandle;

use super::relay_client::RelayClient;

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
}

/// On-device text-to-speech. Playback is exclusive: a new utterance follows a `cancel`.
pub trait Speaker: Send + Sync {
    fn cancel(&self);
    fn speak(&self, utterance: Utterance);
}

/// Condenses a reply through the relay and reads the summary aloud.
#[derive(Clone)]
pub struct SpeechSummary {
    relay: RelayClient,
    speaker: Arc<dyn Speaker>,
    rate: f32,
}

impl SpeechSummary {
    pub fn new(relay: RelayClient, speaker: Arc<dyn Speaker>, rate: f32) -> Self {
        Self { relay, speaker, rate }
    }

    /// Fire-and-forget; the handle is only for callers that want to wait.
    pub fn speak(&self, full_text: &str) -> JoinHandle<()> {
        let this = self.clone();
        let full_text = full_text.to_string();
        tokio::spawn(async move { this.speak_now(&full_text).await })
    }

    async fn speak_now(&self, full_text: &str) {
        let summary = match self.relay.summarize(full_text).await {
            Ok(summary) => summary,
            Err(e) => {
                log::error!("TTS summary error: {}", e);
                return;
            }
        };

        self.speaker.cancel();
        self.speaker.speak(Utterance {
            text: summary,
            rate: self.rate,
            pitch: 1.0,
        });
    }
}
