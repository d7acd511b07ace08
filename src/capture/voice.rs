use crate::error::{Error, Result};

/// A single-utterance speech recogniser supplied by the host.
///
/// Engines are exclusive: calling `start` while already listening must fail
/// rather than open a second session.
pub trait RecognitionEngine: Send {
    fn start(&mut self) -> Result<()>;
    fn stop(&mut self);
}

/// Callbacks delivered by the engine, in the order they happen.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    Started,
    /// Finalized results of the utterance; the last one wins.
    Results(Vec<String>),
    Error(String),
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceState {
    #[default]
    Idle,
    Listening,
}

/// Mic control: turns one finalized utterance into one prompt string.
pub struct VoiceInput {
    engine: Option<Box<dyn RecognitionEngine>>,
    state: VoiceState,
}

impl VoiceInput {
    pub fn new(engine: Box<dyn RecognitionEngine>) -> Self {
        Self {
            engine: Some(engine),
            state: VoiceState::Idle,
        }
    }

    /// No recogniser on this host; the mic control should be disabled.
    pub fn unsupported() -> Self {
        Self {
            engine: None,
            state: VoiceState::Idle,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.engine.is_some()
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    /// Begin listening. Engine refusals are logged and leave the state untouched;
    /// only a missing engine is reported to the caller.
    pub fn start(&mut self) -> Result<()> {
        let engine = self.engine.as_mut().ok_or(Error::RecognitionUnsupported)?;
        match engine.start() {
            Ok(()) => self.state = VoiceState::Listening,
            Err(e) => log::error!("Recognition start error: {}", e),
        }
        Ok(())
    }

    /// What the mic button does: stop when listening, start otherwise.
    pub fn toggle(&mut self) -> Result<()> {
        match self.state {
            VoiceState::Listening => {
                if let Some(engine) = self.engine.as_mut() {
                    engine.stop();
                }
                Ok(())
            }
            VoiceState::Idle => self.start(),
        }
    }

    /// Feed an engine callback; returns the transcript to submit, if any.
    pub fn handle(&mut self, event: RecognitionEvent) -> Option<String> {
        match event {
            RecognitionEvent::Started => {
                self.state = VoiceState::Listening;
                None
            }
            RecognitionEvent::Results(results) => {
                self.state = VoiceState::Idle;
                let transcript = results.last()?.trim();
                if transcript.is_empty() {
                    log::debug!("Recognition finished without any words");
                    return None;
                }
                Some(transcript.to_string())
            }
            RecognitionEvent::Error(message) => {
                log::error!("Speech recognition error: {}", message);
                self.state = VoiceState::Idle;
                None
            }
            RecognitionEvent::End => {
                self.state = VoiceState::Idle;
                None
            }
        }
    }
}
