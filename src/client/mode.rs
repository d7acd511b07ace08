use serde::{Deserialize, Serialize};

/// Front-end flavour: decides how prompts are framed and how the chat reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptMode {
    #[default]
    General,
    Creative,
    Education,
}

impl PromptMode {
    /// The message actually sent to the relay for `text`.
    pub fn wrap(&self, text: &str) -> String {
        match self {
            PromptMode::General => text.to_string(),
            PromptMode::Creative => format!("[Creative Mode] {}", text),
            PromptMode::Education => format!(
                "[Education Mode - Tutor Context] The student asks: \"{}\". \
                 Provide a clear, educational explanation. \
                 If there's a diagram or formula in the image, explain it step-by-step.",
                text
            ),
        }
    }

    pub fn user_label(&self) -> &'static str {
        match self {
            PromptMode::General => "You",
            PromptMode::Creative | PromptMode::Education => "YOU",
        }
    }

    pub fn assistant_label(&self) -> &'static str {
        match self {
            PromptMode::General => "Bot",
            PromptMode::Creative => "AI",
            PromptMode::Education => "TUTOR",
        }
    }

    /// Transient line shown while a reply is pending.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            PromptMode::General => None,
            PromptMode::Creative => Some("Processing..."),
            PromptMode::Education => Some("Analyzing your question..."),
        }
    }

    pub fn failure_message(&self, relay_url: &str) -> String {
        match self {
            PromptMode::General => "❌ Failed to process your request.".to_string(),
            PromptMode::Creative => {
                "❌ Failed to process your request. Make sure the backend server is running.".to_string()
            }
            PromptMode::Education => format!(
                "❌ Failed to process your request. Make sure the backend server is running on {}",
                relay_url
            ),
        }
    }

    pub fn empty_prompt_alert(&self) -> &'static str {
        match self {
            PromptMode::Education => "Please enter a question or prompt first!",
            _ => "Please enter a prompt first!",
        }
    }

    pub fn speech_rate(&self) -> f32 {
        match self {
            PromptMode::Education => 0.95,
            _ => 1.0,
        }
    }

    pub fn timestamps(&self) -> bool {
        matches!(self, PromptMode::Education)
    }

    pub fn welcome(&self) -> Option<&'static str> {
        match self {
            PromptMode::General => None,
            PromptMode::Creative => Some(
                "Welcome to Creative Mode! 🎨\n\n\
                 Draw something on the canvas and describe what you want to create.\n\n\
                 You can:\n\
                 - Sketch ideas and get creative suggestions\n\
                 - Upload images and get interpretations\n\
                 - Use voice commands for hands-free interaction\n\n\
                 Start by drawing or typing your prompt!",
            ),
            PromptMode::Education => Some(
                "Welcome to Education Mode! 📚\n\n\
                 I'm your AI tutor. I can help you with:\n\
                 - Explaining diagrams and formulas\n\
                 - Step-by-step problem solving\n\
                 - Concept clarification\n\
                 - Interactive learning\n\n\
                 Draw a diagram, formula, or graph on the canvas, then ask me questions about it!\n\n\
                 You can type or use voice input. Let's start learning!",
            ),
        }
    }
}
