pub mod gemini;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::capture::InlineImage;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A text or image fragment of a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    Image {
        #[serde(rename = "inlineData")]
        inline_data: InlineImage,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn image(image: InlineImage) -> Self {
        Part::Image { inline_data: image }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            Part::Image { .. } => None,
        }
    }
}

/// One message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Turn {
    pub fn user(parts: Vec<Part>) -> Self {
        Self { role: Role::User, parts }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::text(text)],
        }
    }
}

/// The hosted multimodal model.
///
/// Receives the whole conversation on every call and answers with one reply.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn generate(&self, contents: &[Turn]) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn turns_serialize_in_wire_shape() {
        let turn = Turn::user(vec![
            Part::image(InlineImage { mime_type: "image/png".into(), data: "AAAA".into() }),
            Part::text("what is this?"),
        ]);
        let value = serde_json::to_value(&turn).unwrap();
        assert_eq!(
            value,
            json!({
                "role": "user",
                "parts": [
                    { "inlineData": { "mimeType": "image/png", "data": "AAAA" } },
                    { "text": "what is this?" }
                ]
            })
        );
    }

    #[test]
    fn model_parts_deserialize() {
        let turn: Turn = serde_json::from_value(json!({
            "role": "model",
            "parts": [{ "text": "A circle." }]
        }))
        .unwrap();
        assert_eq!(turn, Turn::model("A circle."));
    }
}
