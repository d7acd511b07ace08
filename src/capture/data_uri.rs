use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Used when the prefix names no media type.
pub const DEFAULT_MIME_TYPE: &str = "image/png";

static MEDIA_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^data:([A-Za-z0-9.+-]+/[A-Za-z0-9.+-]+)").expect("static regex"));

/// Base64 image payload plus its media type, as sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    /// Split a `data:<mime>;base64,<payload>` URI.
    ///
    /// The payload is everything after the first comma. A URI without a comma or
    /// with an empty payload carries no image.
    pub fn from_data_uri(uri: &str) -> Option<Self> {
        let (prefix, payload) = uri.split_once(',')?;
        if payload.is_empty() {
            return None;
        }

        let mime_type = MEDIA_TYPE
            .captures(prefix)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());

        Some(Self {
            mime_type,
            data: payload.to_string(),
        })
    }
}
