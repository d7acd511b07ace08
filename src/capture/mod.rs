pub mod data_uri;
pub mod snapshot;
pub mod voice;

pub use data_uri::InlineImage;
pub use snapshot::{EncodedImage, SnapshotEncoder};
pub use voice::{RecognitionEngine, RecognitionEvent, VoiceInput, VoiceState};
