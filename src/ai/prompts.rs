//! Fixed prompt and reply texts used by the relay.

/// `/query` reply when the completion service fails.
pub const QUERY_FAILURE_REPLY: &str = "❌ Failed to get response from Gemini.";

/// `/query` reply when the request carries neither text nor a sketch.
pub const EMPTY_QUERY_REPLY: &str = "❌ Please provide a message or a sketch.";

/// Spoken instead of a summary when summarization fails.
pub const SUMMARY_FALLBACK: &str = "Here's your answer. Ask more if needed!";

/// Closing line the summary should carry for long or technical answers only.
pub const SCREEN_POINTER: &str = "You can also check the screen for more details.";

/// One-shot instruction asking for a 1-2 sentence voice-friendly condensation of `full_text`.
pub fn speech_summary_prompt(full_text: &str) -> String {
    format!(
        "Here is a full message the assistant is about to show:\n\
         \"\"\"\n\
         {full_text}\n\
         \"\"\"\n\
         Now generate a short voice-friendly version that the assistant should say aloud to the user.\n\
         Keep it brief, 1 to 2 sentences max.\n\
         If the message is long, technical, or multi-step, end your reply with:\n\
         \"{SCREEN_POINTER}\"\n\
         But if the message is very short (e.g., just naming a shape or giving a quick definition), \
         then skip that line.\n\
         Respond naturally like a helpful voice assistant."
    )
}
