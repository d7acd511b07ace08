use chrono::{DateTime, Local};

/// Handle to a line in the chat, used to take a placeholder back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(u64);

/// Where the conversation is shown to the user.
pub trait ChatView: Send {
    /// `text` is the raw reply; rendering markdown, if any, is up to the view.
    fn push(&mut self, sender: &str, text: &str) -> MessageId;

    /// Notice shown outside the conversation, e.g. when there is nothing to send.
    fn alert(&mut self, message: &str);

    /// Removing an unknown or already removed id is a no-op.
    fn remove(&mut self, id: MessageId);
}

#[derive(Debug, Clone)]
pub struct ChatEntry {
    pub id: MessageId,
    pub sender: String,
    pub text: String,
    pub time: DateTime<Local>,
}

/// Plain-text chat log, rendered like a scrolling textarea.
#[derive(Debug, Default)]
pub struct TranscriptChat {
    entries: Vec<ChatEntry>,
    alerts: Vec<String>,
    preamble: Option<String>,
    timestamps: bool,
    next_id: u64,
}

impl TranscriptChat {
    pub fn new(preamble: Option<&str>, timestamps: bool) -> Self {
        Self {
            entries: Vec::new(),
            alerts: Vec::new(),
            preamble: preamble.map(str::to_string),
            timestamps,
            next_id: 0,
        }
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn render(&self) -> String {
        let mut out = self.preamble.clone().unwrap_or_default();
        for entry in &self.entries {
            if self.timestamps {
                out.push_str(&format!(
                    "\n[{}] {}: {}\n",
                    entry.time.format("%H:%M:%S"),
                    entry.sender,
                    entry.text
                ));
            } else {
                out.push_str(&format!("\n{}: {}\n", entry.sender, entry.text));
            }
        }
        out
    }
}

impl ChatView for TranscriptChat {
    fn push(&mut self, sender: &str, text: &str) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.entries.push(ChatEntry {
            id,
            sender: sender.to_string(),
            text: text.to_string(),
            time: Local::now(),
        });
        id
    }

    fn remove(&mut self, id: MessageId) {
        self.entries.retain(|entry| entry.id != id);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_removal_targets_only_its_line() {
        let mut chat = TranscriptChat::new(Some("Welcome!"), false);
        chat.push("YOU", "first");
        let pending = chat.push("AI", "Processing...");
        chat.push("YOU", "second");

        chat.remove(pending);
        chat.remove(pending);

        assert_eq!(chat.render(), "Welcome!\nYOU: first\n\nYOU: second\n");
    }

    #[test]
    fn alerts_stay_out_of_the_transcript() {
        let mut chat = TranscriptChat::new(None, false);
        chat.alert("Please enter a prompt first!");
        assert_eq!(chat.alerts(), ["Please enter a prompt first!"]);
        assert!(chat.entries().is_empty());
        assert_eq!(chat.render(), "");
    }

    #[test]
    fn timestamps_prefix_each_line() {
        let mut chat = TranscriptChat::new(None, true);
        chat.push("TUTOR", "Hello");
        let rendered = chat.render();
        assert!(rendered.starts_with("\n["));
        assert!(rendered.ends_with("] TUTOR: Hello\n"));
    }
}
