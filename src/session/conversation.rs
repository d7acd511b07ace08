use crate::ai::{Part, Role, Turn};

/// Append-only log of turns replayed to the completion service on every call.
#[derive(Debug, Clone, Default)]
pub struct ConversationBuffer {
    turns: Vec<Turn>,
}

impl ConversationBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, parts: Vec<Part>) {
        self.turns.push(Turn::user(parts));
    }

    pub fn push_model(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::model(text));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// True when the last user turn never got an answer.
    pub fn has_dangling_user_turn(&self) -> bool {
        matches!(self.turns.last(), Some(turn) if turn.role == Role::User)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_in_append_order() {
        let mut buffer = ConversationBuffer::new();
        assert!(buffer.is_empty());

        buffer.push_user(vec![Part::text("draw a circle")]);
        assert!(buffer.has_dangling_user_turn());
        buffer.push_model("Here is a circle.");
        assert!(!buffer.has_dangling_user_turn());

        let roles: Vec<Role> = buffer.turns().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Model]);
        assert_eq!(buffer.turns()[1].parts[0].as_text(), Some("Here is a circle."));
    }
}
