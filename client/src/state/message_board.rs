//! Project message board: posted messages and their vote counts.
//!
//! DESIGN
//! ======
//! Messages are only appended and upvoted, never edited or removed. Ids come
//! from the caller's clock but are bumped past the last id so they stay
//! strictly increasing.

#[cfg(test)]
#[path = "message_board_test.rs"]
mod message_board_test;

/// Project message board: append-only messages with upvotes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageBoardState {
    messages: Vec<Message>,
    last_id: u64,
}

/// A single board message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub user: String,
    pub text: String,
    pub votes: u32,
}

impl Default for MessageBoardState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl MessageBoardState {
    /// Empty board.
    pub fn new() -> Self {
        Self { messages: Vec::new(), last_id: 0 }
    }

    /// Board with the two welcome messages every project starts with.
    pub fn seeded() -> Self {
        let messages = vec![
            Message { id: 1, user: "User1".to_owned(), text: "First message".to_owned(), votes: 0 },
            Message { id: 2, user: "User2".to_owned(), text: "Second message".to_owned(), votes: 0 },
        ];
        Self { messages, last_id: 2 }
    }

    /// Messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a message posted at `now_ms` (milliseconds since the epoch).
    ///
    /// Blank text is ignored and returns `None`. Ids follow the clock but
    /// never repeat: two posts in the same millisecond get consecutive ids.
    pub fn add_message(&mut self, user: &str, text: &str, now_ms: u64) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        self.messages.push(Message { id, user: user.to_owned(), text: text.to_owned(), votes: 0 });
        log::debug!("message {id} posted by {user}");
        Some(id)
    }

    /// Add one vote to `message_id`. Returns `false` when no such message exists.
    pub fn upvote(&mut self, message_id: u64) -> bool {
        match self.messages.iter_mut().find(|m| m.id == message_id) {
            Some(message) => {
                message.votes = message.votes.saturating_add(1);
                true
            }
            None => false,
        }
    }
}
