//! Rolling conversation window.
//!
//! A window holds whole turns (one user message plus the assistant reply)
//! and drops the oldest turn once it is full. Requests carry only the last
//! [`CONTEXT_MESSAGES`] messages of it.

use serde::{Deserialize, Serialize};

/// Number of turns kept by [`ConversationWindow::default`].
pub const DEFAULT_MAX_TURNS: usize = 4;

/// Number of messages sent along as context with a request.
pub const CONTEXT_MESSAGES: usize = 4;

/// A single message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Role: "user" or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl ConversationTurn {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Bounded FIFO of recent exchanges.
///
/// # Example
///
/// ```rust
/// use ideation_core::ConversationWindow;
///
/// let mut window = ConversationWindow::new(2);
/// window.add_exchange("Trucks arrive late", "Add dock scheduling");
/// window.add_exchange("Too many returns", "Grade returns at the door");
/// window.add_exchange("Pickers walk too far", "Re-slot fast movers");
///
/// assert_eq!(window.turn_count(), 2);
/// assert_eq!(window.messages()[0].content, "Too many returns");
/// ```
#[derive(Debug, Clone)]
pub struct ConversationWindow {
    messages: Vec<ConversationTurn>,
    /// Maximum number of turns (user + assistant pairs) to keep.
    max_turns: usize,
}

impl Default for ConversationWindow {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}

impl ConversationWindow {
    /// Create an empty window keeping at most `max_turns` exchanges.
    pub fn new(max_turns: usize) -> Self {
        Self {
            messages: Vec::with_capacity(max_turns * 2),
            max_turns,
        }
    }

    /// Messages in the window, oldest first.
    pub fn messages(&self) -> &[ConversationTurn] {
        &self.messages
    }

    /// The last `limit` messages, oldest first.
    pub fn recent(&self, limit: usize) -> &[ConversationTurn] {
        let start = self.messages.len().saturating_sub(limit);
        &self.messages[start..]
    }

    /// Number of complete exchanges held.
    pub fn turn_count(&self) -> usize {
        self.messages.len() / 2
    }

    /// Maximum number of exchanges held.
    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a user message and assistant response, evicting the oldest
    /// exchange when the window is full.
    pub fn add_exchange(&mut self, user_msg: &str, assistant_msg: &str) {
        self.messages.push(ConversationTurn::user(user_msg));
        self.messages.push(ConversationTurn::assistant(assistant_msg));

        // Each turn is 2 messages
        let max_messages = self.max_turns * 2;
        if self.messages.len() > max_messages {
            let to_remove = self.messages.len() - max_messages;
            self.messages.drain(0..to_remove);
        }
    }

    /// Forget every exchange.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
