//! Conversation model for the career-advisor chat.
//!
//! A [`Conversation`] is an ordered, append-only sequence of turns for one
//! session. Only the most recent turns (see [`Conversation::HISTORY_WINDOW`])
//! are forwarded as context to a live backend call.

pub mod responder;

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One message exchanged in the chat widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
    /// Follow-up prompts offered alongside an assistant turn.
    pub suggestions: Vec<String>,
}

impl ConversationTurn {
    /// Creates a user turn. User turns carry no suggestions.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            suggestions: Vec::new(),
        }
    }

    /// Creates an assistant turn with its follow-up suggestions.
    pub fn assistant(text: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
            suggestions,
        }
    }
}

/// An advisor reply: text plus 0-3 suggested follow-up prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    pub suggestions: Vec<String>,
}

impl ChatReply {
    /// Creates a reply.
    pub fn new(text: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            text: text.into(),
            suggestions,
        }
    }

    /// Converts into an assistant turn.
    pub fn into_turn(self) -> ConversationTurn {
        ConversationTurn::assistant(self.text, self.suggestions)
    }
}

/// Append-only turn history for one chat session.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<ConversationTurn>,
}

impl Conversation {
    /// Number of trailing turns forwarded to a live backend as context.
    pub const HISTORY_WINDOW: usize = 5;

    /// Creates an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a conversation seeded with the advisor's welcome turn.
    pub fn with_welcome() -> Self {
        let welcome = ConversationTurn::assistant(
            "Hi! I'm your AI career advisor. I can help you understand your \
             skill risk, suggest learning paths, and answer questions about \
             your career. How can I help you today?",
            vec![
                "What skills should I learn?".to_string(),
                "How does automation affect me?".to_string(),
                "What's my career outlook?".to_string(),
            ],
        );
        Self {
            turns: vec![welcome],
        }
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Appends a turn.
    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// The trailing [`Self::HISTORY_WINDOW`] turns, for backend context.
    pub fn recent(&self) -> &[ConversationTurn] {
        let start = self.turns.len().saturating_sub(Self::HISTORY_WINDOW);
        &self.turns[start..]
    }
}
