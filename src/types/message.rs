use serde::{Deserialize, Serialize};

/// A diagnostic message surfaced to the user alongside the tab list.
///
/// Info messages are purely informational; Warning and Error messages carry
/// a suggested resolution the UI can reveal on demand. None of these block
/// anything; the switcher keeps working with reduced functionality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    Info { message: String },
    Warning { message: String, resolution: String },
    Error { message: String, resolution: String },
}

impl Message {
    pub fn info(message: impl Into<String>) -> Self {
        Message::Info {
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>, resolution: impl Into<String>) -> Self {
        Message::Warning {
            message: message.into(),
            resolution: resolution.into(),
        }
    }

    pub fn error(message: impl Into<String>, resolution: impl Into<String>) -> Self {
        Message::Error {
            message: message.into(),
            resolution: resolution.into(),
        }
    }

    /// The user-facing message text.
    pub fn text(&self) -> &str {
        match self {
            Message::Info { message }
            | Message::Warning { message, .. }
            | Message::Error { message, .. } => message,
        }
    }
}

/// Accumulated diagnostics for a UI surface.
///
/// Pushing a message that is already present is a no-op, and messages are
/// removed by value identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message unless an identical one is already present.
    /// Returns true if the message was added.
    pub fn push(&mut self, message: Message) -> bool {
        if self.messages.contains(&message) {
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Removes the message equal to `message`, if present.
    /// Returns true if a message was removed.
    pub fn remove(&mut self, message: &Message) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m != message);
        self.messages.len() != before
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
