//! Turn types for dialogue transcripts

use serde::{Deserialize, Serialize};
use std::fmt;

/// The speaker of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human side of the dialogue
    User,
    /// The model side of the dialogue
    Bot,
}

impl Role {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One utterance in a dialogue
///
/// Turns have no mutating API; once appended to a transcript they stay as
/// they were recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    /// Create a turn
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a bot turn
    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(Role::Bot, content)
    }

    /// Who spoke
    pub fn role(&self) -> Role {
        self.role
    }

    /// What was said
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the user spoke this turn
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Whether the bot spoke this turn
    pub fn is_bot(&self) -> bool {
        self.role == Role::Bot
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.role, self.content)
    }
}
