//! Core type definitions for extracted conversation data

use serde::{Deserialize, Serialize};

/// Speaker role, inferred from an element's class attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Human-authored message
    Prompter,
    /// Machine-authored message
    Chat,
}

impl Role {
    /// Classify a class attribute value as a speaker role
    ///
    /// Case-insensitive substring match. "user" wins over the assistant
    /// markers, so a class carrying both still classifies as Prompter.
    pub fn from_class(classes: &str) -> Option<Role> {
        let classes = classes.to_lowercase();
        if classes.contains("user") {
            Some(Role::Prompter)
        } else if classes.contains("assistant")
            || classes.contains("bot")
            || classes.contains("chatgpt")
        {
            Some(Role::Chat)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Prompter => write!(f, "PROMPTER"),
            Role::Chat => write!(f, "CHAT"),
        }
    }
}

/// One extracted message: a speaker role and its trimmed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}
