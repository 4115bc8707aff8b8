use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four mutually exclusive screens of a ClearLoop session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Landing screen - invitation to start
    Welcome,
    /// Free-form chat phase
    Unload,
    /// Reached after a reflection has been generated
    Reflect,
    /// Reached after a decision framework has been generated
    Decide,
}

impl Screen {
    pub fn display_name(&self) -> &'static str {
        match self {
            Screen::Welcome => "ClearLoop",
            Screen::Unload => "Unload",
            Screen::Reflect => "Reflection",
            Screen::Decide => "Decision Mode",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Screen::Welcome => "An AI thought companion for overthinkers",
            Screen::Unload => "Say what you need to say",
            Screen::Reflect => "Here's what I'm noticing",
            Screen::Decide => "Let's separate what happened from what you're predicting",
        }
    }
}

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageOrigin {
    User,
    Assistant,
}

/// Presentation-only marker for special assistant replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Annotation {
    Reflection,
    Decision,
}

/// A single entry in the user-visible transcript. Append-only, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayMessage {
    pub origin: MessageOrigin,
    pub text: String,
    pub annotation: Option<Annotation>,
    pub timestamp: DateTime<Utc>,
}

impl DisplayMessage {
    pub fn user(text: String) -> Self {
        Self {
            origin: MessageOrigin::User,
            text,
            annotation: None,
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(text: String, annotation: Option<Annotation>) -> Self {
        Self {
            origin: MessageOrigin::Assistant,
            text,
            annotation,
            timestamp: Utc::now(),
        }
    }
}

/// Role in the model-facing dialogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// One turn of the model-facing dialogue, sent in full on every call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}
