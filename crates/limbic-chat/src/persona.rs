//! The three fixed character identities and the legacy text detector

use serde::{Deserialize, Serialize};

/// One of the three fixed personas a conversation can be held with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Joy,
    Anger,
    Sadness,
}

impl Persona {
    /// Display name injected into the system prompt
    pub const fn name(self) -> &'static str {
        match self {
            Self::Joy => "Joy",
            Self::Anger => "Anger",
            Self::Sadness => "Sadness",
        }
    }

    /// Derive a persona from the first message's text
    ///
    /// Case-sensitive substring match checked in a fixed order, so text
    /// mentioning several names resolves to the earliest entry and text
    /// mentioning none falls back to Sadness. Kept for clients that do
    /// not send an explicit `persona` field; new clients should.
    pub fn detect(text: &str) -> Self {
        if text.contains("Joy") {
            Self::Joy
        } else if text.contains("Anger") {
            Self::Anger
        } else {
            Self::Sadness
        }
    }

    /// System prompt that keeps the model in character
    pub fn system_prompt(self) -> String {
        format!(
            "You are {}. Maintain your character's personality and respond accordingly.",
            self.name()
        )
    }
}
