use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// How a turn entered the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TurnKind {
    /// Typed by a user.
    #[default]
    Text,
    /// Spoken by a user and transcribed by the client.
    Voice,
    /// Produced by the bot.
    #[serde(rename = "bot")]
    Generated,
}

/// Represents a single message within a room's conversation.
///
/// Turns are never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Display name of whoever produced the turn.
    pub speaker: String,
    /// The text content of the turn.
    pub text: String,
    /// Typed, spoken or generated.
    pub kind: TurnKind,
    /// When the turn was created.
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>, kind: TurnKind) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            kind,
            timestamp: Utc::now(),
        }
    }

    pub fn user(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(speaker, text, TurnKind::Text)
    }

    pub fn voice(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(speaker, text, TurnKind::Voice)
    }

    pub fn generated(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(speaker, text, TurnKind::Generated)
    }

    /// Whether this turn was produced by the bot called `bot_name`.
    pub fn is_from_bot(&self, bot_name: &str) -> bool {
        self.kind == TurnKind::Generated || self.speaker == bot_name
    }
}

/// Role tag of a message sent to the remote completion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A role-tagged message as understood by chat-completion APIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Maps a conversation turn onto a role-tagged message.
    pub fn from_turn(turn: &Turn, bot_name: &str) -> Self {
        let role = if turn.is_from_bot(bot_name) {
            ChatRole::Assistant
        } else {
            ChatRole::User
        };
        Self::new(role, turn.text.clone())
    }
}

/// Represents the sampling configuration for the remote model.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct CompletionOptions {
    /// The identifier of the remote model.
    #[validate(length(min = 1))]
    pub model: String,
    /// Upper bound on generated tokens.
    #[validate(range(min = 1, max = 4096))]
    pub max_tokens: u32,
    /// Controls the creativity of the model's responses. Value between 0.0 and 2.0.
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: f32,
    #[validate(range(min = -2.0, max = 2.0))]
    pub presence_penalty: f32,
    #[validate(range(min = -2.0, max = 2.0))]
    pub frequency_penalty: f32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 200,
            temperature: 0.7,
            presence_penalty: 0.1,
            frequency_penalty: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_kind_wire_names() {
        assert_eq!(serde_json::to_string(&TurnKind::Text).unwrap(), "\"text\"");
        assert_eq!(serde_json::to_string(&TurnKind::Voice).unwrap(), "\"voice\"");
        assert_eq!(serde_json::to_string(&TurnKind::Generated).unwrap(), "\"bot\"");
    }

    #[test]
    fn test_chat_message_roles_from_turns() {
        let user = Turn::voice("alice", "hello");
        let bot = Turn::generated("ChatBot", "Hi there!");
        let legacy_bot = Turn::user("ChatBot", "stored without kind");

        assert_eq!(ChatMessage::from_turn(&user, "ChatBot").role, ChatRole::User);
        assert_eq!(ChatMessage::from_turn(&bot, "ChatBot").role, ChatRole::Assistant);
        assert_eq!(ChatMessage::from_turn(&legacy_bot, "ChatBot").role, ChatRole::Assistant);
    }

    #[test]
    fn test_default_completion_options_are_valid() {
        let options = CompletionOptions::default();
        assert!(options.validate().is_ok());

        let options = CompletionOptions {
            temperature: 3.5,
            ..CompletionOptions::default()
        };
        assert!(options.validate().is_err());
    }
}
