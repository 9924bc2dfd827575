use crate::actors::messages::RemoteError;
use crate::models::{ChatMessage, ChatRole, Turn};
use async_trait::async_trait;

/// Everything the remote model needs to answer one utterance.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Recent turns, oldest first. The client decides how many it forwards.
    pub history: Vec<Turn>,
    /// The utterance being answered.
    pub utterance: String,
}

/// Defines the public interface for a remote completion backend.
///
/// This trait abstracts the specific service, allowing the chat supervisor to be
/// tested with mock clients and to run with no client at all.
#[async_trait]
pub trait CompletionClient: Send + Sync + 'static {
    /// Produces a reply for the request in a single attempt.
    ///
    /// Implementations must bound the call with a timeout and must not retry.
    async fn complete(&self, request: CompletionRequest) -> Result<String, RemoteError>;
}

/// Builds the role-tagged message list: system prompt, the last `context_turns`
/// turns, then the utterance as a user message.
pub fn build_messages(
    system_prompt: &str,
    request: &CompletionRequest,
    bot_name: &str,
    context_turns: usize,
) -> Vec<ChatMessage> {
    let start = request.history.len().saturating_sub(context_turns);
    let mut messages = Vec::with_capacity(context_turns + 2);
    messages.push(ChatMessage::new(ChatRole::System, system_prompt));
    messages.extend(
        request.history[start..]
            .iter()
            .map(|turn| ChatMessage::from_turn(turn, bot_name)),
    );
    messages.push(ChatMessage::new(ChatRole::User, request.utterance.clone()));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_messages_keeps_last_turns() {
        let history: Vec<Turn> = (0..6)
            .map(|i| {
                if i % 2 == 0 {
                    Turn::user("alice", format!("user {}", i))
                } else {
                    Turn::generated("ChatBot", format!("bot {}", i))
                }
            })
            .collect();
        let request = CompletionRequest {
            history,
            utterance: "and now?".to_string(),
        };

        let messages = build_messages("be nice", &request, "ChatBot", 4);

        assert_eq!(messages.len(), 6);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[1].content, "user 2");
        assert_eq!(messages[2].role, ChatRole::Assistant);
        assert_eq!(messages[5].role, ChatRole::User);
        assert_eq!(messages[5].content, "and now?");
    }
}
