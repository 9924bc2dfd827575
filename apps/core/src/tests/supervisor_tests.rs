//! Supervisor Tests
//!
//! Drives the actor through its handle: room history bookkeeping, input
//! validation, context continuation across messages and remote fallback.

use crate::actors::messages::RemoteError;
use crate::actors::supervisor::{ReplySource, SupervisorHandle};
use crate::actors::traits::{CompletionClient, CompletionRequest};
use crate::brain::{replies, FixedSelector, ResponseEngine};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::TurnKind;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

// --- Mock Components ---

struct ScriptedClient {
    response: Result<String, RemoteError>,
    calls: AtomicUsize,
    last_history_len: Mutex<Option<usize>>,
}

impl ScriptedClient {
    fn new(response: Result<String, RemoteError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
            last_history_len: Mutex::new(None),
        })
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_history_len.lock().unwrap() = Some(request.history.len());
        self.response.clone()
    }
}

/// Takes most of the remote timeout, then fails.
struct SlowFailingClient {
    delay: Duration,
}

#[async_trait]
impl CompletionClient for SlowFailingClient {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, RemoteError> {
        tokio::time::sleep(self.delay).await;
        Err(RemoteError::Status {
            status: 503,
            body: "overloaded".to_string(),
        })
    }
}

fn local_only() -> SupervisorHandle {
    SupervisorHandle::with_parts::<ScriptedClient, _, _>(
        AppConfig::default(),
        None,
        Arc::new(ResponseEngine::new()),
        FixedSelector(0),
    )
}

fn with_client(client: Arc<ScriptedClient>) -> SupervisorHandle {
    SupervisorHandle::with_parts(
        AppConfig::default(),
        Some(client),
        Arc::new(ResponseEngine::new()),
        FixedSelector(0),
    )
}

async fn say(handle: &SupervisorHandle, room: &str, text: &str) -> Result<String, AppError> {
    handle
        .process_message(room.to_string(), "alice".to_string(), text.to_string(), TurnKind::Text)
        .await
        .map(|reply| reply.text)
}

#[cfg(test)]
mod history_tests {
    use super::*;

    #[tokio::test]
    async fn test_user_and_bot_turns_are_stored_in_order() {
        // 1. Arrange
        let handle = local_only();

        // 2. Act
        let first = say(&handle, "general", "hello").await.unwrap();
        handle
            .process_message(
                "general".to_string(),
                "bob".to_string(),
                "thanks".to_string(),
                TurnKind::Voice,
            )
            .await
            .unwrap();

        // 3. Assert
        let turns = handle.room_history("general".to_string(), 50).await.unwrap();
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0].speaker, "alice");
        assert_eq!(turns[0].text, "hello");
        assert_eq!(turns[0].kind, TurnKind::Text);
        assert_eq!(turns[1].speaker, "ChatBot");
        assert_eq!(turns[1].text, first);
        assert_eq!(turns[1].kind, TurnKind::Generated);
        assert_eq!(turns[2].kind, TurnKind::Voice);
        assert_eq!(turns[3].text, replies::THANKS[0]);
        assert!(turns.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[tokio::test]
    async fn test_text_is_trimmed_before_storage() {
        let handle = local_only();

        say(&handle, "general", "   hello   ").await.unwrap();

        let turns = handle.room_history("general".to_string(), 1).await.unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].speaker, "ChatBot");
        let all = handle.room_history("general".to_string(), 50).await.unwrap();
        assert_eq!(all[0].text, "hello");
    }

    #[tokio::test]
    async fn test_unknown_room_is_empty() {
        let handle = local_only();
        let turns = handle.room_history("nowhere".to_string(), 10).await.unwrap();
        assert!(turns.is_empty());
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_message_is_rejected_and_not_stored() {
        let handle = local_only();

        let result = say(&handle, "general", "   \n\t").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        let turns = handle.room_history("general".to_string(), 50).await.unwrap();
        assert!(turns.is_empty());
    }

    #[tokio::test]
    async fn test_generated_kind_is_rejected() {
        let handle = local_only();

        let result = handle
            .process_message(
                "general".to_string(),
                "mallory".to_string(),
                "I am the bot".to_string(),
                TurnKind::Generated,
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}

#[cfg(test)]
mod context_tests {
    use super::*;

    #[tokio::test]
    async fn test_music_continuation_across_messages() {
        let handle = local_only();

        let first = say(&handle, "general", "let's talk about music").await.unwrap();
        let second = say(&handle, "general", "yeah").await.unwrap();

        assert_eq!(first, replies::MUSIC);
        assert_eq!(second, replies::MUSIC_FOLLOW_UP);
    }

    #[tokio::test]
    async fn test_rooms_do_not_share_context() {
        let handle = local_only();

        say(&handle, "music-room", "let's talk about music").await.unwrap();
        let elsewhere = say(&handle, "quiet-room", "yeah").await.unwrap();

        assert_eq!(elsewhere, replies::CONTINUERS[0]);
        let quiet = handle.room_history("quiet-room".to_string(), 50).await.unwrap();
        assert_eq!(quiet.len(), 2);
    }
}

#[cfg(test)]
mod remote_tests {
    use super::*;

    #[tokio::test]
    async fn test_remote_reply_is_stored() {
        let client = ScriptedClient::new(Ok("From the model".to_string()));
        let handle = with_client(client.clone());

        let reply = handle
            .process_message(
                "general".to_string(),
                "alice".to_string(),
                "hello".to_string(),
                TurnKind::Text,
            )
            .await
            .unwrap();

        assert_eq!(reply.source, ReplySource::Remote);
        assert_eq!(reply.text, "From the model");
        let turns = handle.room_history("general".to_string(), 50).await.unwrap();
        assert_eq!(turns[1].text, "From the model");
        // Snapshot is taken before the current utterance is stored.
        assert_eq!(*client.last_history_len.lock().unwrap(), Some(0));
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_through_actor() {
        let client = ScriptedClient::new(Err(RemoteError::Status {
            status: 429,
            body: "rate limited".to_string(),
        }));
        let handle = with_client(client.clone());

        let reply = handle
            .process_message(
                "general".to_string(),
                "alice".to_string(),
                "hello".to_string(),
                TurnKind::Text,
            )
            .await
            .unwrap();

        assert_eq!(reply.source, ReplySource::Fallback);
        assert_eq!(reply.text, replies::GREETINGS[0]);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        let turns = handle.room_history("general".to_string(), 50).await.unwrap();
        assert_eq!(turns[1].text, replies::GREETINGS[0]);
    }

    #[tokio::test]
    async fn test_history_window_bounds_the_snapshot() {
        let client = ScriptedClient::new(Ok("ok then".to_string()));
        let handle = with_client(client.clone());

        for i in 0..5 {
            say(&handle, "general", &format!("message {}", i)).await.unwrap();
        }

        // Ten turns stored, the default window hands six to the pipeline.
        assert_eq!(*client.last_history_len.lock().unwrap(), Some(6));
        assert_eq!(client.calls.load(Ordering::SeqCst), 5);
    }
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_counts_active_rooms() {
        let handle = local_only();

        say(&handle, "a", "hello").await.unwrap();
        say(&handle, "b", "hello").await.unwrap();
        let report = handle.health().await.unwrap();

        assert_eq!(report.status, "healthy");
        assert_eq!(report.active_rooms, 2);
        assert!(!report.remote_configured);
        assert!(report.features.fallback_responses);
    }

    #[tokio::test]
    async fn test_calls_fail_after_shutdown() {
        let handle = local_only();
        handle.shutdown().await.unwrap();

        let result = say(&handle, "general", "hello").await;

        assert!(matches!(result, Err(AppError::Actor(_))));
    }
}

#[cfg(test)]
mod room_independence_tests {
    use super::*;

    fn slow_supervisor() -> SupervisorHandle {
        let mut config = AppConfig::default();
        config.remote.timeout_secs = 1;
        SupervisorHandle::with_parts(
            config,
            Some(Arc::new(SlowFailingClient {
                delay: Duration::from_millis(900),
            })),
            Arc::new(ResponseEngine::new()),
            FixedSelector(0),
        )
    }

    #[tokio::test]
    async fn test_slow_remote_in_many_rooms_still_answers_everyone() {
        // 1. Arrange
        let handle = slow_supervisor();
        let started = Instant::now();

        // 2. Act
        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let handle = handle.clone();
                tokio::spawn(async move {
                    handle
                        .process_message(
                            format!("room-{}", i),
                            "alice".to_string(),
                            "hello".to_string(),
                            TurnKind::Text,
                        )
                        .await
                })
            })
            .collect();

        // 3. Assert
        for task in tasks {
            let reply = task.await.unwrap().unwrap();
            assert_eq!(reply.source, ReplySource::Fallback);
            assert_eq!(reply.text, replies::GREETINGS[0]);
        }
        // Rooms ran side by side rather than one after another.
        assert!(started.elapsed() < Duration::from_secs(4));

        let report = handle.health().await.unwrap();
        assert_eq!(report.active_rooms, 8);
        for i in 0..8 {
            let turns = handle.room_history(format!("room-{}", i), 50).await.unwrap();
            assert_eq!(turns.len(), 2);
        }
    }

    #[tokio::test]
    async fn test_queries_are_not_blocked_by_remote_calls() {
        let handle = slow_supervisor();

        let pending = {
            let handle = handle.clone();
            tokio::spawn(async move { say(&handle, "busy", "hello").await })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;

        let started = Instant::now();
        let turns = handle.room_history("busy".to_string(), 50).await.unwrap();
        assert!(started.elapsed() < Duration::from_millis(500));
        // The user turn is stored, the reply is still in flight.
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].text, "hello");

        assert_eq!(pending.await.unwrap().unwrap(), replies::GREETINGS[0]);
    }

    #[tokio::test]
    async fn test_one_room_keeps_turn_order_under_slow_remote() {
        let handle = slow_supervisor();

        let first = {
            let handle = handle.clone();
            tokio::spawn(async move { say(&handle, "ordered", "hello").await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        let second = {
            let handle = handle.clone();
            tokio::spawn(async move { say(&handle, "ordered", "thanks").await })
        };

        assert_eq!(first.await.unwrap().unwrap(), replies::GREETINGS[0]);
        assert_eq!(second.await.unwrap().unwrap(), replies::THANKS[0]);

        let turns = handle.room_history("ordered".to_string(), 50).await.unwrap();
        let texts: Vec<&str> = turns.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["hello", replies::GREETINGS[0], "thanks", replies::THANKS[0]]
        );
    }
}
