use serde::Serialize;
use tokio::sync::oneshot;

use crate::actors::supervisor::BotReply;
use crate::diagnostics::HealthReport;
use crate::models::{Turn, TurnKind};

/// Defines the ways a remote completion attempt can fail.
///
/// Callers treat every variant the same way (fall back to the rule engine);
/// the distinction only matters for logging.
#[derive(Debug, thiserror::Error, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RemoteError {
    /// No API key was configured.
    #[error("no API credential configured")]
    MissingCredential,
    /// The configured API key does not look like a valid key.
    #[error("API credential is not valid")]
    InvalidCredential,
    /// The request could not be sent or the body could not be read.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The service answered with a non-success status code.
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    /// The response did not contain the expected reply field.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0}s")]
    Timeout(u64),
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::MalformedResponse(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Messages that can be sent to the `SupervisorRunner`.
#[derive(Debug)]
pub enum SupervisorMessage {
    /// A new utterance in a room that needs a bot reply.
    ProcessUserMessage {
        room: String,
        sender: String,
        text: String,
        kind: TurnKind,
        /// A channel to send the bot reply back.
        responder: oneshot::Sender<Result<BotReply, AppError>>,
    },
    /// A request for the most recent turns of a room, oldest first.
    RoomHistory {
        room: String,
        limit: usize,
        responder: oneshot::Sender<Vec<Turn>>,
    },
    /// A request for the service health report.
    Health {
        responder: oneshot::Sender<HealthReport>,
    },
    /// A command to stop the supervisor loop.
    Shutdown,
}
