// ChatBot core library
// Rule-based responder, remote completion client and the supervisor that ties them together

pub mod actors;
pub mod brain;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod history;
pub mod models;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use actors::supervisor::{BotReply, ReplyOrchestrator, ReplySource, SupervisorHandle};
pub use brain::ResponseEngine;
pub use config::AppConfig;
pub use error::AppError;
pub use models::{Turn, TurnKind};
