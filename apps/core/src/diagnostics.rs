//! Health reporting for the chat service.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub ai_responses: bool,
    pub fallback_responses: bool,
    pub voice_chat: bool,
    pub message_storage: bool,
}

/// Snapshot of what the service can currently do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    /// Whether an API key for the remote model is present.
    pub remote_configured: bool,
    pub features: FeatureFlags,
    /// Number of rooms with at least one stored turn.
    pub active_rooms: usize,
}

impl HealthReport {
    pub fn new(config: &AppConfig, active_rooms: usize) -> Self {
        let remote_configured = config.remote.is_configured();
        Self {
            status: "healthy".to_string(),
            remote_configured,
            features: FeatureFlags {
                ai_responses: remote_configured,
                fallback_responses: true,
                voice_chat: true,
                message_storage: true,
            },
            active_rooms,
        }
    }
}
