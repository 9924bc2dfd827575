//! Runtime configuration read from the environment (and `.env`, if present).

use std::env;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;
use validator::Validate;

use crate::error::AppError;
use crate::models::CompletionOptions;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_BOT_NAME: &str = "ChatBot";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_HISTORY_WINDOW: usize = 6;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are ChatBot, a friendly and helpful voice-enabled chat assistant. You should:
- Be conversational and engaging
- Keep responses concise but informative (1-3 sentences)
- Be helpful and answer questions to the best of your ability
- Show personality and be friendly
- If you don't know something, admit it honestly
- Encourage further conversation
- Remember you can both receive text and voice messages
- Be supportive and positive
- Use the conversation history to provide contextual responses
- Remember what was discussed earlier in the conversation";

/// Settings for the remote completion service.
#[derive(Debug, Clone, Validate)]
pub struct RemoteConfig {
    /// Bearer token. `None` means the remote path is disabled.
    pub api_key: Option<String>,
    pub base_url: Url,
    #[validate(nested)]
    pub options: CompletionOptions,
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
    #[validate(length(min = 1))]
    pub system_prompt: String,
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            options: CompletionOptions::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Validate)]
pub struct AppConfig {
    /// Speaker name used for generated turns.
    #[validate(length(min = 1))]
    pub bot_name: String,
    /// Number of recent turns handed to the reply pipeline.
    #[validate(range(min = 1, max = 50))]
    pub history_window: usize,
    #[validate(nested)]
    pub remote: RemoteConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bot_name: DEFAULT_BOT_NAME.to_string(),
            history_window: DEFAULT_HISTORY_WINDOW,
            remote: RemoteConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if any) and builds the configuration from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        if let Err(e) = dotenv::dotenv() {
            info!("No .env file loaded: {}", e);
        }
        Self::from_current_env()
    }

    /// Builds the configuration from the current process environment only.
    pub fn from_current_env() -> Result<Self, AppError> {
        let defaults = AppConfig::default();

        let api_key = env::var("OPENAI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        if api_key.is_none() {
            warn!("OPENAI_API_KEY is not set, replies will come from the rule engine only");
        }

        let base_url = match env::var("OPENAI_BASE_URL") {
            Ok(raw) => with_trailing_slash(Url::parse(raw.trim())?),
            Err(_) => defaults.remote.base_url.clone(),
        };

        let options = CompletionOptions {
            model: env::var("OPENAI_MODEL").unwrap_or(defaults.remote.options.model.clone()),
            ..defaults.remote.options.clone()
        };

        let config = AppConfig {
            bot_name: env::var("CHATBOT_NAME").unwrap_or(defaults.bot_name),
            history_window: parse_var("CHATBOT_HISTORY_WINDOW", defaults.history_window)?,
            remote: RemoteConfig {
                api_key,
                base_url,
                options,
                timeout_secs: parse_var("OPENAI_TIMEOUT_SECS", defaults.remote.timeout_secs)?,
                system_prompt: env::var("CHATBOT_SYSTEM_PROMPT")
                    .unwrap_or(defaults.remote.system_prompt),
            },
        };

        config.validate()?;
        Ok(config)
    }
}

/// Makes `url` usable as a base for relative joins.
///
/// `Url::join` replaces the last path segment unless the path ends in `/`,
/// so `https://proxy/openai` becomes `https://proxy/openai/`.
pub fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} is invalid: {}", name, e))),
        Err(_) => Ok(default),
    }
}
