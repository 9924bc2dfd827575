use crate::actors::messages::RemoteError;
use crate::actors::traits::{build_messages, CompletionClient, CompletionRequest};
use crate::config::{with_trailing_slash, RemoteConfig};
use crate::models::{ChatMessage, CompletionOptions};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info};
use url::Url;

// --- Constants ---
/// Number of history turns forwarded to the remote model.
pub const REMOTE_CONTEXT_TURNS: usize = 4;
const CHAT_COMPLETIONS_PATH: &str = "v1/chat/completions";
const API_KEY_PREFIX: &str = "sk-";

// --- Wire types ---
#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
    presence_penalty: f32,
    frequency_penalty: f32,
}

impl<'a> ChatCompletionBody<'a> {
    fn new(options: &'a CompletionOptions, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: &options.model,
            messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            presence_penalty: options.presence_penalty,
            frequency_penalty: options.frequency_penalty,
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
///
/// Each call is a single attempt bounded by the configured timeout.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    config: RemoteConfig,
    bot_name: String,
}

impl OpenAiClient {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `config` - Remote settings (key, base URL, sampling options, timeout).
    /// * `bot_name` - Speaker name whose turns are sent with the `assistant` role.
    pub fn new(config: RemoteConfig, bot_name: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            config,
            bot_name: bot_name.into(),
        }
    }

    fn credential(&self) -> Result<&str, RemoteError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(RemoteError::MissingCredential)?;
        if !key.starts_with(API_KEY_PREFIX) {
            return Err(RemoteError::InvalidCredential);
        }
        Ok(key)
    }

    fn endpoint(&self) -> Result<Url, RemoteError> {
        with_trailing_slash(self.config.base_url.clone())
            .join(CHAT_COMPLETIONS_PATH)
            .map_err(|e| RemoteError::Transport(format!("invalid endpoint: {}", e)))
    }

    async fn send(&self, token: &str, body: &ChatCompletionBody<'_>) -> Result<String, RemoteError> {
        let res = self
            .client
            .post(self.endpoint()?)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = res.text().await?;
        extract_reply(&raw)
    }
}

/// Pulls `choices[0].message.content` out of a response body.
fn extract_reply(raw: &str) -> Result<String, RemoteError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(raw)
        .map_err(|e| RemoteError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or_else(|| {
            RemoteError::MalformedResponse("missing choices[0].message.content".to_string())
        })
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, RemoteError> {
        let token = self.credential()?;
        let messages = build_messages(
            &self.config.system_prompt,
            &request,
            &self.bot_name,
            REMOTE_CONTEXT_TURNS,
        );
        debug!(
            "Sending {} messages to remote model {}",
            messages.len(),
            self.config.options.model
        );
        let body = ChatCompletionBody::new(&self.config.options, messages);

        let reply = timeout(self.config.timeout(), self.send(token, &body))
            .await
            .map_err(|_| RemoteError::Timeout(self.config.timeout_secs))??;

        info!("Remote model replied ({} chars)", reply.len());
        Ok(reply)
    }
}
