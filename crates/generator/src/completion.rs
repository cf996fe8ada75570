use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompt::ChatMessage;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Missing OpenAI API key")]
    MissingApiKey,
    #[error("Completion request failed: {0}")]
    Network(String),
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error("Completion response invalid: {0}")]
    InvalidResponse(String),
    #[error("Completion returned no content")]
    EmptyResponse,
}

#[derive(Clone, Debug)]
pub struct CompletionRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

/// A chat-completion backend. Returns the raw text of the top choice.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct OpenAiChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: Option<OpenAiMessageResponse>,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessageResponse {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: Option<OpenAiError>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    message: Option<String>,
}

pub struct OpenAiCompletionClient {
    client: reqwest::Client,
    url: String,
    api_key: Option<SecretString>,
}

impl OpenAiCompletionClient {
    pub fn new(
        base_url: &str,
        api_key: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| CompletionError::Network(err.to_string()))?;
        Ok(Self {
            client,
            url: format_openai_url(base_url),
            api_key,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .filter(|key| !key.trim().is_empty())
            .ok_or(CompletionError::MissingApiKey)?;

        let body = OpenAiChatRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
        };

        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| CompletionError::Network(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = parse_openai_error(&body)
                .unwrap_or_else(|| body.trim().to_string())
                .trim()
                .to_string();
            let message = if message.is_empty() {
                format!("Completion failed with status {}", status)
            } else {
                message
            };
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let data = response
            .json::<OpenAiChatResponse>()
            .await
            .map_err(|err| CompletionError::InvalidResponse(err.to_string()))?;

        data.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(CompletionError::EmptyResponse)
    }
}

pub fn format_openai_url(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.ends_with("/v1") {
        format!("{}/chat/completions", trimmed)
    } else {
        format!("{}/v1/chat/completions", trimmed)
    }
}

fn parse_openai_error(body: &str) -> Option<String> {
    let parsed: OpenAiErrorResponse = serde_json::from_str(body).ok()?;
    parsed.error.and_then(|err| err.message)
}
