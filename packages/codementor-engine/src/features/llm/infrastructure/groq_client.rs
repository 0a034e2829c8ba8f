//! Groq chat-completions adapter (OpenAI-compatible wire format)

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::LlmConfig;
use crate::errors::{LlmError, MentorError, Result};
use crate::features::llm::domain::{CompletionPort, CompletionRequest};

const MAX_ERROR_BODY_CHARS: usize = 300;

#[derive(Debug, Deserialize)]
struct ChatCompletionsResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

pub struct GroqClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GroqClient {
    /// Build a client from config; fails when no usable credential is set
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .usable_api_key()
            .ok_or(LlmError::MissingCredential)?
            .to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(MentorError::client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl CompletionPort for GroqClient {
    async fn complete(&self, request: &CompletionRequest) -> std::result::Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(
            "POST {} model={} messages={}",
            url,
            request.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let parsed: ChatCompletionsResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedJson(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(LlmError::EmptyCompletion)
    }

    fn provider_name(&self) -> &'static str {
        "groq"
    }
}
