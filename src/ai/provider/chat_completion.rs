//! Chat Completions Provider
//!
//! Adapter for OpenAI-compatible Chat Completions APIs. Serves OpenAI,
//! DeepSeek and Groq, which differ only in base URL, model and credential.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{CompletionProvider, ProviderConfig};
use crate::types::{ProviderError, Result};

/// Chat Completions provider with secure API key handling
pub struct ChatCompletionProvider {
    /// Stored securely - never exposed in logs or debug output
    api_key: SecretString,
    name: &'static str,
    api_base: String,
    model: String,
    temperature: f32,
    top_p: f32,
    max_tokens: usize,
    client: reqwest::Client,
}

impl std::fmt::Debug for ChatCompletionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionProvider")
            .field("api_key", &"[REDACTED]")
            .field("name", &self.name)
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl ChatCompletionProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = config.resolve_api_key()?;

        Ok(Self {
            api_key,
            name: config.kind.as_str(),
            api_base: config.api_base_or_default()?,
            model: config.model_or_default(),
            temperature: config.temperature,
            top_p: config.top_p,
            max_tokens: config.max_tokens,
            client: config.http_client()?,
        })
    }

    fn build_request(&self, system_instruction: &str, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_instruction.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
        }
    }
}

/// First choice's message text; missing or blank content is an error
fn first_choice_text(provider: &str, body: ChatCompletionResponse) -> Result<String> {
    body.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| ProviderError::empty(provider).into())
}

#[async_trait]
impl CompletionProvider for ChatCompletionProvider {
    async fn complete(&self, system_instruction: &str, prompt: &str) -> Result<String> {
        info!(
            "Generating with {} (model: {}, temperature: {})",
            self.name, self.model, self.temperature
        );

        let request = self.build_request(system_instruction, prompt);
        let url = format!("{}/chat/completions", self.api_base);

        debug!("Sending request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::request(self.name, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::status(self.name, status.as_u16(), &body).into());
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::parse(self.name, e))?;

        if let Some(usage) = &body.usage {
            debug!(
                "{} usage: {} prompt + {} completion tokens",
                self.name, usage.prompt_tokens, usage.completion_tokens
            );
        }

        first_choice_text(self.name, body)
    }

    fn name(&self) -> &str {
        self.name
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<UsageInfo>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageInfo {
    prompt_tokens: u32,
    completion_tokens: u32,
}
