//! LLM Provider Abstraction
//!
//! Defines the `CompletionProvider` trait: one prompt in, one text out.
//! Each vendor style has its own adapter; `ProviderKind` selects one at
//! startup and `create_provider` builds it from an immutable `ProviderConfig`.
//!
//! ## Adapters
//!
//! - `chat_completion`: OpenAI, DeepSeek and Groq (role-tagged messages)
//! - `gemini`: Google generate-content API
//! - `rapidapi`: raw JSON-over-HTTPS aggregator

mod chat_completion;
mod gemini;
mod rapidapi;

#[cfg(test)]
pub(crate) mod test_server;

pub use chat_completion::ChatCompletionProvider;
pub use gemini::GeminiProvider;
pub use rapidapi::RapidApiProvider;

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::constants::{generation, network, providers as defaults};
use crate::types::{CareerError, Result};

// =============================================================================
// Provider Kind
// =============================================================================

/// Supported backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProviderKind {
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "groq")]
    Groq,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "rapidapi")]
    RapidApi,
    /// Astronomy picture feed with templated plans (no LLM)
    #[serde(rename = "space-feed")]
    SpaceFeed,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 6] = [
        Self::OpenAi,
        Self::DeepSeek,
        Self::Groq,
        Self::Gemini,
        Self::RapidApi,
        Self::SpaceFeed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::DeepSeek => "deepseek",
            Self::Groq => "groq",
            Self::Gemini => "gemini",
            Self::RapidApi => "rapidapi",
            Self::SpaceFeed => "space-feed",
        }
    }

    /// Human-readable vendor name for messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::DeepSeek => "DeepSeek",
            Self::Groq => "Groq",
            Self::Gemini => "Gemini",
            Self::RapidApi => "RapidAPI",
            Self::SpaceFeed => "NASA APOD",
        }
    }

    pub fn default_api_base(&self) -> &'static str {
        match self {
            Self::OpenAi => defaults::OPENAI_API_BASE,
            Self::DeepSeek => defaults::DEEPSEEK_API_BASE,
            Self::Groq => defaults::GROQ_API_BASE,
            Self::Gemini => defaults::GEMINI_API_BASE,
            Self::RapidApi => defaults::RAPIDAPI_API_BASE,
            Self::SpaceFeed => defaults::APOD_API_BASE,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAi => defaults::OPENAI_MODEL,
            Self::DeepSeek => defaults::DEEPSEEK_MODEL,
            Self::Groq => defaults::GROQ_MODEL,
            Self::Gemini => defaults::GEMINI_MODEL,
            Self::RapidApi => defaults::RAPIDAPI_MODEL,
            Self::SpaceFeed => "template",
        }
    }

    /// Environment variable holding the credential
    pub fn key_env(&self) -> &'static str {
        match self {
            Self::OpenAi => defaults::OPENAI_KEY_ENV,
            Self::DeepSeek => defaults::DEEPSEEK_KEY_ENV,
            Self::Groq => defaults::GROQ_KEY_ENV,
            Self::Gemini => defaults::GEMINI_KEY_ENV,
            Self::RapidApi => defaults::RAPIDAPI_KEY_ENV,
            Self::SpaceFeed => defaults::APOD_KEY_ENV,
        }
    }

    /// Whether a missing credential is fatal at startup
    pub fn requires_key(&self) -> bool {
        !matches!(self, Self::SpaceFeed)
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "deepseek" => Ok(Self::DeepSeek),
            "groq" => Ok(Self::Groq),
            "gemini" => Ok(Self::Gemini),
            "rapidapi" => Ok(Self::RapidApi),
            "space-feed" | "nasa" | "apod" => Ok(Self::SpaceFeed),
            _ => Err(format!(
                "Invalid provider '{}'. Valid values: openai, deepseek, groq, gemini, rapidapi, space-feed",
                s
            )),
        }
    }
}

// =============================================================================
// Provider Configuration
// =============================================================================

/// Configuration for LLM providers
///
/// Note: API keys are never serialized to output and are redacted in debug
/// output. Providers convert the key to `SecretString` when constructed.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Which backend to use
    #[serde(rename = "provider")]
    pub kind: ProviderKind,
    /// Model name (provider-specific, defaults per kind)
    pub model: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
    /// Maximum tokens to generate
    pub max_tokens: usize,
    /// System instruction sent with every prompt
    pub system_instruction: String,
    /// API key; falls back to the kind's environment variable
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Override for the environment variable name holding the key
    pub api_key_env: Option<String>,
    /// API base URL (for custom endpoints)
    pub api_base: Option<String>,
    /// Settings for the RapidAPI aggregator
    pub rapidapi: RapidApiConfig,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("max_tokens", &self.max_tokens)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_key_env", &self.api_key_env)
            .field("api_base", &self.api_base)
            .field("rapidapi", &self.rapidapi)
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            model: None,
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
            temperature: generation::DEFAULT_TEMPERATURE,
            top_p: generation::DEFAULT_TOP_P,
            max_tokens: generation::DEFAULT_MAX_TOKENS,
            system_instruction: generation::DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            api_key: None,
            api_key_env: None,
            api_base: None,
            rapidapi: RapidApiConfig::default(),
        }
    }
}

impl ProviderConfig {
    /// Config for a kind with every other setting at its default
    pub fn for_kind(kind: ProviderKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn model_or_default(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| self.kind.default_model().to_string())
    }

    pub fn key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.kind.key_env())
    }

    /// Resolve the credential from config, then from the environment.
    ///
    /// A missing key is a `Config` error, fatal at startup.
    pub fn resolve_api_key(&self) -> Result<SecretString> {
        self.lookup_api_key().ok_or_else(|| {
            CareerError::Config(format!(
                "{} API key not found. Set {} env var or provide llm.api_key in config",
                self.kind.display_name(),
                self.key_env()
            ))
        })
    }

    /// Non-fatal lookup, for backends where the key is optional
    pub fn lookup_api_key(&self) -> Option<SecretString> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(self.key_env()).ok())
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::from)
    }

    /// Validated base URL with the trailing slash removed
    pub fn api_base_or_default(&self) -> Result<String> {
        let base = self
            .api_base
            .as_deref()
            .unwrap_or_else(|| self.kind.default_api_base());
        validate_endpoint(base)
    }

    pub(crate) fn http_client(&self) -> Result<reqwest::Client> {
        build_http_client(Duration::from_secs(self.timeout_secs))
    }
}

/// HTTP client with a whole-request timeout
pub(crate) fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    let builder = reqwest::Client::builder().timeout(timeout);
    // Tests talk to a loopback responder; ambient proxy settings must not apply
    #[cfg(test)]
    let builder = builder.no_proxy();
    builder
        .build()
        .map_err(|e| CareerError::HttpClient(format!("Failed to create HTTP client: {}", e)))
}

/// Endpoint settings for the RapidAPI aggregator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RapidApiConfig {
    /// Value of the `x-rapidapi-host` header
    pub host: String,
    /// Request path appended to the base URL
    pub path: String,
    /// JSON field holding the generated text
    pub response_field: String,
}

impl Default for RapidApiConfig {
    fn default() -> Self {
        Self {
            host: defaults::RAPIDAPI_HOST.to_string(),
            path: defaults::RAPIDAPI_PATH.to_string(),
            response_field: defaults::RAPIDAPI_RESPONSE_FIELD.to_string(),
        }
    }
}

/// Validate an endpoint URL: only http/https, no trailing slash
pub fn validate_endpoint(endpoint: &str) -> Result<String> {
    let url = url::Url::parse(endpoint)
        .map_err(|e| CareerError::Config(format!("Invalid endpoint URL '{}': {}", endpoint, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CareerError::Config(format!(
            "Endpoint must use http or https scheme, got: {}",
            url.scheme()
        )));
    }

    if url.scheme() == "http"
        && let Some(host) = url.host_str()
        && !matches!(host, "localhost" | "127.0.0.1" | "::1")
    {
        warn!(
            "Endpoint {} uses plain http; credentials will be sent unencrypted",
            host
        );
    }

    let mut result = url.to_string();
    if result.ends_with('/') {
        result.pop();
    }
    Ok(result)
}

// =============================================================================
// Provider Trait
// =============================================================================

/// One vendor behind one operation: prompt in, text out
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one prompt and return the generated text.
    ///
    /// Exactly one outbound request; no retry.
    async fn complete(&self, system_instruction: &str, prompt: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;
}

/// Shared provider handle, built once at startup
pub type SharedProvider = Arc<dyn CompletionProvider + Send + Sync>;

/// Create a shared LLM provider from configuration.
///
/// Resolves the credential up front so a missing key fails before any
/// submission is accepted.
pub fn create_provider(config: &ProviderConfig) -> Result<SharedProvider> {
    match config.kind {
        ProviderKind::OpenAi | ProviderKind::DeepSeek | ProviderKind::Groq => {
            Ok(Arc::new(ChatCompletionProvider::new(config)?))
        }
        ProviderKind::Gemini => Ok(Arc::new(GeminiProvider::new(config)?)),
        ProviderKind::RapidApi => Ok(Arc::new(RapidApiProvider::new(config)?)),
        ProviderKind::SpaceFeed => Err(CareerError::Config(
            "space-feed is not an LLM provider; build it with SpaceFeedAdvisor".to_string(),
        )),
    }
}
