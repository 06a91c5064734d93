//! AI Integration Layer
//!
//! Provider adapters and prompt construction for career plan generation.

pub mod prompt;
pub mod provider;

pub use prompt::{PromptBuilder, PromptSection};
pub use provider::{
    ChatCompletionProvider, CompletionProvider, GeminiProvider, ProviderConfig, ProviderKind,
    RapidApiConfig, RapidApiProvider, SharedProvider, create_provider,
};
