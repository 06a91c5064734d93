//! Submission Dispatcher
//!
//! Turns one form submission into exactly one `CareerPlan`. Provider
//! failures are converted to `Error:` text here and never cross into the
//! display layer.

use std::time::Instant;
use tracing::{debug, info, warn};

use super::prompt::build_career_prompt;
use super::space_feed::SpaceFeedAdvisor;
use crate::ai::{ProviderConfig, ProviderKind, SharedProvider, create_provider};
use crate::types::{CareerError, CareerPlan, CareerProfile, Result};

/// Where plans come from
pub enum Backend {
    /// Hosted LLM behind a provider adapter
    Provider(SharedProvider),
    /// Astronomy feed plus templates
    SpaceFeed(SpaceFeedAdvisor),
}

impl Backend {
    /// Build the backend selected by configuration.
    ///
    /// Credentials are resolved here, so a missing key fails at startup.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        match config.kind {
            ProviderKind::SpaceFeed => Ok(Self::SpaceFeed(SpaceFeedAdvisor::new(config)?)),
            _ => Ok(Self::Provider(create_provider(config)?)),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Provider(provider) => provider.name(),
            Self::SpaceFeed(_) => ProviderKind::SpaceFeed.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DispatchOptions {
    /// Refuse to contact the backend while any field is blank
    pub require_all_fields: bool,
    /// System instruction sent with every prompt
    pub system_instruction: String,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            require_all_fields: false,
            system_instruction: crate::constants::generation::DEFAULT_SYSTEM_INSTRUCTION
                .to_string(),
        }
    }
}

pub struct Dispatcher {
    backend: Backend,
    options: DispatchOptions,
}

impl Dispatcher {
    pub fn new(backend: Backend, options: DispatchOptions) -> Self {
        Self { backend, options }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Handle one submission. Never fails; errors become plan text.
    pub async fn submit(&self, profile: &CareerProfile) -> CareerPlan {
        if self.options.require_all_fields {
            let missing = profile.missing_fields();
            if !missing.is_empty() {
                warn!("Submission rejected, blank fields: {:?}", missing);
                return CareerPlan::Incomplete(incomplete_message(&missing));
            }
        }

        let start = Instant::now();
        let result = match &self.backend {
            Backend::Provider(provider) => {
                let prompt = build_career_prompt(profile);
                debug!("Prompt length: {} chars", prompt.len());
                provider
                    .complete(&self.options.system_instruction, &prompt)
                    .await
            }
            Backend::SpaceFeed(advisor) => Ok(advisor.advise(profile).await),
        };

        match result {
            Ok(text) => {
                info!(
                    "Plan generated by {} in {}ms",
                    self.backend.name(),
                    start.elapsed().as_millis()
                );
                CareerPlan::Generated(text)
            }
            Err(e) => {
                warn!("Plan generation failed: {}", e);
                CareerPlan::Failed(error_message(&e))
            }
        }
    }
}

/// Render a request-time failure for the output area
pub fn error_message(err: &CareerError) -> String {
    format!(
        "Error: {}. Check your API key or network connection.",
        err
    )
}

fn incomplete_message(missing: &[&str]) -> String {
    format!(
        "Warning: please fill in all fields before generating a plan (missing: {}).",
        missing.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::CompletionProvider;
    use crate::types::ProviderError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedProvider {
        reply: std::result::Result<String, ProviderError>,
        calls: AtomicUsize,
    }

    impl FixedProvider {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(err: ProviderError) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(err),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl CompletionProvider for FixedProvider {
        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone().map_err(CareerError::from)
        }

        fn name(&self) -> &str {
            "fixed"
        }

        fn model(&self) -> &str {
            "fixed-model"
        }
    }

    fn dispatcher(provider: Arc<FixedProvider>, require_all_fields: bool) -> Dispatcher {
        Dispatcher::new(
            Backend::Provider(provider),
            DispatchOptions {
                require_all_fields,
                ..Default::default()
            },
        )
    }

    fn full_profile() -> CareerProfile {
        CareerProfile::new("CS", "Rust", "intern", "AI", "ML engineer")
    }

    #[tokio::test]
    async fn test_success_text_is_unchanged() {
        let text = "  ## Plan\n\n* step one *\n";
        let plan = dispatcher(FixedProvider::ok(text), false)
            .submit(&full_profile())
            .await;
        assert_eq!(plan, CareerPlan::Generated(text.to_string()));
    }

    #[tokio::test]
    async fn test_provider_error_becomes_error_text() {
        let provider = FixedProvider::failing(ProviderError::request("fixed", "connection refused"));
        let plan = dispatcher(provider, false).submit(&full_profile()).await;

        assert!(!plan.is_success());
        assert!(plan.text().starts_with("Error:"));
        assert!(plan.text().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_status_error_mentions_code() {
        let provider = FixedProvider::failing(ProviderError::status("fixed", 500, "boom"));
        let plan = dispatcher(provider, false).submit(&full_profile()).await;
        assert!(plan.text().starts_with("Error:"));
        assert!(plan.text().contains("500"));
    }

    #[tokio::test]
    async fn test_blank_fields_rejected_without_calling_provider() {
        let provider = FixedProvider::ok("unused");
        let dispatcher = dispatcher(provider.clone(), true);

        let plan = dispatcher
            .submit(&CareerProfile::new("CS", "", "intern", "AI", ""))
            .await;

        assert!(matches!(plan, CareerPlan::Incomplete(_)));
        assert!(plan.text().contains("skills, goals"));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blank_fields_allowed_without_validation() {
        let provider = FixedProvider::ok("plan");
        let plan = dispatcher(provider.clone(), false)
            .submit(&CareerProfile::default())
            .await;

        assert!(plan.is_success());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_one_call_per_submission() {
        let provider = FixedProvider::failing(ProviderError::empty("fixed"));
        let dispatcher = dispatcher(provider.clone(), false);

        dispatcher.submit(&full_profile()).await;
        dispatcher.submit(&full_profile()).await;
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_backend_from_config_fails_without_key() {
        let config = ProviderConfig {
            api_key_env: Some("CAREERWISE_TEST_UNSET_KEY_VAR".to_string()),
            ..ProviderConfig::for_kind(ProviderKind::Gemini)
        };
        let err = Backend::from_config(&config).err().unwrap();
        assert!(matches!(err, CareerError::Config(_)));
    }

    #[test]
    fn test_space_feed_needs_no_key() {
        let config = ProviderConfig {
            api_key_env: Some("CAREERWISE_TEST_UNSET_KEY_VAR".to_string()),
            ..ProviderConfig::for_kind(ProviderKind::SpaceFeed)
        };
        let backend = Backend::from_config(&config).unwrap();
        assert_eq!(backend.name(), "space-feed");
    }
}
