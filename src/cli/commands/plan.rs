//! Plan Command
//!
//! Generate one career plan.
//!
//! Usage:
//!   careerwise plan [--education ..] [--skills ..] [--experience ..]
//!                   [--interests ..] [--goals ..] [--provider KIND] [--model M]
//!                   [--require-all]

use std::path::PathBuf;

use tracing::debug;

use crate::advisor::{Backend, DispatchOptions, Dispatcher};
use crate::ai::ProviderKind;
use crate::cli::form::{FormInput, collect_profile};
use crate::cli::ui::output::Output;
use crate::config::{Config, ConfigLoader};
use crate::types::{CareerPlan, Result};

#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    pub config_path: Option<PathBuf>,
    pub form: FormInput,
    pub provider: Option<ProviderKind>,
    pub model: Option<String>,
    pub require_all: bool,
}

/// Apply CLI flags on top of the loaded configuration
pub fn apply_overrides(mut config: Config, options: &PlanOptions) -> Config {
    if let Some(kind) = options.provider {
        if kind != config.llm.kind {
            // Model and endpoint belong to the previous provider
            config.llm.model = None;
            config.llm.api_base = None;
        }
        config.llm.kind = kind;
    }
    if let Some(model) = &options.model {
        config.llm.model = Some(model.clone());
    }
    if options.require_all {
        config.form.require_all_fields = true;
    }
    config
}

pub async fn run(options: PlanOptions) -> Result<CareerPlan> {
    let output = Output::new();

    let config = ConfigLoader::load(options.config_path.as_deref())?;
    let config = apply_overrides(config, &options);
    debug!("Effective provider config: {:?}", config.llm);

    // Fails here, before the form, when the credential is missing
    let backend = Backend::from_config(&config.llm)?;
    let dispatcher = Dispatcher::new(
        backend,
        DispatchOptions {
            require_all_fields: config.form.require_all_fields,
            system_instruction: config.llm.system_instruction.clone(),
        },
    );

    let profile = collect_profile(options.form)?;

    output.pending(&format!(
        "Generating career plan with {}...",
        dispatcher.backend_name()
    ));
    let plan = dispatcher.submit(&profile).await;
    output.clear_pending();

    output.plan(&plan)?;
    match &plan {
        CareerPlan::Generated(_) => {
            output.success(&format!("Plan generated by {}", dispatcher.backend_name()))
        }
        CareerPlan::Failed(_) => output.error("Plan generation failed"),
        CareerPlan::Incomplete(_) => output.warning("Submission incomplete, nothing was sent"),
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_switch_clears_model_and_endpoint() {
        let mut config = Config::default();
        config.llm.model = Some("gpt-4o".to_string());
        config.llm.api_base = Some("https://proxy.example.com/v1".to_string());

        let options = PlanOptions {
            provider: Some(ProviderKind::Gemini),
            ..Default::default()
        };
        let config = apply_overrides(config, &options);

        assert_eq!(config.llm.kind, ProviderKind::Gemini);
        assert_eq!(config.llm.model, None);
        assert_eq!(config.llm.api_base, None);
    }

    #[test]
    fn test_same_provider_keeps_settings() {
        let mut config = Config::default();
        config.llm.model = Some("gpt-4o".to_string());

        let options = PlanOptions {
            provider: Some(ProviderKind::OpenAi),
            require_all: true,
            ..Default::default()
        };
        let config = apply_overrides(config, &options);

        assert_eq!(config.llm.model.as_deref(), Some("gpt-4o"));
        assert!(config.form.require_all_fields);
    }

    #[test]
    fn test_model_flag_wins() {
        let options = PlanOptions {
            provider: Some(ProviderKind::Groq),
            model: Some("llama-3.3-70b-versatile".to_string()),
            ..Default::default()
        };
        let config = apply_overrides(Config::default(), &options);
        assert_eq!(config.llm.model_or_default(), "llama-3.3-70b-versatile");
    }
}
