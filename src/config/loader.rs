//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/careerwise/config.toml)
//! 3. Project config (./careerwise.toml, or the file given with --config)
//! 4. Environment variables (CAREERWISE_* prefix, `__` between levels)

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::types::{CareerError, Result};

/// Environment variable prefix (e.g. CAREERWISE_LLM__MODEL -> llm.model)
pub const ENV_PREFIX: &str = "CAREERWISE_";

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "careerwise.toml";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain:
    /// defaults → global → project (or explicit file) → env vars
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        Self::load_with_env(explicit, ENV_PREFIX)
    }

    fn load_with_env(explicit: Option<&Path>, env_prefix: &str) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CareerError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                debug!("Loading config from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let project_path = Self::project_config_path();
                if project_path.exists() {
                    debug!("Loading project config from: {}", project_path.display());
                    figment = figment.merge(Toml::file(&project_path));
                }
            }
        }

        figment = figment.merge(Env::prefixed(env_prefix).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| CareerError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Global config directory (platform config dir + careerwise)
    pub fn global_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "careerwise").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(PROJECT_CONFIG_FILE)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Render a configuration in the requested format (text = TOML)
    pub fn render(config: &Config, format: &str) -> Result<String> {
        match format {
            "json" => Ok(serde_json::to_string_pretty(config)?),
            "yaml" => Ok(serde_yaml::to_string(config)?),
            _ => toml::to_string_pretty(config).map_err(|e| CareerError::Config(e.to_string())),
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write the default config template, refusing to overwrite unless forced
    pub fn init(path: &Path, force: bool) -> Result<PathBuf> {
        if path.exists() && !force {
            info!("Config exists: {}", path.display());
            return Err(CareerError::Config(format!(
                "Config already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, Self::default_config())?;
        info!("Created config: {}", path.display());
        Ok(path.to_path_buf())
    }

    /// Generate default config content (TOML)
    fn default_config() -> String {
        r#"# careerwise configuration
# Precedence: defaults < global config < this file < CAREERWISE_* env vars < CLI flags

version = "1.0"

[llm]
# openai | deepseek | groq | gemini | rapidapi | space-feed
provider = "openai"
# model = "gpt-3.5-turbo"
timeout_secs = 300
temperature = 0.7
top_p = 1.0
max_tokens = 1500
system_instruction = "You are a highly knowledgeable career advisor."
# Keys are read from the provider's env var (OPENAI_API_KEY, GEMINI_API_KEY, ...)
# api_key_env = "MY_KEY_VAR"
# api_base = "https://api.openai.com/v1"

[llm.rapidapi]
host = "chatgpt-42.p.rapidapi.com"
path = "/gpt4"
response_field = "result"

[form]
require_all_fields = false
"#
        .to_string()
    }
}
