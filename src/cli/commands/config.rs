//! Config Command
//!
//! Manage careerwise configuration.
//!
//! Usage:
//!   careerwise config show [-f text|json|yaml]
//!   careerwise config path
//!   careerwise config init [-g] [--force]

use std::path::Path;

use crate::config::ConfigLoader;
use crate::types::{CareerError, Result};

/// Show merged effective configuration
pub fn show(config_path: Option<&Path>, format: &str) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;
    println!("{}", ConfigLoader::render(&config, format)?);
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Write a default config file (project by default, global with `-g`)
pub fn init(global: bool, force: bool) -> Result<()> {
    let path = if global {
        ConfigLoader::global_config_path().ok_or_else(|| {
            CareerError::Config("Cannot determine global config directory".to_string())
        })?
    } else {
        ConfigLoader::project_config_path()
    };

    let written = ConfigLoader::init(&path, force)?;
    println!("✓ Initialized configuration");
    println!("  Config: {}", written.display());
    Ok(())
}
