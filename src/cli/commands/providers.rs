//! Providers Command
//!
//! List supported backends with their defaults and credential variables.

use console::style;

use crate::ai::ProviderKind;
use crate::types::Result;

pub fn run(format: &str) -> Result<()> {
    if format == "json" {
        let providers: Vec<_> = ProviderKind::ALL
            .iter()
            .map(|kind| {
                serde_json::json!({
                    "name": kind.as_str(),
                    "vendor": kind.display_name(),
                    "default_model": kind.default_model(),
                    "endpoint": kind.default_api_base(),
                    "key_env": kind.key_env(),
                    "key_required": kind.requires_key(),
                    "key_present": std::env::var(kind.key_env()).is_ok(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&providers)?);
        return Ok(());
    }

    println!("Supported providers");
    println!("══════════════════════════════════════");
    for kind in ProviderKind::ALL {
        let key_state = if std::env::var(kind.key_env()).is_ok() {
            style("set").green()
        } else if kind.requires_key() {
            style("missing").red()
        } else {
            style("optional").dim()
        };
        println!(
            "  {:<11} {:<22} {} ({})",
            style(kind.as_str()).bold(),
            kind.default_model(),
            kind.key_env(),
            key_state
        );
    }
    Ok(())
}
