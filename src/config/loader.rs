use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::config::settings::{LoggingConfig, ServiceConfig};

/// Load config from a YAML file, expanding `${VAR}` and `${VAR:default}`.
pub async fn file_to_config(path: &Path) -> Result<ServiceConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&expand_env_vars(&content)?)
}

pub fn parse_config(content: &str) -> Result<ServiceConfig> {
    let mut service_config: ServiceConfig =
        serde_yaml::from_str(content).context("invalid config format")?;

    // Apply defaults
    if service_config.logging.is_none() {
        service_config.logging = Some(LoggingConfig::default());
    }
    debug!(
        emulator = service_config.auth.emulator_host().is_some(),
        "config parsed"
    );
    Ok(service_config)
}

fn expand_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]*))?\}")?;
    Ok(re
        .replace_all(input, |caps: &regex::Captures| {
            let var = &caps[1];
            let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            std::env::var(var).unwrap_or_else(|_| default.to_string())
        })
        .to_string())
}
