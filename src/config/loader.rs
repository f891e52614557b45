use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use regex::{Captures, Regex};
use tracing::{debug, error};

use crate::config::settings::{ClientSettings, LogFormat, LoggingConfig};
use crate::utils::constants::{DEFAULT_ENDPOINT, DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_LOG_LEVEL};

/// Load settings from a YAML file, expanding `${VAR}` / `${VAR:default}` first.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<ClientSettings> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    parse_settings(&expand_env_vars(&content)?)
}

pub fn parse_settings(content: &str) -> Result<ClientSettings> {
    let mut settings: ClientSettings = serde_yaml::from_str(content)
        .inspect_err(|e| error!("parse settings error: {}", e))
        .context("invalid settings format")?;

    // Apply defaults
    if settings.endpoint.is_none() {
        settings.endpoint = Some(DEFAULT_ENDPOINT.to_owned());
    }
    if settings.timeout_ms.is_none() {
        settings.timeout_ms = Some(DEFAULT_HTTP_TIMEOUT_MS);
    }
    if settings.logging.is_none() {
        settings.logging = Some(LoggingConfig::new(DEFAULT_LOG_LEVEL.to_owned(), LogFormat::Compact));
    }

    debug!("validating settings ...");
    if settings.timeout_ms == Some(0) {
        bail!("timeout_ms must be greater than zero");
    }

    Ok(settings)
}

pub fn expand_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}")?;
    Ok(re
        .replace_all(input, |caps: &Captures| {
            let var = &caps[1];
            let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            std::env::var(var).unwrap_or_else(|_| default.to_string())
        })
        .to_string())
}
