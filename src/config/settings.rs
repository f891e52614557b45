use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::client::{ClientOption, DecodeMode};
use crate::utils::constants::{DEFAULT_ENDPOINT, DEFAULT_HTTP_TIMEOUT_MS};

/// ================================
/// Client settings (YAML)
/// ================================
#[derive(Deserialize, Clone, Default)]
pub struct ClientSettings {
    /// bearer token; usually `${API_TOKEN}` rather than a literal
    pub token: Option<String>,
    pub endpoint: Option<String>,
    /// request timeout applied to the default reqwest transport
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub decode_mode: DecodeMode,
    pub logging: Option<LoggingConfig>,
}

impl ClientSettings {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_HTTP_TIMEOUT_MS))
    }

    /// Options matching these settings, minus the transport.
    pub fn client_options(&self) -> Vec<ClientOption> {
        vec![
            ClientOption::endpoint(self.endpoint()),
            ClientOption::decode_mode(self.decode_mode),
        ]
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("timeout_ms", &self.timeout_ms)
            .field("decode_mode", &self.decode_mode)
            .field("logging", &self.logging)
            .finish()
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}
