use serde::Deserialize;
use tracing::warn;

use crate::utils::constants::{
    FIREBASE_API_KEY_VAR, FIREBASE_AUTH_EMULATOR_HOST_VAR, FIREBASE_AUTH_TIMEOUT_MS_VAR,
};

/// ================================
/// Full service configuration (config file layout)
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub auth: ClientConfig,
    pub logging: Option<LoggingConfig>,
}

/// ================================
/// Token client settings
/// ================================
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// required, query-string credential of the sign-in endpoint
    pub api_key: Option<String>,
    /// `host:port` of a local auth emulator
    pub emulator_host: Option<String>,
    /// whole-request deadline, no deadline when absent
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_emulator_host(mut self, emulator_host: impl Into<String>) -> Self {
        self.emulator_host = Some(emulator_host.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Read `FIREBASE_API_KEY`, `FIREBASE_AUTH_EMULATOR_HOST` and
    /// `FIREBASE_AUTH_TIMEOUT_MS` from the process environment.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(FIREBASE_API_KEY_VAR).ok(),
            emulator_host: std::env::var(FIREBASE_AUTH_EMULATOR_HOST_VAR).ok(),
            timeout_ms: std::env::var(FIREBASE_AUTH_TIMEOUT_MS_VAR)
                .ok()
                .and_then(|v| parse_timeout_ms(&v)),
        }
    }

    /// Api key, empty value counts as absent.
    pub fn api_key(&self) -> Option<&str> {
        non_empty(self.api_key.as_deref())
    }

    /// Emulator host, empty value counts as absent.
    pub fn emulator_host(&self) -> Option<&str> {
        non_empty(self.emulator_host.as_deref())
    }
}

/// Blank values count as absent, others pass through untouched.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_timeout_ms(value: &str) -> Option<u64> {
    value
        .trim()
        .parse::<u64>()
        .inspect_err(|err| {
            warn!(
                "ignoring {}='{}', no request timeout applied: {}",
                FIREBASE_AUTH_TIMEOUT_MS_VAR, value, err
            );
        })
        .ok()
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

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}
