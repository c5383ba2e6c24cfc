use std::time::Duration;

use anyhow::{ensure, Result};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variables checked for the API credential, in order.
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Absent credential is reported when a request is made, not here.
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn with_overrides(
        mut self,
        model: Option<String>,
        endpoint: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        if let Some(model) = model {
            let model = model.trim();
            ensure!(!model.is_empty(), "model identifier must not be empty");
            ensure!(
                !model
                    .chars()
                    .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#')),
                "model identifier {:?} must be a single path segment",
                model
            );
            self.model = model.to_string();
        }
        if let Some(endpoint) = endpoint {
            ensure!(
                endpoint.starts_with("http://") || endpoint.starts_with("https://"),
                "endpoint must be an http(s) URL, got {:?}",
                endpoint
            );
            self.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        if let Some(secs) = timeout_secs {
            ensure!(secs > 0, "timeout must be positive");
            self.timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}
