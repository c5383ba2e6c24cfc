use anyhow::Result;
use clap::Parser;

use crate::config::AppConfig;

/// Humanoide - rewrite AI-generated French text so it reads as human-written
///
/// Opens a desktop window where text and stylistic options are sent to the
/// Gemini API. The API key is read from `API_KEY` (or `GEMINI_API_KEY`).
#[derive(Parser, Debug, Clone)]
#[command(name = "humanoide")]
#[command(version)]
#[command(about = "Rewrite AI-generated French text so it reads as human-written", long_about = None)]
pub struct Cli {
    /// Model identifier used for generation
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of the generative language API
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// HTTP timeout for one generation request, in seconds
    #[arg(long = "timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn app_config(&self) -> Result<AppConfig> {
        AppConfig::from_env().with_overrides(
            self.model.clone(),
            self.endpoint.clone(),
            self.timeout_secs,
        )
    }
}
