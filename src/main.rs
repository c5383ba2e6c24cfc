use anyhow::{Context, Result};
use clap::Parser;
use humanoide::cli::Cli;
use humanoide::ui::launch_ui;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = cli
        .app_config()
        .context("Failed to resolve configuration")?;
    if !config.has_credential() {
        warn!("no API key found in API_KEY or GEMINI_API_KEY; requests will fail");
    }
    info!(model = %config.model, "starting Humanoide");

    launch_ui(&config).context("Failed to run the desktop window")?;
    Ok(())
}

fn init_tracing(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .with_context(|| format!("Invalid log level '{}'", default_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
