//! Mindset - focus levels, AI quotes, journaling and rewards
//!
//! Main entry point for the command-line application.

use anyhow::Context;
use clap::Parser;
use mindset_app::utils::logging::init_tracing;
use mindset_app::{execute, AppContext, Cli};
use mindset_infra::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the subscriber reads RUST_LOG
    let dotenv = dotenvy::dotenv();
    init_tracing();

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }

    let cli = Cli::parse();

    let config = config::load_with(cli.config.clone()).context("failed to load configuration")?;
    tracing::debug!(
        backend = %config.storage.backend,
        generation = config.generation.is_configured(),
        "configuration loaded"
    );

    let mut ctx = AppContext::new(config).await.context("failed to initialise Mindset")?;
    let output = execute(&mut ctx, cli.command).await?;
    println!("{output}");

    Ok(())
}
