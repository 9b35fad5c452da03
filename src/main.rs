//! Paperlens - research paper analysis CLI
//!
#![doc = "Paperlens - research paper analysis CLI"]
#![doc = "Main entry point for the Paperlens application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use paperlens::cli::{Cli, Commands, ModelCommand};
use paperlens::commands;
use paperlens::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Analyze {
            file,
            provider,
            json,
            output,
        } => {
            tracing::info!("Starting document analysis");
            if let Some(p) = &provider {
                tracing::debug!("Using provider override: {}", p);
            }

            commands::analyze::run_analyze(config, file, provider, json, output).await?;
            Ok(())
        }
        Commands::Chat {
            file,
            analysis,
            provider,
        } => {
            tracing::info!("Starting interactive chat session");
            if let Some(p) = &provider {
                tracing::debug!("Using provider override: {}", p);
            }

            commands::chat::run_chat(config, file, analysis, provider).await?;
            Ok(())
        }
        Commands::Auth { provider } => {
            // Use CLI `--provider` override when supplied; otherwise fall back to the
            // configured/default provider from `config`.
            let provider = provider.unwrap_or_else(|| config.provider.provider_type.clone());
            tracing::info!("Starting authentication for provider: {}", provider);
            commands::auth::authenticate(config, provider).await?;
            Ok(())
        }
        Commands::Models { command } => {
            tracing::info!("Starting model management command");
            match command {
                ModelCommand::List { provider, json } => {
                    commands::models::list_models(&config, provider.as_deref(), json).await?;
                    Ok(())
                }
                ModelCommand::Current { provider } => {
                    commands::models::show_current_model(&config, provider.as_deref()).await?;
                    Ok(())
                }
            }
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("paperlens=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
