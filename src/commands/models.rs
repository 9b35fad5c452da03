//! Model management commands for Paperlens
//!
//! This module provides commands for discovering provider models:
//! listing available models and showing the currently configured one.

use crate::config::Config;
use crate::error::Result;
use crate::providers::{self, ModelInfo};
use prettytable::{cell, row, Table};

/// List available models from a provider
///
/// # Arguments
///
/// * `config` - Configuration containing provider settings
/// * `provider_name` - Optional provider filter; if None, uses configured provider
/// * `json` - Print as JSON instead of a table
///
/// # Errors
///
/// Returns error if the provider is unavailable or listing fails
pub async fn list_models(config: &Config, provider_name: Option<&str>, json: bool) -> Result<()> {
    let provider_type = provider_name.unwrap_or(&config.provider.provider_type);
    tracing::info!("Listing models from provider: {}", provider_type);

    let provider = providers::create_provider(&config.provider, Some(provider_type))?;
    let models = provider.list_models().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    if models.is_empty() {
        println!("No models available from provider: {}", provider_type);
        return Ok(());
    }

    print_models_table(provider_type, &models);
    Ok(())
}

/// Show the currently configured model for a provider
///
/// # Arguments
///
/// * `config` - Configuration containing provider settings
/// * `provider_name` - Optional provider filter; if None, uses configured provider
pub async fn show_current_model(config: &Config, provider_name: Option<&str>) -> Result<()> {
    let provider_type = provider_name.unwrap_or(&config.provider.provider_type);

    let provider = providers::create_provider(&config.provider, Some(provider_type))?;
    let current_model = provider.current_model()?;

    println!("\nCurrent Model Information\n");
    println!("Provider:       {}", provider_type);
    println!("Active Model:   {}", current_model);
    println!();

    Ok(())
}

/// Render a model list as a table
fn print_models_table(provider_type: &str, models: &[ModelInfo]) {
    let mut table = Table::new();
    table.add_row(row!["Name", "Display Name", "Context Window"]);
    for model in models {
        table.add_row(row![
            model.name,
            model.display_name,
            format!("{} tokens", model.context_window)
        ]);
    }

    println!("\nAvailable models from {}:\n", provider_type);
    table.printstd();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_show_current_model_gemini() {
        let config = Config::default();
        let result = show_current_model(&config, Some("gemini")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_show_current_model_ollama() {
        let config = Config::default();
        let result = show_current_model(&config, Some("ollama")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_show_current_model_invalid_provider() {
        let config = Config::default();
        let result = show_current_model(&config, Some("invalid")).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_print_models_table_does_not_panic() {
        let models = vec![
            ModelInfo::new("gemini-1.5-flash", "Gemini 1.5 Flash", 1_000_000),
            ModelInfo::with_default_window("llama3.2:latest", "llama3.2:latest (2.0 GB)"),
        ];
        print_models_table("gemini", &models);
    }
}
