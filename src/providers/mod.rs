//! Provider module for Paperlens
//!
//! This module contains the generative-text provider abstraction and
//! implementations for the hosted Gemini API and local Ollama servers.

pub mod base;
pub mod gemini;
pub mod ollama;

pub use base::{ModelInfo, Provider};
pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;

use crate::config::ProviderConfig;
use crate::error::Result;

/// Create a provider instance based on configuration
///
/// # Arguments
///
/// * `config` - Provider configuration
/// * `provider_override` - Optional provider type override from the CLI
///   ("gemini" or "ollama")
///
/// # Returns
///
/// Returns a boxed provider instance
///
/// # Errors
///
/// Returns error if the provider type is invalid or initialization fails
///
/// # Examples
///
/// ```
/// use paperlens::providers::create_provider;
/// use paperlens::config::ProviderConfig;
///
/// let config = ProviderConfig::default();
/// let provider = create_provider(&config, Some("ollama"));
/// assert!(provider.is_ok());
/// ```
pub fn create_provider(
    config: &ProviderConfig,
    provider_override: Option<&str>,
) -> Result<Box<dyn Provider>> {
    let provider_type = provider_override.unwrap_or(&config.provider_type);

    match provider_type {
        "gemini" => Ok(Box::new(GeminiProvider::new(config.gemini.clone())?)),
        "ollama" => Ok(Box::new(OllamaProvider::new(config.ollama.clone())?)),
        _ => Err(crate::error::PaperlensError::Provider(format!(
            "Unknown provider type: {}",
            provider_type
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_gemini() {
        let config = ProviderConfig::default();
        let provider = create_provider(&config, Some("gemini"));
        assert!(provider.is_ok());
    }

    #[test]
    fn test_create_provider_ollama() {
        let config = ProviderConfig::default();
        let provider = create_provider(&config, Some("ollama"));
        assert!(provider.is_ok());
    }

    #[test]
    fn test_create_provider_uses_config_default() {
        let config = ProviderConfig::default();
        assert_eq!(config.provider_type, "gemini");
        let provider = create_provider(&config, None);
        assert!(provider.is_ok());
    }

    #[test]
    fn test_create_provider_invalid_type() {
        let config = ProviderConfig::default();
        let result = create_provider(&config, Some("invalid"));
        assert!(result.is_err());
    }
}
