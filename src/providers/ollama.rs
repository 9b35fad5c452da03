//! Ollama provider implementation for Paperlens
//!
//! This module implements the Provider trait for Ollama, connecting to a
//! local or remote Ollama server. No credentials are required; the server
//! host and model come from configuration.

use crate::config::OllamaConfig;
use crate::error::{PaperlensError, Result};
use crate::providers::{ModelInfo, Provider};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ollama API provider
///
/// Uses the non-streaming `/api/generate` endpoint for single-prompt
/// completions and `/api/tags` for model listing.
///
/// # Examples
///
/// ```no_run
/// use paperlens::config::OllamaConfig;
/// use paperlens::providers::{OllamaProvider, Provider};
///
/// # async fn example() -> paperlens::error::Result<()> {
/// let config = OllamaConfig {
///     host: "http://localhost:11434".to_string(),
///     model: "llama3.2:latest".to_string(),
/// };
/// let provider = OllamaProvider::new(config)?;
/// let text = provider.generate("Hello!").await?;
/// # Ok(())
/// # }
/// ```
pub struct OllamaProvider {
    client: Client,
    config: OllamaConfig,
}

/// Request structure for /api/generate
#[derive(Debug, Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

/// Response structure from /api/generate
#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    done: bool,
}

/// Response from Ollama's /api/tags endpoint
#[derive(Debug, Deserialize)]
struct OllamaTagsResponse {
    #[serde(default)]
    models: Vec<OllamaModelTag>,
}

/// Model metadata from /api/tags
#[derive(Debug, Deserialize)]
struct OllamaModelTag {
    #[serde(default)]
    name: String,
    #[serde(default)]
    size: u64,
}

impl OllamaProvider {
    /// Create a new Ollama provider instance
    ///
    /// # Arguments
    ///
    /// * `config` - Ollama configuration containing host and model
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    ///
    /// # Examples
    ///
    /// ```
    /// use paperlens::config::OllamaConfig;
    /// use paperlens::providers::OllamaProvider;
    ///
    /// let provider = OllamaProvider::new(OllamaConfig::default());
    /// assert!(provider.is_ok());
    /// ```
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("paperlens/0.3.0")
            .build()
            .map_err(|e| {
                PaperlensError::Provider(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::info!(
            "Initialized Ollama provider: host={}, model={}",
            config.host,
            config.model
        );

        Ok(Self { client, config })
    }

    /// Get the configured Ollama host
    pub fn host(&self) -> &str {
        &self.config.host
    }

    /// Get the configured model name
    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl Provider for OllamaProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.config.host.trim_end_matches('/'));
        let request = OllamaGenerateRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        tracing::debug!(model = %self.config.model, prompt_chars = prompt.len(), "Submitting generation request");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                PaperlensError::Provider(format!("Failed to connect to Ollama server: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Ollama returned error {}: {}", status, body);
            return Err(
                PaperlensError::Provider(format!("Ollama returned {}: {}", status, body)).into(),
            );
        }

        let parsed: OllamaGenerateResponse = response.json().await.map_err(|e| {
            PaperlensError::Provider(format!("Failed to parse Ollama response: {}", e))
        })?;

        if !parsed.done {
            tracing::warn!("Ollama reported an incomplete generation");
        }
        if parsed.response.is_empty() {
            return Err(
                PaperlensError::Provider("Ollama returned an empty response".to_string()).into(),
            );
        }

        Ok(parsed.response)
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let url = format!("{}/api/tags", self.config.host.trim_end_matches('/'));
        tracing::debug!("Fetching models from Ollama: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            PaperlensError::Provider(format!("Failed to connect to Ollama server: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(
                PaperlensError::Provider(format!("Ollama returned {}: {}", status, body)).into(),
            );
        }

        let parsed: OllamaTagsResponse = response.json().await.map_err(|e| {
            PaperlensError::Provider(format!("Failed to parse Ollama tags response: {}", e))
        })?;

        Ok(parsed
            .models
            .into_iter()
            .map(|tag| {
                let display_name = format!("{} ({})", tag.name, format_size(tag.size));
                ModelInfo::with_default_window(tag.name, display_name)
            })
            .collect())
    }

    fn current_model(&self) -> Result<String> {
        Ok(self.config.model.clone())
    }
}

/// Format a byte count for display (e.g. "4.7 GB")
fn format_size(bytes: u64) -> String {
    const GB: u64 = 1_000_000_000;
    const MB: u64 = 1_000_000;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.0} MB", bytes as f64 / MB as f64)
    } else {
        format!("{} B", bytes)
    }
}
