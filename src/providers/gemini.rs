//! Gemini provider implementation for Paperlens
//!
//! This module implements the Provider trait for Google's hosted
//! generative-language API. The API key is resolved from the environment
//! first and the system keyring second; the `auth` command stores keys in
//! the keyring so they never live in configuration files.

use crate::config::GeminiConfig;
use crate::error::{PaperlensError, Result};
use crate::providers::{ModelInfo, Provider};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API base for the hosted generative-language endpoint
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Environment variables checked for the API key, in order
const API_KEY_ENV_VARS: [&str; 2] = ["PAPERLENS_GEMINI_API_KEY", "GEMINI_API_KEY"];

/// Keyring service and user names for the stored API key
const KEYRING_SERVICE: &str = "paperlens";
const KEYRING_USER: &str = "gemini";

/// Hosted Gemini API provider
///
/// Submits single-prompt generation requests over HTTPS. Responses are
/// non-streaming; the first candidate's text parts are concatenated into
/// the completion string.
///
/// # Examples
///
/// ```no_run
/// use paperlens::config::GeminiConfig;
/// use paperlens::providers::{GeminiProvider, Provider};
///
/// # async fn example() -> paperlens::error::Result<()> {
/// let provider = GeminiProvider::new(GeminiConfig::default())?;
/// let text = provider.generate("Summarize this abstract: ...").await?;
/// # Ok(())
/// # }
/// ```
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

/// Request body for the generateContent endpoint
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

/// One content block of a request or response
#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

/// One text part of a content block
#[derive(Debug, Serialize, Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Response body from the generateContent endpoint
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// One candidate completion
#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

/// Response body from the models listing endpoint
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    models: Vec<GeminiModel>,
}

/// Model metadata from the models listing endpoint
#[derive(Debug, Deserialize)]
struct GeminiModel {
    #[serde(default)]
    name: String,
    #[serde(default, rename = "displayName")]
    display_name: String,
    #[serde(default, rename = "inputTokenLimit")]
    input_token_limit: usize,
}

impl GeminiProvider {
    /// Create a new Gemini provider instance
    ///
    /// # Arguments
    ///
    /// * `config` - Gemini configuration containing model and optional
    ///   api_base override (useful for tests and local mocks)
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("paperlens/0.3.0")
            .build()
            .map_err(|e| {
                PaperlensError::Provider(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::info!("Initialized Gemini provider: model={}", config.model);

        Ok(Self { client, config })
    }

    /// Get the configured model name
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build an endpoint URL, honoring the `api_base` override
    fn endpoint(&self, path: &str) -> String {
        let base = self
            .config
            .api_base
            .as_deref()
            .unwrap_or(GEMINI_API_BASE)
            .trim_end_matches('/');
        format!("{}/{}", base, path)
    }

    /// Resolve the API key from the environment or the system keyring
    ///
    /// Checks `PAPERLENS_GEMINI_API_KEY` and `GEMINI_API_KEY` first, then
    /// the keyring entry populated by the `auth` command.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` if no key is found anywhere
    pub fn resolve_api_key() -> Result<String> {
        for var in API_KEY_ENV_VARS {
            if let Ok(key) = std::env::var(var) {
                if !key.trim().is_empty() {
                    tracing::debug!("Using Gemini API key from {}", var);
                    return Ok(key);
                }
            }
        }

        match keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER) {
            Ok(entry) => match entry.get_password() {
                Ok(key) if !key.trim().is_empty() => {
                    tracing::debug!("Using Gemini API key from keyring");
                    Ok(key)
                }
                _ => Err(PaperlensError::MissingCredentials("gemini".to_string()).into()),
            },
            Err(e) => {
                tracing::warn!("Keyring unavailable: {}", e);
                Err(PaperlensError::MissingCredentials("gemini".to_string()).into())
            }
        }
    }

    /// Store an API key in the system keyring
    ///
    /// Used by the `auth` command.
    ///
    /// # Errors
    ///
    /// Returns error if the keyring rejects the write
    pub fn store_api_key(key: &str) -> Result<()> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)?;
        entry.set_password(key)?;
        tracing::info!("Stored Gemini API key in keyring");
        Ok(())
    }

    /// Concatenate the text parts of the first candidate
    fn completion_text(response: GenerateResponse) -> Result<String> {
        let candidate = response.candidates.into_iter().next().ok_or_else(|| {
            PaperlensError::Provider("Response contained no candidates".to_string())
        })?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(
                PaperlensError::Provider("Response candidate contained no text".to_string()).into(),
            );
        }

        Ok(text)
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = Self::resolve_api_key()?;
        let url = self.endpoint(&format!(
            "v1beta/models/{}:generateContent",
            self.config.model
        ));

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(model = %self.config.model, prompt_chars = prompt.len(), "Submitting generation request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| PaperlensError::Provider(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini rejected credentials: {} {}", status, body);
            return Err(PaperlensError::Authentication(format!(
                "API key rejected ({})",
                status
            ))
            .into());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini returned error {}: {}", status, body);
            return Err(
                PaperlensError::Provider(format!("API returned {}: {}", status, body)).into(),
            );
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            PaperlensError::Provider(format!("Failed to parse response body: {}", e))
        })?;

        Self::completion_text(parsed)
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let api_key = Self::resolve_api_key()?;
        let url = self.endpoint("v1beta/models");

        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", api_key)
            .send()
            .await
            .map_err(|e| PaperlensError::Provider(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(
                PaperlensError::Provider(format!("API returned {}: {}", status, body)).into(),
            );
        }

        let parsed: ModelsResponse = response.json().await.map_err(|e| {
            PaperlensError::Provider(format!("Failed to parse models response: {}", e))
        })?;

        Ok(parsed
            .models
            .into_iter()
            .map(|m| {
                // The API reports fully qualified names like "models/gemini-1.5-flash".
                let name = m
                    .name
                    .strip_prefix("models/")
                    .unwrap_or(&m.name)
                    .to_string();
                let display_name = if m.display_name.is_empty() {
                    name.clone()
                } else {
                    m.display_name
                };
                if m.input_token_limit > 0 {
                    ModelInfo::new(name, display_name, m.input_token_limit)
                } else {
                    ModelInfo::with_default_window(name, display_name)
                }
            })
            .collect())
    }

    fn current_model(&self) -> Result<String> {
        Ok(self.config.model.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = GeminiProvider::new(GeminiConfig::default());
        assert!(provider.is_ok());
    }

    #[test]
    fn test_endpoint_uses_default_base() {
        let provider = GeminiProvider::new(GeminiConfig::default()).unwrap();
        assert_eq!(
            provider.endpoint("v1beta/models"),
            "https://generativelanguage.googleapis.com/v1beta/models"
        );
    }

    #[test]
    fn test_endpoint_honors_api_base_override() {
        let config = GeminiConfig {
            api_base: Some("http://localhost:9999/".to_string()),
            ..Default::default()
        };
        let provider = GeminiProvider::new(config).unwrap();
        assert_eq!(
            provider.endpoint("v1beta/models"),
            "http://localhost:9999/v1beta/models"
        );
    }

    #[test]
    fn test_current_model_reports_config() {
        let config = GeminiConfig {
            model: "gemini-1.5-flash".to_string(),
            ..Default::default()
        };
        let provider = GeminiProvider::new(config).unwrap();
        assert_eq!(provider.current_model().unwrap(), "gemini-1.5-flash");
    }

    #[test]
    fn test_completion_text_concatenates_parts() {
        let response = GenerateResponse {
            candidates: vec![Candidate {
                content: Content {
                    parts: vec![
                        Part {
                            text: "first ".to_string(),
                        },
                        Part {
                            text: "second".to_string(),
                        },
                    ],
                },
            }],
        };
        assert_eq!(
            GeminiProvider::completion_text(response).unwrap(),
            "first second"
        );
    }

    #[test]
    fn test_completion_text_rejects_empty_candidates() {
        let response = GenerateResponse { candidates: vec![] };
        assert!(GeminiProvider::completion_text(response).is_err());
    }

    #[test]
    fn test_completion_text_rejects_empty_parts() {
        let response = GenerateResponse {
            candidates: vec![Candidate {
                content: Content { parts: vec![] },
            }],
        };
        assert!(GeminiProvider::completion_text(response).is_err());
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"title\": \"X\"}"}], "role": "model"}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.candidates.len(), 1);
        assert_eq!(
            parsed.candidates[0].content.parts[0].text,
            "{\"title\": \"X\"}"
        );
    }

    #[test]
    fn test_models_response_deserialization() {
        let body = r#"{
            "models": [
                {"name": "models/gemini-1.5-flash", "displayName": "Gemini 1.5 Flash", "inputTokenLimit": 1000000}
            ]
        }"#;
        let parsed: ModelsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.models.len(), 1);
        assert_eq!(parsed.models[0].display_name, "Gemini 1.5 Flash");
    }
}
