//! Base provider trait and common types for Paperlens
//!
//! This module defines the Provider trait that all generative-text providers
//! must implement, along with model metadata types used by the models
//! command.

use crate::error::Result;
use async_trait::async_trait;

/// Default context window size when not reported by the API
const DEFAULT_CONTEXT_WINDOW: usize = 4096;

/// Model information for listing and inspection
///
/// Contains metadata about an available model, including its identifier,
/// display name, and context window.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ModelInfo {
    /// Unique identifier for the model (e.g., "gemini-1.5-flash")
    pub name: String,
    /// Display name for user-friendly presentation
    pub display_name: String,
    /// Maximum context window size in tokens
    pub context_window: usize,
}

impl ModelInfo {
    /// Create a new ModelInfo instance
    ///
    /// # Arguments
    ///
    /// * `name` - Model identifier
    /// * `display_name` - User-friendly display name
    /// * `context_window` - Context window size in tokens
    ///
    /// # Examples
    ///
    /// ```
    /// use paperlens::providers::ModelInfo;
    ///
    /// let model = ModelInfo::new("gemini-1.5-flash", "Gemini 1.5 Flash", 1_000_000);
    /// assert_eq!(model.name, "gemini-1.5-flash");
    /// assert_eq!(model.context_window, 1_000_000);
    /// ```
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        context_window: usize,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            context_window,
        }
    }

    /// Create a ModelInfo with the default context window
    pub fn with_default_window(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(name, display_name, DEFAULT_CONTEXT_WINDOW)
    }
}

/// Provider trait for generative-text providers
///
/// All providers (Gemini, Ollama) must implement this trait. The core
/// operation is `generate`, which submits a single prompt and returns the
/// completion text. Network failure, quota failure, and malformed-response
/// failure all surface as a single provider error; callers decide how to
/// absorb it.
///
/// # Examples
///
/// ```
/// use paperlens::providers::Provider;
/// use paperlens::error::Result;
/// use async_trait::async_trait;
///
/// struct EchoProvider;
///
/// #[async_trait]
/// impl Provider for EchoProvider {
///     async fn generate(&self, prompt: &str) -> Result<String> {
///         Ok(prompt.to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait Provider: Send + Sync {
    /// Generate a completion for the given prompt
    ///
    /// # Arguments
    ///
    /// * `prompt` - The full prompt text to submit
    ///
    /// # Returns
    ///
    /// Returns the completion text
    ///
    /// # Errors
    ///
    /// Returns error if the API call fails or the response is unusable
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// List available models for this provider
    ///
    /// # Errors
    ///
    /// Returns error if the provider doesn't support model listing
    /// or if the API call fails
    ///
    /// # Default Implementation
    ///
    /// The default implementation returns an error indicating that
    /// model listing is not supported by this provider.
    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        Err(crate::error::PaperlensError::Provider(
            "Model listing is not supported by this provider".to_string(),
        )
        .into())
    }

    /// Get the name of the currently configured model
    ///
    /// # Default Implementation
    ///
    /// The default implementation returns a generic unavailable message.
    fn current_model(&self) -> Result<String> {
        Err(crate::error::PaperlensError::Provider(
            "Current model information is not available from this provider".to_string(),
        )
        .into())
    }
}
