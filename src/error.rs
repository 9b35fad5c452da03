//! Error types for Paperlens
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Paperlens operations
///
/// This enum encompasses all possible errors that can occur during
/// document analysis, configuration loading, provider interactions,
/// and PDF text extraction.
#[derive(Error, Debug)]
pub enum PaperlensError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider-related errors (API calls, quota, malformed responses)
    #[error("Provider error: {0}")]
    Provider(String),

    /// PDF text extraction errors (unreadable or empty documents)
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Missing credentials for provider
    #[error("Missing credentials for provider: {0}")]
    MissingCredentials(String),

    /// Authentication errors (e.g., 401 Unauthorized)
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Keyring/credential storage errors
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Result type alias for Paperlens operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = PaperlensError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_provider_error_display() {
        let error = PaperlensError::Provider("API timeout".to_string());
        assert_eq!(error.to_string(), "Provider error: API timeout");
    }

    #[test]
    fn test_extraction_error_display() {
        let error = PaperlensError::Extraction("no extractable text".to_string());
        assert_eq!(error.to_string(), "Extraction error: no extractable text");
    }

    #[test]
    fn test_missing_credentials_error_display() {
        let error = PaperlensError::MissingCredentials("gemini".to_string());
        assert_eq!(
            error.to_string(),
            "Missing credentials for provider: gemini"
        );
    }

    #[test]
    fn test_authentication_error_display() {
        let error = PaperlensError::Authentication("key rejected".to_string());
        assert_eq!(error.to_string(), "Authentication error: key rejected");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: PaperlensError = io_error.into();
        assert!(matches!(error, PaperlensError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: PaperlensError = json_error.into();
        assert!(matches!(error, PaperlensError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: PaperlensError = yaml_error.into();
        assert!(matches!(error, PaperlensError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PaperlensError>();
    }
}
