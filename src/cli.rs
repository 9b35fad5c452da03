//! Command-line interface definition for Paperlens
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for document analysis, chat, authentication,
//! and model management.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paperlens - research paper analysis CLI
///
/// Analyze PDF research papers with a generative-text provider and ask
/// follow-up questions about the extracted content.
#[derive(Parser, Debug, Clone)]
#[command(name = "paperlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Paperlens
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze a PDF research paper and render the extracted fields
    Analyze {
        /// Path to the PDF file to analyze
        #[arg(short, long)]
        file: PathBuf,

        /// Override the provider from config (gemini, ollama)
        #[arg(short, long)]
        provider: Option<String>,

        /// Print the analysis record as JSON instead of cards
        #[arg(long)]
        json: bool,

        /// Write the analysis record as JSON to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Analyze a paper (or load a saved analysis) and start an interactive Q&A session
    Chat {
        /// Path to the PDF file to analyze before chatting
        #[arg(short, long, conflicts_with = "analysis")]
        file: Option<PathBuf>,

        /// Path to a saved analysis JSON file (from `analyze --output`)
        #[arg(short, long)]
        analysis: Option<PathBuf>,

        /// Override the provider from config (gemini, ollama)
        #[arg(short, long)]
        provider: Option<String>,
    },

    /// Store provider credentials in the system keyring
    Auth {
        /// Provider to authenticate with (gemini)
        ///
        /// Use `--provider <name>` to override; if omitted the configured/default
        /// provider will be used.
        #[arg(short, long)]
        provider: Option<String>,
    },

    /// Manage provider models
    Models {
        /// Model management subcommand
        #[command(subcommand)]
        command: ModelCommand,
    },
}

/// Model management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ModelCommand {
    /// List available models
    List {
        /// Filter by provider (gemini, ollama)
        #[arg(short, long)]
        provider: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the currently configured model
    Current {
        /// Filter by provider (gemini, ollama)
        #[arg(short, long)]
        provider: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_analyze() {
        let cli = Cli::try_parse_from(["paperlens", "analyze", "--file", "paper.pdf"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Analyze {
            file,
            provider,
            json,
            output,
        } = cli.command
        {
            assert_eq!(file, PathBuf::from("paper.pdf"));
            assert_eq!(provider, None);
            assert!(!json);
            assert_eq!(output, None);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_cli_parse_analyze_requires_file() {
        let cli = Cli::try_parse_from(["paperlens", "analyze"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_analyze_with_all_flags() {
        let cli = Cli::try_parse_from([
            "paperlens",
            "analyze",
            "--file",
            "paper.pdf",
            "--provider",
            "ollama",
            "--json",
            "--output",
            "analysis.json",
        ]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Analyze {
            file,
            provider,
            json,
            output,
        } = cli.command
        {
            assert_eq!(file, PathBuf::from("paper.pdf"));
            assert_eq!(provider, Some("ollama".to_string()));
            assert!(json);
            assert_eq!(output, Some(PathBuf::from("analysis.json")));
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_cli_parse_chat_with_file() {
        let cli = Cli::try_parse_from(["paperlens", "chat", "--file", "paper.pdf"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Chat {
            file,
            analysis,
            provider,
        } = cli.command
        {
            assert_eq!(file, Some(PathBuf::from("paper.pdf")));
            assert_eq!(analysis, None);
            assert_eq!(provider, None);
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_chat_with_saved_analysis() {
        let cli = Cli::try_parse_from(["paperlens", "chat", "--analysis", "saved.json"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Chat { file, analysis, .. } = cli.command {
            assert_eq!(file, None);
            assert_eq!(analysis, Some(PathBuf::from("saved.json")));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_chat_file_and_analysis_conflict() {
        let cli = Cli::try_parse_from([
            "paperlens",
            "chat",
            "--file",
            "paper.pdf",
            "--analysis",
            "saved.json",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_auth() {
        let cli = Cli::try_parse_from(["paperlens", "auth", "--provider", "gemini"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Auth { provider } = cli.command {
            assert_eq!(provider, Some("gemini".to_string()));
        } else {
            panic!("Expected Auth command");
        }
    }

    #[test]
    fn test_cli_parse_auth_without_provider() {
        let cli = Cli::try_parse_from(["paperlens", "auth"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Auth { provider } = cli.command {
            assert_eq!(provider, None);
        } else {
            panic!("Expected Auth command");
        }
    }

    #[test]
    fn test_cli_parse_models_list() {
        let cli = Cli::try_parse_from(["paperlens", "models", "list"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Models { command } = cli.command {
            assert!(matches!(command, ModelCommand::List { .. }));
        } else {
            panic!("Expected Models command");
        }
    }

    #[test]
    fn test_cli_parse_models_list_with_provider() {
        let cli = Cli::try_parse_from(["paperlens", "models", "list", "--provider", "ollama"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Models { command } = cli.command {
            if let ModelCommand::List { provider, json } = command {
                assert_eq!(provider, Some("ollama".to_string()));
                assert!(!json);
            } else {
                panic!("Expected List command");
            }
        } else {
            panic!("Expected Models command");
        }
    }

    #[test]
    fn test_cli_parse_models_current() {
        let cli = Cli::try_parse_from(["paperlens", "models", "current"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Models { command } = cli.command {
            assert!(matches!(command, ModelCommand::Current { .. }));
        } else {
            panic!("Expected Models command");
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::try_parse_from([
            "paperlens",
            "--config",
            "custom.yaml",
            "auth",
            "--provider",
            "gemini",
        ]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert_eq!(cli.config, Some("custom.yaml".to_string()));
    }

    #[test]
    fn test_cli_parse_with_verbose() {
        let cli = Cli::try_parse_from(["paperlens", "-v", "models", "current"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_missing_command() {
        let cli = Cli::try_parse_from(["paperlens"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_invalid_command() {
        let cli = Cli::try_parse_from(["paperlens", "invalid"]);
        assert!(cli.is_err());
    }
}
