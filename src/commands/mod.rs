/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes four top-level command modules:

- `analyze` — Analyze a PDF and render the extracted fields
- `chat`    — Interactive Q&A session over an analyzed paper
- `auth`    — Provider credential helper
- `models`  — Model listing and inspection

These handlers are intentionally small and use the library components:
extraction, providers, the normalizer, and the session.
*/

use crate::analysis::{analyze_document, Normalized, PaperAnalysis};
use crate::config::Config;
use crate::error::{PaperlensError, Result};
use crate::extract;
use crate::providers::create_provider;
use std::path::Path;

// Model management commands
pub mod models;

/// Run the extraction + analysis pipeline for a PDF file
///
/// Shared by the `analyze` and `chat` commands. Extraction failures
/// propagate (the only blocking error in the pipeline); provider failures
/// are absorbed into the static fallback record.
async fn analyze_file(config: &Config, provider_name: Option<&str>, file: &Path) -> Result<Normalized> {
    let full_text = extract::extract_text_from_file(file)?;
    let file_name = extract::file_name(file);

    let provider = create_provider(&config.provider, provider_name)?;

    tracing::info!(file = %file.display(), "Analyzing document");
    let normalized = analyze_document(provider.as_ref(), &full_text, &file_name).await?;
    tracing::info!(tier = %normalized.tier, "Analysis complete");

    Ok(normalized)
}

// Analyze command handler
pub mod analyze {
    //! Document analysis handler.
    //!
    //! Extracts the PDF text, submits the analysis prompt, normalizes the
    //! response, and renders the record as cards (or JSON).

    use super::*;
    use crate::render;
    use std::path::PathBuf;

    /// Analyze a PDF research paper
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration
    /// * `file` - Path to the PDF file
    /// * `provider_name` - Optional override for the configured provider
    /// * `json` - Print the record as JSON instead of cards
    /// * `output` - Optional path to write the record as JSON
    pub async fn run_analyze(
        config: Config,
        file: PathBuf,
        provider_name: Option<String>,
        json: bool,
        output: Option<PathBuf>,
    ) -> Result<()> {
        let normalized = analyze_file(&config, provider_name.as_deref(), &file).await?;

        if let Some(path) = &output {
            write_analysis(&normalized.analysis, path)?;
            println!("Saved analysis to {}", path.display());
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&normalized.analysis)?);
        } else {
            render::print_analysis(&normalized.analysis);
        }

        Ok(())
    }

    /// Write an analysis record to a JSON file
    pub fn write_analysis(analysis: &PaperAnalysis, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(analysis)?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "Wrote analysis record");
        Ok(())
    }

    /// Load an analysis record from a JSON file written by `write_analysis`
    pub fn load_analysis(path: &Path) -> Result<PaperAnalysis> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PaperlensError::Config(format!(
                "Failed to read analysis file {}: {}",
                path.display(),
                e
            ))
        })?;
        let analysis = serde_json::from_str(&contents)?;
        Ok(analysis)
    }
}

// Chat command handler
pub mod chat {
    //! Interactive Q&A session handler.
    //!
    //! Analyzes the given PDF (or loads a saved record), then runs a
    //! readline-based loop that submits questions to the provider with the
    //! paper context attached.

    use super::*;
    use crate::render;
    use crate::session::{ChatRole, DocumentSession};
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;
    use std::path::PathBuf;

    /// Starter questions shown when the session opens
    pub const SUGGESTED_QUESTIONS: [&str; 5] = [
        "What is the main methodology used in this paper?",
        "Can you summarize the key findings?",
        "What algorithms or methods were employed?",
        "What problem does this research solve?",
        "How does this compare to other research in the field?",
    ];

    /// Start an interactive chat session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `file` - PDF to analyze before chatting, if given
    /// * `analysis_path` - Saved analysis record to load instead
    /// * `provider_name` - Optional override for the configured provider
    pub async fn run_chat(
        config: Config,
        file: Option<PathBuf>,
        analysis_path: Option<PathBuf>,
        provider_name: Option<String>,
    ) -> Result<()> {
        let analysis = match (&file, &analysis_path) {
            (Some(file), _) => {
                analyze_file(&config, provider_name.as_deref(), file)
                    .await?
                    .analysis
            }
            (None, Some(path)) => {
                tracing::info!(path = %path.display(), "Loading saved analysis");
                super::analyze::load_analysis(path)?
            }
            (None, None) => {
                return Err(PaperlensError::Config(
                    "chat requires either --file or --analysis".to_string(),
                )
                .into())
            }
        };

        render::print_analysis(&analysis);

        let provider = create_provider(&config.provider, provider_name.as_deref())?;
        let mut session = DocumentSession::new(analysis, config.chat.max_transcript_turns);

        println!("{}", "Ask Questions About the Paper".bold());
        if config.chat.show_suggestions {
            render::print_suggestions(&SUGGESTED_QUESTIONS);
        }
        println!("{}", "Type /help for commands, /quit to exit.".dimmed());

        let mut editor = DefaultEditor::new()
            .map_err(|e| PaperlensError::Config(format!("Failed to initialize readline: {}", e)))?;

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = editor.add_history_entry(line);

                    match line {
                        "/quit" | "/exit" => break,
                        "/help" => print_help(),
                        "/reset" => {
                            session.reset();
                            println!("Transcript cleared.");
                        }
                        "/context" => {
                            println!("{}", crate::session::paper_context(session.analysis()));
                        }
                        _ => {
                            let answer = session.ask(provider.as_ref(), line).await?;
                            render::print_chat_turn(ChatRole::Assistant, &answer);
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => {
                    tracing::error!("Readline error: {}", e);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help     Show this help");
        println!("  /context  Show the paper context sent with each question");
        println!("  /reset    Clear the chat transcript");
        println!("  /quit     Exit the session");
    }
}

// Auth command handler
pub mod auth {
    //! Provider credential helper.
    //!
    //! Prompts for an API key and stores it in the system keyring. Ollama
    //! needs no credentials, so authenticating it is a no-op with a hint.

    use super::*;
    use crate::providers::GeminiProvider;
    use std::io::Write;

    /// Authenticate with a provider
    ///
    /// # Arguments
    ///
    /// * `_config` - Global configuration
    /// * `provider_name` - Provider to authenticate ("gemini" or "ollama")
    pub async fn authenticate(_config: Config, provider_name: String) -> Result<()> {
        match provider_name.as_str() {
            "gemini" => {
                print!("Enter Gemini API key: ");
                std::io::stdout().flush()?;

                let mut key = String::new();
                std::io::stdin().read_line(&mut key)?;
                let key = key.trim();

                if key.is_empty() {
                    return Err(
                        PaperlensError::Authentication("API key cannot be empty".to_string())
                            .into(),
                    );
                }

                GeminiProvider::store_api_key(key)?;
                println!("API key stored in system keyring.");
                Ok(())
            }
            "ollama" => {
                println!("Ollama requires no credentials; configure the host in config/config.yaml");
                Ok(())
            }
            other => Err(PaperlensError::Provider(format!(
                "Unknown provider type: {}",
                other
            ))
            .into()),
        }
    }
}
