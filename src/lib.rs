//! Paperlens - research paper analysis CLI library
//!
//! This library provides the core functionality for Paperlens: PDF text
//! extraction, provider abstractions, response normalization, chat
//! sessions, and configuration.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `analysis`: Analysis record and the three-tier response normalizer
//! - `extract`: PDF text extraction boundary
//! - `providers`: Generative-text provider abstraction (Gemini, Ollama)
//! - `prompts`: Analysis and chat prompt construction
//! - `session`: Document session and chat transcript
//! - `render`: Terminal rendering of records and transcripts
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use paperlens::analysis::analyze_document;
//! use paperlens::config::Config;
//! use paperlens::providers::create_provider;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let provider = create_provider(&config.provider, None)?;
//!     let text = paperlens::extract::extract_text_from_file("paper.pdf".as_ref())?;
//!     let normalized = analyze_document(provider.as_ref(), &text, "paper.pdf").await?;
//!     println!("{}", normalized.analysis.title);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod prompts;
pub mod providers;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use analysis::{normalize, PaperAnalysis};
pub use config::Config;
pub use error::{PaperlensError, Result};
pub use session::{ChatRole, ChatTurn, DocumentSession};
