//! Document session and chat transcript for Paperlens
//!
//! A session owns the normalized analysis of the current document plus the
//! ordered question/answer transcript. Sessions live in memory only: they
//! are discarded when the user starts a new analysis or quits, and nothing
//! is persisted.

use crate::analysis::PaperAnalysis;
use crate::error::Result;
use crate::prompts::{build_chat_prompt, truncate_chars};
use crate::providers::Provider;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of `full_text` characters included in the chat context
pub const CHAT_CONTEXT_LIMIT: usize = 2_000;

/// Fixed assistant reply appended when the provider call fails during chat
///
/// The transcript and session remain usable afterwards; this apology is the
/// full error-handling contract for chat.
pub const CHAT_APOLOGY: &str =
    "Sorry, I encountered an error while processing your question. Please try again.";

/// Role of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// A question from the user
    User,
    /// An answer from the model (may contain inline HTML markup)
    Assistant,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// One exchange unit in the chat transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Unique identifier for this turn
    pub id: Uuid,
    /// Who produced the content
    pub role: ChatRole,
    /// Plain text for user turns; may carry HTML markup for assistant turns
    pub content: String,
    /// Creation timestamp
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Build the paper context string passed to the provider with each question
///
/// Concatenates title, abstract, problem statement, proposed solution, the
/// algorithm list joined by commas, summary, and the first
/// [`CHAT_CONTEXT_LIMIT`] characters of the full text followed by an
/// ellipsis marker.
///
/// # Examples
///
/// ```
/// use paperlens::analysis::PaperAnalysis;
/// use paperlens::session::paper_context;
///
/// let record = PaperAnalysis::unavailable("full text", "paper.pdf");
/// let context = paper_context(&record);
/// assert!(context.starts_with("Title: "));
/// assert!(context.contains("Full Text: full text..."));
/// ```
pub fn paper_context(analysis: &PaperAnalysis) -> String {
    format!(
        "Title: {}\n\
         Abstract: {}\n\
         Problem Statement: {}\n\
         Proposed Solution: {}\n\
         Algorithms/Methods: {}\n\
         Summary: {}\n\
         Full Text: {}...",
        analysis.title,
        analysis.abstract_text,
        analysis.problem_statement,
        analysis.proposed_solution,
        analysis.algorithms.join(", "),
        analysis.summary,
        truncate_chars(&analysis.full_text, CHAT_CONTEXT_LIMIT),
    )
}

/// In-memory session over one analyzed document
///
/// Owns the analysis record and the transcript. One question is in flight
/// at a time; each `ask` appends a user turn and an assistant turn (either
/// the provider's answer or the fixed apology).
pub struct DocumentSession {
    analysis: PaperAnalysis,
    transcript: Vec<ChatTurn>,
    max_transcript_turns: usize,
}

impl DocumentSession {
    /// Create a session over a normalized analysis record
    ///
    /// # Arguments
    ///
    /// * `analysis` - The analysis record for the current document
    /// * `max_transcript_turns` - Transcript cap; 0 means unlimited
    pub fn new(analysis: PaperAnalysis, max_transcript_turns: usize) -> Self {
        Self {
            analysis,
            transcript: Vec::new(),
            max_transcript_turns,
        }
    }

    /// The analysis record this session is about
    pub fn analysis(&self) -> &PaperAnalysis {
        &self.analysis
    }

    /// The transcript in conversation order
    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    /// Clear the transcript, keeping the analysis
    pub fn reset(&mut self) {
        tracing::debug!(turns = self.transcript.len(), "Clearing chat transcript");
        self.transcript.clear();
    }

    /// Ask a question about the current document
    ///
    /// Builds the paper context, submits the chat prompt, and appends both
    /// turns to the transcript. Provider failures are absorbed: the
    /// assistant turn becomes [`CHAT_APOLOGY`] and the session stays
    /// usable.
    ///
    /// # Arguments
    ///
    /// * `provider` - The provider to submit the question to
    /// * `question` - The user's question
    ///
    /// # Returns
    ///
    /// Returns the assistant turn's content
    pub async fn ask(&mut self, provider: &dyn Provider, question: &str) -> Result<String> {
        self.push(ChatTurn::user(question));

        let context = paper_context(&self.analysis);
        let prompt = build_chat_prompt(question, Some(&context));

        let answer = match provider.generate(&prompt).await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(%error, "Chat generation failed, substituting apology");
                CHAT_APOLOGY.to_string()
            }
        };

        self.push(ChatTurn::assistant(answer.clone()));
        Ok(answer)
    }

    fn push(&mut self, turn: ChatTurn) {
        self.transcript.push(turn);
        if self.max_transcript_turns > 0 && self.transcript.len() > self.max_transcript_turns {
            let excess = self.transcript.len() - self.max_transcript_turns;
            self.transcript.drain(..excess);
        }
    }
}
