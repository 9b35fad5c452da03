//! Prompt construction for provider requests
//!
//! This module builds the two prompts the application sends upstream: the
//! structured analysis prompt for a freshly extracted document, and the
//! contextual chat prompt for follow-up questions.

pub mod analysis_prompt;
pub mod chat_prompt;

pub use analysis_prompt::{build_analysis_prompt, ANALYSIS_TEXT_LIMIT};
pub use chat_prompt::build_chat_prompt;

/// Truncate a string to at most `limit` characters on a char boundary
///
/// Used to bound the document text embedded in the analysis prompt. Returns
/// the input unchanged when it is already within the limit.
pub(crate) fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
