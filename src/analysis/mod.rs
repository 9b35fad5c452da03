//! Document analysis pipeline for Paperlens
//!
//! This module contains the analysis record type and the response
//! normalizer that turns raw provider output into a fully populated record.

pub mod normalizer;
pub mod record;

pub use normalizer::{normalize, Normalized, NormalizerTier, MAX_ALGORITHMS};
pub use record::PaperAnalysis;

use crate::error::Result;
use crate::prompts::build_analysis_prompt;
use crate::providers::Provider;

/// Analyze extracted document text with a provider
///
/// Submits the structured analysis prompt and normalizes whatever comes
/// back. Provider failure is fully absorbed: the caller receives the static
/// fallback record instead of an error, so this function only returns a
/// complete, renderable record.
///
/// # Arguments
///
/// * `provider` - The provider to submit the analysis prompt to
/// * `full_text` - Extracted document text
/// * `file_name` - Original file name of the document
///
/// # Returns
///
/// Returns the normalized record together with the tier that produced it
pub async fn analyze_document(
    provider: &dyn Provider,
    full_text: &str,
    file_name: &str,
) -> Result<Normalized> {
    let prompt = build_analysis_prompt(full_text);

    match provider.generate(&prompt).await {
        Ok(raw) => {
            tracing::debug!(raw_chars = raw.len(), "Received analysis response");
            Ok(normalize(&raw, full_text, file_name))
        }
        Err(error) => {
            tracing::warn!(%error, "Analysis generation failed, using static fallback record");
            Ok(Normalized {
                analysis: PaperAnalysis::unavailable(full_text, file_name),
                tier: NormalizerTier::StaticFallback,
            })
        }
    }
}
