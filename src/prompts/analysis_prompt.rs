//! Structured analysis prompt for document analysis
//!
//! Instructs the provider to answer with a single JSON object describing the
//! paper. The response normalizer tolerates deviations from the requested
//! shape, but the prompt spells out every field so well-behaved models can
//! be mapped directly.

use crate::prompts::truncate_chars;

/// Maximum number of document characters embedded in the analysis prompt
///
/// The stored record always keeps the full extracted text; only the prompt
/// copy is truncated.
pub const ANALYSIS_TEXT_LIMIT: usize = 15_000;

/// Build the structured analysis prompt for a document
///
/// # Arguments
///
/// * `text` - Extracted document text; truncated to [`ANALYSIS_TEXT_LIMIT`]
///   characters before being embedded
///
/// # Examples
///
/// ```
/// use paperlens::prompts::build_analysis_prompt;
///
/// let prompt = build_analysis_prompt("We present a new architecture...");
/// assert!(prompt.contains("valid JSON"));
/// assert!(prompt.contains("We present a new architecture..."));
/// ```
pub fn build_analysis_prompt(text: &str) -> String {
    format!(
        r#"You are an expert research paper analyzer with deep academic knowledge. Analyze this research paper text thoroughly and extract comprehensive information.
Provide clear, concise explanations that are easy to understand for the average reader while maintaining academic accuracy.
Please provide your response in valid JSON format only, without any additional text or formatting:

{{
  "title": "extracted paper title",
  "abstract": "clear abstract summary with key findings and methodology overview (150-250 words)",
  "abstractBullets": ["Key finding 1", "Key finding 2", "Key finding 3", "Methodology highlight"],
  "problemStatement": "clear explanation of the research problem and its significance (100-200 words)",
  "problemBullets": ["Main problem", "Why it matters", "Current limitations", "Need for solution"],
  "proposedSolution": "clear description of the proposed approach and key innovations (150-250 words)",
  "solutionBullets": ["Main approach", "Key innovation", "How it works", "Benefits"],
  "algorithms": ["detailed algorithm names", "methodologies used", "technical approaches", "frameworks employed"],
  "summary": "comprehensive summary including research objectives, methodology, key findings, and practical applications (200-300 words)",
  "summaryBullets": ["Research objective", "Main methodology", "Key findings", "Practical applications"],
  "keyFindings": "major discoveries, results, and significant outcomes (100-200 words)",
  "findingsBullets": ["Main discovery", "Performance result", "Significant outcome", "Impact"],
  "methodology": "research methodology, experimental setup, and analysis techniques (100-200 words)",
  "methodologyBullets": ["Research method", "Experimental setup", "Data collection", "Analysis technique"],
  "contributions": "specific contributions to the field and impact (100-150 words)",
  "contributionsBullets": ["Novel contribution", "Field impact", "Practical benefit", "Future direction"]
}}

Important:
- Provide clear, concise explanations that average readers can understand
- Use simple language while maintaining technical accuracy
- Include specific details from the paper
- Focus on key points and practical implications
- Return only valid JSON, no markdown or extra text
- Make content accessible and easy to read
- Bullet points should be concise and highlight key aspects

Text to analyze:
{}"#,
        truncate_chars(text, ANALYSIS_TEXT_LIMIT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_all_requested_fields() {
        let prompt = build_analysis_prompt("document text");
        for field in [
            "title",
            "abstract",
            "abstractBullets",
            "problemStatement",
            "problemBullets",
            "proposedSolution",
            "solutionBullets",
            "algorithms",
            "summary",
            "summaryBullets",
            "keyFindings",
            "findingsBullets",
            "methodology",
            "methodologyBullets",
            "contributions",
            "contributionsBullets",
        ] {
            assert!(prompt.contains(field), "missing field {field}");
        }
    }

    #[test]
    fn test_prompt_embeds_document_text() {
        let prompt = build_analysis_prompt("unique marker text 42");
        assert!(prompt.contains("unique marker text 42"));
    }

    #[test]
    fn test_prompt_truncates_long_documents() {
        let text = "~".repeat(ANALYSIS_TEXT_LIMIT + 5_000);
        let prompt = build_analysis_prompt(&text);

        let embedded = prompt.chars().filter(|c| *c == '~').count();
        assert_eq!(embedded, ANALYSIS_TEXT_LIMIT);
    }

    #[test]
    fn test_prompt_demands_json_only() {
        let prompt = build_analysis_prompt("text");
        assert!(prompt.contains("Return only valid JSON"));
    }
}
