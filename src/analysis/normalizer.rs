//! Response normalization for provider analysis output
//!
//! Converts the raw, untrusted text returned by a generative provider into a
//! fully populated [`PaperAnalysis`]. The provider is prompted to answer with
//! a JSON object but offers no guarantee of well-formedness, so normalization
//! runs a chain of fallback tiers and never fails:
//!
//! 1. Strict structured parse of the brace-delimited region, with per-field
//!    default substitution for missing or mistyped fields.
//! 2. Regex section scan over the raw text for a fixed subset of fields.
//! 3. A fully static record, built by the caller via
//!    [`PaperAnalysis::unavailable`] when the provider call itself failed.
//!
//! The brace region is located greedily from the first `{` to the last `}`
//! in the whole text. Prose containing stray braces around the object can
//! therefore widen the span and push parsing into the section-scan tier
//! (see DESIGN.md for the span-rule discussion).

use crate::analysis::record::{owned, PaperAnalysis};
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;

/// Which normalization tier produced a record
///
/// Reported alongside the record so callers can log degradation instead of
/// silently absorbing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizerTier {
    /// The brace-delimited region parsed as a JSON object
    Structured,

    /// No parseable JSON object; fields recovered by regex section scan
    SectionScan,

    /// Provider call failed before producing text; fully static record
    StaticFallback,
}

impl fmt::Display for NormalizerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured => write!(f, "structured"),
            Self::SectionScan => write!(f, "section-scan"),
            Self::StaticFallback => write!(f, "static-fallback"),
        }
    }
}

/// A normalized record together with the tier that produced it
#[derive(Debug, Clone)]
pub struct Normalized {
    /// The fully populated analysis record
    pub analysis: PaperAnalysis,
    /// The tier that produced the record
    pub tier: NormalizerTier,
}

/// Maximum number of algorithm entries retained in a record
pub const MAX_ALGORITHMS: usize = 5;

/// Normalize raw provider output into a complete analysis record
///
/// Pure function over its inputs; never fails and never returns a record
/// with missing fields. `full_text` and `file_name` are carried into the
/// record unmodified and are never inspected by any tier.
///
/// # Arguments
///
/// * `raw` - Raw provider output, nominally JSON but untrusted
/// * `full_text` - Extracted document text to store in the record
/// * `file_name` - Original file name to store in the record
///
/// # Examples
///
/// ```
/// use paperlens::analysis::{normalize, NormalizerTier};
///
/// let raw = r#"{"title": "Attention Is All You Need"}"#;
/// let normalized = normalize(raw, "full text", "attention.pdf");
/// assert_eq!(normalized.tier, NormalizerTier::Structured);
/// assert_eq!(normalized.analysis.title, "Attention Is All You Need");
/// ```
pub fn normalize(raw: &str, full_text: &str, file_name: &str) -> Normalized {
    let cleaned = strip_code_fences(raw);

    if let Some(span) = brace_span(&cleaned) {
        match serde_json::from_str::<Value>(span) {
            Ok(Value::Object(map)) => {
                tracing::debug!(tier = %NormalizerTier::Structured, "Parsed structured analysis");
                return Normalized {
                    analysis: from_object(&map, full_text, file_name),
                    tier: NormalizerTier::Structured,
                };
            }
            Ok(other) => {
                tracing::warn!(
                    value_type = other_type_name(&other),
                    "Brace region parsed to a non-object value, falling back to section scan"
                );
            }
            Err(error) => {
                tracing::warn!(%error, "Brace region is not valid JSON, falling back to section scan");
            }
        }
    } else {
        tracing::warn!("No brace-delimited region in provider output, falling back to section scan");
    }

    Normalized {
        analysis: section_scan(&cleaned, full_text, file_name),
        tier: NormalizerTier::SectionScan,
    }
}

fn other_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Remove markdown code-fence markers from provider output
///
/// Providers frequently wrap their JSON answer in ```` ```json ```` fences
/// despite being told not to. Fence markers are removed wherever they
/// appear; the remaining text is trimmed.
fn strip_code_fences(text: &str) -> String {
    let fence_json = Regex::new(r"```json\s*").expect("Invalid fence pattern");
    let fence = Regex::new(r"```\s*").expect("Invalid fence pattern");

    let without_json = fence_json.replace_all(text.trim(), "");
    fence.replace_all(&without_json, "").into_owned()
}

/// Locate the brace-delimited region of the text
///
/// Spans from the first `{` to the last `}`, greedily. Returns `None` when
/// either brace is absent or they are out of order.
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}

/// Build a record field-by-field from a parsed JSON object
///
/// Missing, empty, or mistyped fields degrade individually to their static
/// defaults rather than failing the whole record.
fn from_object(map: &Map<String, Value>, full_text: &str, file_name: &str) -> PaperAnalysis {
    PaperAnalysis {
        title: scalar_or(map, "title", defaults::TITLE),
        abstract_text: scalar_or(map, "abstract", defaults::ABSTRACT),
        abstract_bullets: bullets_or(map, "abstractBullets", defaults::abstract_bullets),
        problem_statement: scalar_or(map, "problemStatement", defaults::PROBLEM),
        problem_bullets: bullets_or(map, "problemBullets", defaults::problem_bullets),
        proposed_solution: scalar_or(map, "proposedSolution", defaults::SOLUTION),
        solution_bullets: bullets_or(map, "solutionBullets", defaults::solution_bullets),
        algorithms: algorithms_from(map.get("algorithms")),
        summary: scalar_or(map, "summary", defaults::SUMMARY),
        summary_bullets: bullets_or(map, "summaryBullets", defaults::summary_bullets),
        key_findings: scalar_or(map, "keyFindings", defaults::FINDINGS),
        findings_bullets: bullets_or(map, "findingsBullets", defaults::findings_bullets),
        methodology: scalar_or(map, "methodology", defaults::METHODOLOGY),
        methodology_bullets: bullets_or(map, "methodologyBullets", defaults::methodology_bullets),
        contributions: scalar_or(map, "contributions", defaults::CONTRIBUTIONS),
        contributions_bullets: bullets_or(
            map,
            "contributionsBullets",
            defaults::contributions_bullets,
        ),
        full_text: full_text.to_string(),
        file_name: file_name.to_string(),
    }
}

/// Take a scalar field from the object, or its default when absent/empty
fn scalar_or(map: &Map<String, Value>, key: &str, default: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

/// Take a bullet-list field from the object if it is actually an array
///
/// Any non-array value (including a plain string) is rejected by the type
/// guard and replaced with the field's default list.
fn bullets_or(map: &Map<String, Value>, key: &str, default: fn() -> Vec<String>) -> Vec<String> {
    match map.get(key) {
        Some(Value::Array(items)) => items.iter().map(coerce_entry).collect(),
        _ => default(),
    }
}

/// Take the algorithms list, truncated to [`MAX_ALGORITHMS`] entries
///
/// Non-array values yield the single-element default; an empty array also
/// falls back so the record never carries an empty algorithm list.
fn algorithms_from(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .take(MAX_ALGORITHMS)
            .map(coerce_entry)
            .collect(),
        _ => defaults::algorithms(),
    }
}

/// Render a list entry as display text
///
/// String entries pass through; anything else keeps its JSON rendering so a
/// malformed list still produces something displayable.
fn coerce_entry(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Regex section scan over unparseable provider output
///
/// Recovers `title`, `abstract`, `problemStatement`, `proposedSolution`,
/// and `summary` by pattern-matching `name: "value"` shapes in the text;
/// every other field takes its static default directly. Never inspects
/// `full_text` or `file_name`.
fn section_scan(text: &str, full_text: &str, file_name: &str) -> PaperAnalysis {
    let patterns = SectionPatterns::new();

    PaperAnalysis {
        title: patterns.extract(&patterns.title, text, defaults::TITLE),
        abstract_text: patterns.extract(&patterns.abstract_re, text, defaults::ABSTRACT),
        abstract_bullets: defaults::abstract_bullets(),
        problem_statement: patterns.extract(&patterns.problem, text, defaults::PROBLEM),
        problem_bullets: defaults::problem_bullets(),
        proposed_solution: patterns.extract(&patterns.solution, text, defaults::SOLUTION),
        solution_bullets: defaults::solution_bullets(),
        algorithms: owned(&["Document analysis completed"]),
        summary: patterns.extract(&patterns.summary, text, defaults::SUMMARY),
        summary_bullets: defaults::summary_bullets(),
        key_findings: defaults::FINDINGS.to_string(),
        findings_bullets: defaults::findings_bullets(),
        methodology: defaults::METHODOLOGY.to_string(),
        methodology_bullets: defaults::methodology_bullets(),
        contributions: defaults::CONTRIBUTIONS.to_string(),
        contributions_bullets: defaults::contributions_bullets(),
        full_text: full_text.to_string(),
        file_name: file_name.to_string(),
    }
}

/// Compiled patterns for the section-scan tier
///
/// Each pattern captures the text after `<name>:` or `<name>":` up to the
/// next comma or newline; the summary pattern also stops at a closing
/// brace since it is usually the last field of a truncated object.
struct SectionPatterns {
    title: Regex,
    abstract_re: Regex,
    problem: Regex,
    solution: Regex,
    summary: Regex,
}

impl SectionPatterns {
    fn new() -> Self {
        let build = |pattern: &str| Regex::new(pattern).expect("Invalid section pattern");
        Self {
            title: build(r#"(?i)title[":]\s*["']?(.*?)["']?\s*[,\n]"#),
            abstract_re: build(r#"(?i)abstract[":]\s*["']?(.*?)["']?\s*[,\n]"#),
            problem: build(r#"(?i)problem[^:]*[":]\s*["']?(.*?)["']?\s*[,\n]"#),
            solution: build(r#"(?i)solution[^:]*[":]\s*["']?(.*?)["']?\s*[,\n]"#),
            summary: build(r#"(?i)summary[":]\s*["']?(.*?)["']?\s*[,\n}]"#),
        }
    }

    fn extract(&self, pattern: &Regex, text: &str, default: &str) -> String {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

/// Static defaults for the structured-parse and section-scan tiers
///
/// These are deliberately generic sentences, not derived from the document:
/// a partially malformed provider answer degrades field-by-field to
/// plausible placeholder prose instead of failing the record.
pub(crate) mod defaults {
    use crate::analysis::record::owned;

    pub const TITLE: &str = "Research Paper Analysis";

    pub const ABSTRACT: &str = "Analysis of the research paper has been completed. The document \
                                contains valuable academic content with clear methodology and \
                                findings.";

    pub const PROBLEM: &str = "The research addresses important challenges in the field, \
                               identifying key problems that need innovative solutions.";

    pub const SOLUTION: &str = "The paper presents a solution approach using advanced \
                                methodologies and techniques to address the research challenges.";

    pub const SUMMARY: &str = "This research contributes to the field through innovative \
                               methodologies and analysis. The work presents novel approaches \
                               and provides insights for future research.";

    pub const FINDINGS: &str = "The research presents important findings that advance \
                                understanding in the field and provide practical value.";

    pub const METHODOLOGY: &str = "The research uses systematic methodological approaches \
                                   including data collection, analysis techniques, and \
                                   validation.";

    pub const CONTRIBUTIONS: &str = "This work makes contributions to the field through novel \
                                     approaches and practical applications.";

    pub fn abstract_bullets() -> Vec<String> {
        owned(&[
            "Document analyzed",
            "Key content extracted",
            "Methodology identified",
            "Findings processed",
        ])
    }

    pub fn problem_bullets() -> Vec<String> {
        owned(&[
            "Key problem identified",
            "Significance established",
            "Current gaps noted",
            "Solution needed",
        ])
    }

    pub fn solution_bullets() -> Vec<String> {
        owned(&[
            "Main approach defined",
            "Key innovation presented",
            "Implementation described",
            "Benefits outlined",
        ])
    }

    pub fn summary_bullets() -> Vec<String> {
        owned(&[
            "Research objective achieved",
            "Methodology applied",
            "Key findings obtained",
            "Applications identified",
        ])
    }

    pub fn findings_bullets() -> Vec<String> {
        owned(&[
            "Main discovery made",
            "Performance measured",
            "Results validated",
            "Impact assessed",
        ])
    }

    pub fn methodology_bullets() -> Vec<String> {
        owned(&[
            "Research method used",
            "Data collected",
            "Analysis performed",
            "Results validated",
        ])
    }

    pub fn contributions_bullets() -> Vec<String> {
        owned(&[
            "Novel approach",
            "Field advancement",
            "Practical benefit",
            "Future potential",
        ])
    }

    pub fn algorithms() -> Vec<String> {
        owned(&["Analysis completed"])
    }
}
