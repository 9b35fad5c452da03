//! Contextual chat prompt for follow-up questions
//!
//! Wraps a user question in the paper context assembled by the session
//! layer and asks the provider for an HTML-formatted answer. Questions
//! asked without a document pass through verbatim.

/// Build the chat prompt for a question, optionally with paper context
///
/// # Arguments
///
/// * `question` - The user's question
/// * `context` - Paper context from the current session, if any
///
/// # Examples
///
/// ```
/// use paperlens::prompts::build_chat_prompt;
///
/// let prompt = build_chat_prompt("What is the methodology?", Some("Title: ..."));
/// assert!(prompt.contains("What is the methodology?"));
/// assert!(prompt.contains("Title: ..."));
///
/// let bare = build_chat_prompt("What is attention?", None);
/// assert_eq!(bare, "What is attention?");
/// ```
pub fn build_chat_prompt(question: &str, context: Option<&str>) -> String {
    match context {
        Some(context) => format!(
            r#"You have access to a research paper with the following context:
{context}

User question: {question}

Please provide a well-formatted response using HTML formatting for better readability:
- Use <h3> for main headings
- Use <p> for paragraphs
- Use <ul> and <li> for bullet points
- Use <strong> for emphasis
- Use <br> for line breaks when needed

Answer the question using both the research paper context (if relevant) and your general knowledge.
If the question is specifically about the paper, prioritize information from the paper context.
Make your response clear, well-structured, and easy to read."#
        ),
        None => question.to_string(),
    }
}
