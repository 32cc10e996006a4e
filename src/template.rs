//! Template scanning for `{variable}` placeholders.
//!
//! A placeholder is a brace, one or more non-brace characters, and a closing
//! brace. There is no escaping mechanism; a literal brace cannot be produced
//! by a template. Interiors that are empty after trimming are not variables
//! and stay literal text.

use itertools::Itertools;

/// One lexical segment of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Literal text, emitted verbatim.
    Text(&'a str),
    /// A `{name}` placeholder. `raw` includes the braces.
    Variable { raw: &'a str, name: &'a str },
}

/// Splits a template into literal and placeholder segments.
///
/// Substitution and extraction share this scanner so they can never disagree
/// on what counts as a placeholder.
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'{' {
            pos += 1;
            continue;
        }
        // Find the closing brace; an inner '{' restarts the match from there.
        let mut end = pos + 1;
        while end < bytes.len() && bytes[end] != b'}' && bytes[end] != b'{' {
            end += 1;
        }
        if end < bytes.len() && bytes[end] == b'}' && end > pos + 1 {
            let name = &text[pos + 1..end];
            if !name.trim().is_empty() {
                if start < pos {
                    tokens.push(Token::Text(&text[start..pos]));
                }
                tokens.push(Token::Variable {
                    raw: &text[pos..=end],
                    name,
                });
                start = end + 1;
                pos = end + 1;
                continue;
            }
        }
        // Not a placeholder: the brace stays literal. If we stopped on an
        // inner '{', resume scanning from it.
        pos = if end < bytes.len() && bytes[end] == b'{' {
            end
        } else {
            pos + 1
        };
    }

    if start < text.len() {
        tokens.push(Token::Text(&text[start..]));
    }
    tokens
}

/// Returns the distinct variable names in `text`, in first-occurrence order.
pub fn extract_variables(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter_map(|t| match t {
            Token::Variable { name, .. } => Some(name.to_string()),
            Token::Text(_) => None,
        })
        .unique()
        .collect()
}

/// Summary of the placeholders found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAnalysis {
    pub has_variables: bool,
    /// Total placeholder occurrences, duplicates included.
    pub total_variables: usize,
    /// Distinct names in first-occurrence order.
    pub unique_variables: Vec<String>,
}

/// Analyzes a template without resolving anything.
pub fn analyze(text: &str) -> TemplateAnalysis {
    let occurrences: Vec<&str> = tokenize(text)
        .into_iter()
        .filter_map(|t| match t {
            Token::Variable { name, .. } => Some(name),
            Token::Text(_) => None,
        })
        .collect();

    let unique_variables: Vec<String> = occurrences
        .iter()
        .unique()
        .map(|name| name.to_string())
        .collect();

    TemplateAnalysis {
        has_variables: !occurrences.is_empty(),
        total_variables: occurrences.len(),
        unique_variables,
    }
}
