//! Best-effort keyword extraction used as a relevance signal.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

const DEFAULT_MAX_KEYWORDS: usize = 10;
const MIN_KEYWORD_CHARS: usize = 4;

const STOP_WORDS: &[&str] = &[
    "about", "after", "again", "also", "been", "before", "being", "could", "does", "doing",
    "down", "each", "from", "have", "having", "here", "into", "just", "like", "more", "most",
    "much", "only", "other", "over", "really", "same", "should", "some", "such", "than", "that",
    "their", "them", "then", "there", "these", "they", "this", "those", "through", "very",
    "want", "were", "what", "when", "where", "which", "while", "will", "with", "would", "your",
];

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]+").expect("valid non-word regex"));
static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Extracts up to 10 keywords, preserving source order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    extract_keywords_with_limit(text, DEFAULT_MAX_KEYWORDS)
}

/// Extracts up to `max_keywords` keywords, preserving source order.
///
/// Rules: lower-case, strip punctuation, split on whitespace, keep tokens
/// longer than 3 characters that are not stop words. Duplicates are kept.
pub fn extract_keywords_with_limit(text: &str, max_keywords: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD_RE.replace_all(&lowered, "");
    stripped
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|token| !STOP_WORD_SET.contains(*token))
        .take(max_keywords)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{extract_keywords, extract_keywords_with_limit};

    #[test]
    fn drops_short_tokens_and_stop_words() {
        let keywords = extract_keywords("Call the plumber about THAT leaking sink!");
        assert_eq!(keywords, vec!["call", "plumber", "leaking", "sink"]);
    }

    #[test]
    fn caps_result_length() {
        let text = (0..20)
            .map(|idx| format!("token{idx}"))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(extract_keywords(&text).len(), 10);
        assert_eq!(extract_keywords_with_limit(&text, 3).len(), 3);
    }

    #[test]
    fn empty_text_has_no_keywords() {
        assert!(extract_keywords("").is_empty());
    }
}
