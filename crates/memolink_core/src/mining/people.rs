//! Person mention detection.
//!
//! # Responsibility
//! - Find `Firstname Lastname` mentions in free-form memo text.
//! - Attach a relationship category guess and a context sentence.
//!
//! # Invariants
//! - Every detected person has a non-empty first and last name.
//! - Output order is first-discovery order across the four passes.
//! - One category is computed per call from the whole text and shared by
//!   every person detected in that call.

use crate::config::CategoryKeywords;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const CONTEXT_FALLBACK_CHARS: usize = 100;

// Name shape shared by all passes: two capital-initial words, one space.
static CONTACT_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i:met with|talked to|spoke with|meeting with|call with|discussed with)\s+([A-Z][a-z]+ [A-Z][a-z]+)\b",
    )
    .expect("valid contact verb regex")
});
static SPEECH_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-z]+ [A-Z][a-z]+)\s+(?i:said|mentioned|told|asked|suggested)\b")
        .expect("valid speech verb regex")
});
static PREPOSITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?i:from|to)\s+([A-Z][a-z]+ [A-Z][a-z]+)\b").expect("valid preposition regex")
});
static BARE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+ [A-Z][a-z]+)\b").expect("valid bare name regex"));
static SENTENCE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]").expect("valid sentence split regex"));

/// Relationship category suggested for a detected person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonCategory {
    Work,
    Personal,
}

impl PersonCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
        }
    }
}

/// A person mention found in memo text, not yet confirmed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedPerson {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub suggested_category: PersonCategory,
    /// Sentence the name was found in, or a truncated text prefix.
    pub context: String,
}

/// Strategy seam for person detection.
///
/// The regex strategy is a heuristic; an NLP-backed strategy can replace it
/// without touching callers such as the suggestion reconciler.
pub trait PersonDetector {
    fn detect(&self, text: &str) -> Vec<DetectedPerson>;
}

/// Regex-pass person detector with keyword-density categorization.
#[derive(Debug, Clone, Default)]
pub struct RegexPersonDetector {
    keywords: CategoryKeywords,
}

impl RegexPersonDetector {
    /// Creates a detector with the built-in keyword tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detector with caller-provided keyword tables.
    pub fn with_keywords(keywords: CategoryKeywords) -> Self {
        Self { keywords }
    }

    /// Infers one category for the whole text.
    ///
    /// Counts how many distinct work and personal keywords occur
    /// (case-insensitive substring). Ties go to `Personal`.
    pub fn infer_category(&self, text: &str) -> PersonCategory {
        let lowered = text.to_lowercase();
        let work = count_present(&self.keywords.work, &lowered);
        let personal = count_present(&self.keywords.personal, &lowered);
        if work > personal {
            PersonCategory::Work
        } else {
            PersonCategory::Personal
        }
    }
}

impl PersonDetector for RegexPersonDetector {
    fn detect(&self, text: &str) -> Vec<DetectedPerson> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let names = collect_candidate_names(text);
        if names.is_empty() {
            return Vec::new();
        }

        let category = self.infer_category(text);
        let people: Vec<DetectedPerson> = names
            .into_iter()
            .filter_map(|full_name| {
                let (first_name, last_name) = split_full_name(&full_name)?;
                Some(DetectedPerson {
                    context: find_context(text, &full_name),
                    full_name,
                    first_name,
                    last_name,
                    suggested_category: category,
                })
            })
            .collect();

        log::debug!(
            "event=people_detect module=mining status=ok count={} category={}",
            people.len(),
            category.as_str()
        );
        people
    }
}

/// Detects people using the default regex strategy.
pub fn detect_people_in_text(text: &str) -> Vec<DetectedPerson> {
    RegexPersonDetector::new().detect(text)
}

fn collect_candidate_names(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for pattern in [
        &CONTACT_VERB_RE,
        &SPEECH_VERB_RE,
        &PREPOSITION_RE,
        &BARE_NAME_RE,
    ] {
        for caps in pattern.captures_iter(text) {
            if let Some(name) = caps.get(1) {
                let name = name.as_str().to_string();
                if seen.insert(name.clone()) {
                    names.push(name);
                }
            }
        }
    }
    names
}

/// Splits on the first space; `None` when either half would be empty.
fn split_full_name(full_name: &str) -> Option<(String, String)> {
    let mut parts = full_name.split_whitespace();
    let first = parts.next()?.to_string();
    let last = parts.collect::<Vec<_>>().join(" ");
    if first.is_empty() || last.is_empty() {
        return None;
    }
    Some((first, last))
}

fn count_present(keywords: &[String], lowered_text: &str) -> usize {
    keywords
        .iter()
        .map(|keyword| keyword.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty() && lowered_text.contains(keyword.as_str()))
        .count()
}

fn find_context(text: &str, full_name: &str) -> String {
    let needle = full_name.to_lowercase();
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .find(|sentence| sentence.to_lowercase().contains(&needle))
        .map(str::to_string)
        .unwrap_or_else(|| {
            let prefix: String = text.chars().take(CONTEXT_FALLBACK_CHARS).collect();
            format!("{prefix}...")
        })
}

#[cfg(test)]
mod tests {
    use super::{
        collect_candidate_names, find_context, split_full_name, PersonCategory,
        RegexPersonDetector,
    };

    #[test]
    fn passes_collapse_duplicates_in_discovery_order() {
        let names =
            collect_candidate_names("Lunch was fun. Anna Bell said hi, then spoke with Tom Hardy");
        assert_eq!(names, vec!["Tom Hardy", "Anna Bell"]);
    }

    #[test]
    fn split_rejects_single_token() {
        assert_eq!(split_full_name("Madonna"), None);
        assert_eq!(
            split_full_name("Jane Doe"),
            Some(("Jane".to_string(), "Doe".to_string()))
        );
    }

    #[test]
    fn context_falls_back_to_prefix() {
        let context = find_context("no names here", "Jane Doe");
        assert_eq!(context, "no names here...");
    }

    #[test]
    fn category_ties_go_to_personal() {
        let detector = RegexPersonDetector::new();
        assert_eq!(
            detector.infer_category("project dinner"),
            PersonCategory::Personal
        );
        assert_eq!(
            detector.infer_category("project meeting dinner"),
            PersonCategory::Work
        );
    }
}
