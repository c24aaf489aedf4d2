//! Inline bracket-tag extraction.
//!
//! # Responsibility
//! - Parse `[Contact: id]`, `[category: x]`, `[priority: x]` and `[due: ...]`
//!   tags out of raw memo text.
//! - Produce display text with every recognized tag removed.
//!
//! # Invariants
//! - The `Contact:` label is case-sensitive; the other labels are not.
//! - Malformed tags (unterminated, empty value, nested brackets) are plain text.
//! - `strip_tags(strip_tags(x)) == strip_tags(x)`.
//! - Values keep source order and duplicates. A tag that only forms once an
//!   inner tag is removed is recorded after the values of the pass before it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Trailing `[ \t]*` is part of the match so a removed tag takes its separator
// with it; the capture group is unaffected.
static CONTACT_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[Contact:\s*([^\[\]\s][^\[\]]*)\][ \t]*").expect("valid contact tag regex")
});
static CATEGORY_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[category:\s*([^\[\]\s][^\[\]]*)\][ \t]*")
        .expect("valid category tag regex")
});
static PRIORITY_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[priority:\s*([^\[\]\s][^\[\]]*)\][ \t]*")
        .expect("valid priority tag regex")
});
static DUE_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[due:\s*([^\[\]\s][^\[\]]*)\][ \t]*").expect("valid due tag regex")
});

/// Structured view of one memo's inline tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoMetadata {
    /// Memo text with all recognized tags removed and ends trimmed.
    pub clean_text: String,
    /// Contact ids from `[Contact: id]`, in source order.
    pub contacts: Vec<String>,
    pub categories: Vec<String>,
    pub priorities: Vec<String>,
    /// Free-form due values from `[due: ...]`.
    pub due_dates: Vec<String>,
}

impl MemoMetadata {
    pub fn primary_contact(&self) -> Option<&str> {
        self.contacts.first().map(String::as_str)
    }

    pub fn primary_priority(&self) -> Option<&str> {
        self.priorities.first().map(String::as_str)
    }

    pub fn primary_due(&self) -> Option<&str> {
        self.due_dates.first().map(String::as_str)
    }

    /// Returns whether the memo carried no recognized tag at all.
    pub fn has_no_tags(&self) -> bool {
        self.contacts.is_empty()
            && self.categories.is_empty()
            && self.priorities.is_empty()
            && self.due_dates.is_empty()
    }
}

/// Extracts all inline tags and the cleaned display text.
pub fn extract_memo_metadata(text: &str) -> MemoMetadata {
    if text.trim().is_empty() {
        return MemoMetadata::default();
    }

    let mut metadata = MemoMetadata::default();
    let clean_text = remove_tags(text, Some(&mut metadata));
    metadata.clean_text = clean_text;
    metadata
}

/// Removes every recognized tag and trims the result.
///
/// Removal repeats until no tag remains, so text such as
/// `[[Contact: a]Contact: b]` cannot leave a freshly formed tag behind.
pub fn strip_tags(text: &str) -> String {
    remove_tags(text, None)
}

#[derive(Debug, Clone, Copy)]
enum TagKind {
    Contact,
    Category,
    Priority,
    Due,
}

impl MemoMetadata {
    fn values_mut(&mut self, kind: TagKind) -> &mut Vec<String> {
        match kind {
            TagKind::Contact => &mut self.contacts,
            TagKind::Category => &mut self.categories,
            TagKind::Priority => &mut self.priorities,
            TagKind::Due => &mut self.due_dates,
        }
    }
}

fn remove_tags(text: &str, mut sink: Option<&mut MemoMetadata>) -> String {
    let mut current = text.to_string();
    loop {
        let mut changed = false;
        for (kind, pattern) in tag_patterns() {
            if !pattern.is_match(&current) {
                continue;
            }
            if let Some(metadata) = sink.as_deref_mut() {
                metadata
                    .values_mut(kind)
                    .extend(capture_values(pattern, &current));
            }
            current = pattern.replace_all(&current, "").into_owned();
            changed = true;
        }
        if !changed {
            break;
        }
    }
    current.trim().to_string()
}

fn tag_patterns() -> [(TagKind, &'static Regex); 4] {
    [
        (TagKind::Contact, &*CONTACT_TAG_RE),
        (TagKind::Category, &*CATEGORY_TAG_RE),
        (TagKind::Priority, &*PRIORITY_TAG_RE),
        (TagKind::Due, &*DUE_TAG_RE),
    ]
}

fn capture_values(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|value| value.as_str().trim().to_string())
        .collect()
}
