//! Memo domain model.
//!
//! # Responsibility
//! - Define the memo record handed to the core by the storage layer.
//! - Provide parsing helpers for the `note|task|idea` memo kind.
//!
//! # Invariants
//! - `id` is stable for the lifetime of the memo and never reused.
//! - `text` may carry inline bracket tags; the core never rewrites it.
//! - `created_at` is Unix epoch milliseconds.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one memo, owned by the storage layer.
pub type MemoId = Uuid;

/// Memo category shown by the UI.
///
/// Deserialization goes through [`MemoType::parse`], so `"Task"` from an
/// external store is accepted as `task`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum MemoType {
    /// Free-form note.
    Note,
    /// Actionable task.
    Task,
    /// Idea capture.
    Idea,
}

impl MemoType {
    /// Stable wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Task => "task",
            Self::Idea => "idea",
        }
    }

    /// Parses a memo kind case-insensitively, ignoring surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "note" => Some(Self::Note),
            "task" => Some(Self::Task),
            "idea" => Some(Self::Idea),
            _ => None,
        }
    }
}

impl TryFrom<String> for MemoType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown memo type `{value}`"))
    }
}

/// Memo as supplied by the storage collaborator. Read-only for the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoRecord {
    pub id: MemoId,
    /// Raw text, possibly containing `[Contact: ..]`-style tags.
    pub text: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: MemoType,
    #[serde(default)]
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl MemoRecord {
    /// Creates an open memo with a generated id.
    pub fn new(kind: MemoType, text: impl Into<String>, created_at: i64) -> Self {
        Self::with_id(Uuid::new_v4(), kind, text, created_at)
    }

    /// Creates an open memo with a caller-provided id.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(id: MemoId, kind: MemoType, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            text: text.into(),
            kind,
            completed: false,
            created_at,
            audio_url: None,
        }
    }
}
