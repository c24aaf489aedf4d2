//! Follow-up commitment detection over a memo collection.
//!
//! # Responsibility
//! - Recognize commitment/action language in tag-stripped memo text.
//! - Assign a priority tier, an action phrase, a due hint and a contact name.
//! - Rank results by recency.
//!
//! # Invariants
//! - At most one follow-up per memo.
//! - Follow-up ids are UUID v5 of the memo id, stable across recomputation.
//! - Ordering is `created_at DESC, memo_id ASC`.

use crate::config::FollowUpSettings;
use crate::mining::metadata::{extract_memo_metadata, MemoMetadata};
use crate::model::memo::{MemoId, MemoRecord};
use crate::model::profile::ProfileLookup;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const FOLLOW_UP_NAMESPACE: Uuid = Uuid::from_u128(0x5d1f_0c2a_8e47_4b9a_a3c6_71e2_f04b_9d58);
const FOLLOW_UPS_DEFAULT_LIMIT: u32 = 10;
const FOLLOW_UPS_LIMIT_MAX: u32 = 50;

static ACTION_TABLE: Lazy<Vec<(FollowUpAction, Regex)>> = Lazy::new(|| {
    [
        (FollowUpAction::FollowUp, r"(?i)\bfollow[\s-]?up\b"),
        (FollowUpAction::Call, r"(?i)\b(?:call|phone|ring)\b"),
        (
            FollowUpAction::Message,
            r"(?i)\b(?:e-?mail|message|text back|write to|reply to)\b",
        ),
        (
            FollowUpAction::Meeting,
            r"(?i)\b(?:meet|meeting|schedule|catch up|coffee with|lunch with)\b",
        ),
        (FollowUpAction::Send, r"(?i)\b(?:send|share|forward)\b"),
        (
            FollowUpAction::CheckIn,
            r"(?i)\b(?:check in|check on|reach out|get back to|touch base)\b",
        ),
        (
            FollowUpAction::Commitment,
            r"(?i)\b(?:need to|needs to|have to|has to|must|promised|remember to|don['’]t forget|todo)\b",
        ),
    ]
    .into_iter()
    .map(|(action, pattern)| (action, Regex::new(pattern).expect("valid action regex")))
    .collect()
});
static URGENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:urgent|urgently|asap|immediately|today|tonight|critical|emergency|right away)\b",
    )
    .expect("valid urgency regex")
});
static TIME_BOUND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:by (?:the )?(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|tomorrow|tonight|noon|eod|end of (?:the )?(?:day|week|month)|next week)|tomorrow|this week|next week|soon|monday|tuesday|wednesday|thursday|friday|saturday|sunday|end of day)\b",
    )
    .expect("valid time-bound regex")
});

/// Priority tier for a detected follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpPriority {
    High,
    Medium,
    Low,
}

impl FollowUpPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Maps a `[priority: x]` tag value to a tier. Unknown values yield `None`.
    pub fn from_tag(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" | "urgent" => Some(Self::High),
            "medium" | "normal" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// Action category recognized from commitment language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpAction {
    FollowUp,
    Call,
    Message,
    Meeting,
    Send,
    CheckIn,
    Commitment,
}

impl FollowUpAction {
    /// Human-readable action phrase shown next to the contact name.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::FollowUp => "Follow up",
            Self::Call => "Call",
            Self::Message => "Send a message",
            Self::Meeting => "Schedule a meeting",
            Self::Send => "Send",
            Self::CheckIn => "Check in",
            Self::Commitment => "Complete commitment",
        }
    }
}

/// Actionable commitment derived from one memo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedFollowUp {
    /// Deterministic id derived from `memo_id`.
    pub id: Uuid,
    pub memo_id: MemoId,
    pub contact_name: String,
    /// Tag-stripped memo text.
    pub text: String,
    pub priority: FollowUpPriority,
    pub action: String,
    /// First `[due: ...]` value, else the first time-bound phrase found.
    pub due_hint: Option<String>,
    /// Unix epoch milliseconds, copied from the memo.
    pub created_at: i64,
}

/// Recency filter and pagination for follow-up listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowUpQuery {
    /// Keep follow-ups with `created_at >= since_ms`.
    pub since_ms: Option<i64>,
    /// Maximum rows to return. Defaults to 10 and clamps to 50.
    pub limit: Option<u32>,
}

/// Keyword-table follow-up detector.
#[derive(Debug, Clone)]
pub struct FollowUpDetector {
    fallback_contact_label: String,
}

impl Default for FollowUpDetector {
    fn default() -> Self {
        Self::with_settings(&FollowUpSettings::default())
    }
}

impl FollowUpDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: &FollowUpSettings) -> Self {
        Self {
            fallback_contact_label: settings.fallback_contact_label.clone(),
        }
    }

    /// Detects follow-ups across `memos`, newest first.
    pub fn detect<P>(&self, memos: &[MemoRecord], profiles: &P) -> Vec<DetectedFollowUp>
    where
        P: ProfileLookup + ?Sized,
    {
        let mut follow_ups: Vec<DetectedFollowUp> = memos
            .iter()
            .filter_map(|memo| self.detect_in_memo(memo, profiles))
            .collect();
        sort_by_recency(&mut follow_ups);

        log::debug!(
            "event=follow_up_detect module=mining status=ok memos={} follow_ups={}",
            memos.len(),
            follow_ups.len()
        );
        follow_ups
    }

    /// Returns the follow-up from the newest qualifying memo.
    pub fn most_recent<P>(&self, memos: &[MemoRecord], profiles: &P) -> Option<DetectedFollowUp>
    where
        P: ProfileLookup + ?Sized,
    {
        self.detect(memos, profiles).into_iter().next()
    }

    /// Detects, filters by recency window and applies the normalized limit.
    pub fn list<P>(
        &self,
        memos: &[MemoRecord],
        profiles: &P,
        query: &FollowUpQuery,
    ) -> Vec<DetectedFollowUp>
    where
        P: ProfileLookup + ?Sized,
    {
        let limit = normalize_follow_up_limit(query.limit) as usize;
        self.detect(memos, profiles)
            .into_iter()
            .filter(|item| query.since_ms.map_or(true, |since| item.created_at >= since))
            .take(limit)
            .collect()
    }

    /// Evaluates one memo. `None` when it carries no commitment language.
    pub fn detect_in_memo<P>(&self, memo: &MemoRecord, profiles: &P) -> Option<DetectedFollowUp>
    where
        P: ProfileLookup + ?Sized,
    {
        let metadata = extract_memo_metadata(&memo.text);
        if metadata.clean_text.is_empty() {
            return None;
        }
        let action = classify_action(&metadata.clean_text)?;

        Some(DetectedFollowUp {
            id: follow_up_id(memo.id),
            memo_id: memo.id,
            contact_name: self.resolve_contact(&metadata, profiles),
            priority: infer_priority(&metadata),
            action: action.phrase().to_string(),
            due_hint: infer_due_hint(&metadata),
            text: metadata.clean_text,
            created_at: memo.created_at,
        })
    }

    fn resolve_contact<P>(&self, metadata: &MemoMetadata, profiles: &P) -> String
    where
        P: ProfileLookup + ?Sized,
    {
        metadata
            .primary_contact()
            .and_then(|contact_id| profiles.display_name(contact_id))
            .unwrap_or_else(|| self.fallback_contact_label.clone())
    }
}

/// Detects follow-ups with default settings, newest first.
pub fn detect_follow_ups<P>(memos: &[MemoRecord], profiles: &P) -> Vec<DetectedFollowUp>
where
    P: ProfileLookup + ?Sized,
{
    FollowUpDetector::new().detect(memos, profiles)
}

/// Returns the newest follow-up with default settings, or `None`.
pub fn get_most_recent_follow_up<P>(memos: &[MemoRecord], profiles: &P) -> Option<DetectedFollowUp>
where
    P: ProfileLookup + ?Sized,
{
    FollowUpDetector::new().most_recent(memos, profiles)
}

/// Deterministic follow-up id for a memo.
pub fn follow_up_id(memo_id: MemoId) -> Uuid {
    Uuid::new_v5(&FOLLOW_UP_NAMESPACE, memo_id.as_bytes())
}

/// Normalizes list limit according to the follow-up listing contract.
pub fn normalize_follow_up_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) | None => FOLLOW_UPS_DEFAULT_LIMIT,
        Some(value) if value > FOLLOW_UPS_LIMIT_MAX => FOLLOW_UPS_LIMIT_MAX,
        Some(value) => value,
    }
}

/// Returns the first action-table row matching `clean_text`.
pub fn classify_action(clean_text: &str) -> Option<FollowUpAction> {
    ACTION_TABLE
        .iter()
        .find(|(_, pattern)| pattern.is_match(clean_text))
        .map(|(action, _)| *action)
}

/// Explicit priority tag first, then urgency words, then time-bound phrasing.
fn infer_priority(metadata: &MemoMetadata) -> FollowUpPriority {
    if let Some(tagged) = metadata
        .primary_priority()
        .and_then(FollowUpPriority::from_tag)
    {
        return tagged;
    }
    let text = metadata.clean_text.as_str();
    if URGENT_RE.is_match(text) {
        FollowUpPriority::High
    } else if TIME_BOUND_RE.is_match(text) || !metadata.due_dates.is_empty() {
        FollowUpPriority::Medium
    } else {
        FollowUpPriority::Low
    }
}

fn infer_due_hint(metadata: &MemoMetadata) -> Option<String> {
    metadata.primary_due().map(str::to_string).or_else(|| {
        TIME_BOUND_RE
            .find(&metadata.clean_text)
            .map(|found| found.as_str().to_lowercase())
    })
}

fn sort_by_recency(items: &mut [DetectedFollowUp]) {
    items.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.memo_id.cmp(&b.memo_id))
    });
}
