//! Session tracking for resolved follow-ups.
//!
//! # Responsibility
//! - Remember which follow-ups the user completed or dismissed.
//! - Filter freshly detected follow-ups down to the pending ones.
//!
//! # Invariants
//! - Tracking is keyed by follow-up id, which is deterministic per memo, so
//!   recomputing detections does not resurrect resolved items.
//! - A follow-up is either completed or dismissed, never both; the latest
//!   call wins.

use crate::mining::follow_up::DetectedFollowUp;
use std::collections::HashSet;
use uuid::Uuid;

/// Caller-owned set of resolved follow-up ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowUpTracker {
    completed: HashSet<Uuid>,
    dismissed: HashSet<Uuid>,
}

impl FollowUpTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one follow-up as done.
    pub fn complete(&mut self, id: Uuid) {
        self.dismissed.remove(&id);
        self.completed.insert(id);
    }

    /// Hides one follow-up without completing it.
    pub fn dismiss(&mut self, id: Uuid) {
        self.completed.remove(&id);
        self.dismissed.insert(id);
    }

    pub fn is_completed(&self, id: Uuid) -> bool {
        self.completed.contains(&id)
    }

    pub fn is_resolved(&self, id: Uuid) -> bool {
        self.completed.contains(&id) || self.dismissed.contains(&id)
    }

    /// Returns unresolved follow-ups, keeping input order.
    pub fn pending(&self, follow_ups: &[DetectedFollowUp]) -> Vec<DetectedFollowUp> {
        follow_ups
            .iter()
            .filter(|item| !self.is_resolved(item.id))
            .cloned()
            .collect()
    }

    /// Forgets every resolution, e.g. on sign-out.
    pub fn reset(&mut self) {
        self.completed.clear();
        self.dismissed.clear();
    }
}
