//! Person suggestion reconciliation.
//!
//! # Responsibility
//! - Turn detected people into a pending suggestion list.
//! - Suppress people already on the roster or previously dismissed.
//!
//! # Invariants
//! - Name comparisons are case-insensitive.
//! - The suggestion list is append-only during analysis; existing entries
//!   are never replaced.
//! - Dismissals last for the life of the owning `SuggestionState`; accepting
//!   or clearing never touches them.

use crate::mining::people::{DetectedPerson, PersonDetector, RegexPersonDetector};
use crate::model::profile::RelationshipProfile;
use std::collections::HashSet;

/// Lower-cased full names the user rejected during this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DismissedNames {
    names: HashSet<String>,
}

impl DismissedNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a dismissal. Returns `false` when the name was already dismissed.
    pub fn insert(&mut self, full_name: &str) -> bool {
        self.names.insert(normalize_name(full_name))
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.names.contains(&normalize_name(full_name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Caller-owned session state for suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    pub suggestions: Vec<DetectedPerson>,
    pub dismissed: DismissedNames,
}

impl SuggestionState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Reconciles detector output against the roster and session state.
///
/// Borrows the state mutably, so concurrent writers are ruled out at compile
/// time.
pub struct SuggestionReconciler<'session, D: PersonDetector = RegexPersonDetector> {
    detector: D,
    state: &'session mut SuggestionState,
}

impl<'session> SuggestionReconciler<'session, RegexPersonDetector> {
    /// Creates a reconciler using the default regex detector.
    pub fn new(state: &'session mut SuggestionState) -> Self {
        Self::with_detector(RegexPersonDetector::new(), state)
    }
}

impl<'session, D: PersonDetector> SuggestionReconciler<'session, D> {
    /// Creates a reconciler with a caller-provided detection strategy.
    pub fn with_detector(detector: D, state: &'session mut SuggestionState) -> Self {
        Self { detector, state }
    }

    /// Detects people in `text` and merges new ones into the suggestion list.
    ///
    /// Returns the full list after merging.
    pub fn analyze_text_for_people(
        &mut self,
        text: &str,
        roster: &[RelationshipProfile],
    ) -> &[DetectedPerson] {
        let known: HashSet<String> = roster
            .iter()
            .map(|profile| normalize_name(&profile.full_name()))
            .collect();
        let mut present: HashSet<String> = self
            .state
            .suggestions
            .iter()
            .map(|person| normalize_name(&person.full_name))
            .collect();

        let detected = self.detector.detect(text);
        let detected_count = detected.len();
        let mut added = 0usize;
        for person in detected {
            let key = normalize_name(&person.full_name);
            if known.contains(&key) || self.state.dismissed.contains(&key) {
                continue;
            }
            if present.insert(key) {
                self.state.suggestions.push(person);
                added += 1;
            }
        }

        log::debug!(
            "event=suggestions_analyze module=service status=ok detected={} added={} total={}",
            detected_count,
            added,
            self.state.suggestions.len()
        );
        &self.state.suggestions
    }

    /// Removes `full_name` from the list and dismisses it for the session.
    pub fn dismiss_suggestion(&mut self, full_name: &str) {
        self.remove(full_name);
        self.state.dismissed.insert(full_name);
    }

    /// Removes `full_name` from the list without dismissing it.
    ///
    /// Returns the removed entry so the caller can turn it into a profile.
    pub fn accept_suggestion(&mut self, full_name: &str) -> Option<DetectedPerson> {
        self.remove(full_name)
    }

    /// Empties the list. Dismissals are kept.
    pub fn clear_all_suggestions(&mut self) {
        self.state.suggestions.clear();
    }

    pub fn suggestions(&self) -> &[DetectedPerson] {
        &self.state.suggestions
    }

    pub fn is_dismissed(&self, full_name: &str) -> bool {
        self.state.dismissed.contains(full_name)
    }

    fn remove(&mut self, full_name: &str) -> Option<DetectedPerson> {
        let key = normalize_name(full_name);
        let index = self
            .state
            .suggestions
            .iter()
            .position(|person| normalize_name(&person.full_name) == key)?;
        Some(self.state.suggestions.remove(index))
    }
}

fn normalize_name(value: &str) -> String {
    value.trim().to_lowercase()
}
