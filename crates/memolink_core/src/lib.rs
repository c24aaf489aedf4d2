//! Core text-mining logic for MemoLink.
//! This crate turns raw memo text into structured annotations: inline tags,
//! mentioned people, follow-up commitments and person suggestions.

pub mod config;
pub mod logging;
pub mod mining;
pub mod model;
pub mod service;

pub use config::{
    CategoryKeywords, ConfigError, ConfigResult, FollowUpSettings, KeywordSettings, MiningConfig,
};
pub use logging::{default_log_level, init_logging, logging_status, LogSink, LoggingSettings};
pub use mining::follow_up::{
    detect_follow_ups, follow_up_id, get_most_recent_follow_up, DetectedFollowUp,
    FollowUpAction, FollowUpDetector, FollowUpPriority, FollowUpQuery,
};
pub use mining::keywords::{extract_keywords, extract_keywords_with_limit};
pub use mining::metadata::{extract_memo_metadata, strip_tags, MemoMetadata};
pub use mining::people::{
    detect_people_in_text, DetectedPerson, PersonCategory, PersonDetector, RegexPersonDetector,
};
pub use model::memo::{MemoId, MemoRecord, MemoType};
pub use model::profile::{ProfileLookup, RelationshipProfile};
pub use service::follow_up_service::FollowUpTracker;
pub use service::suggestion_service::{DismissedNames, SuggestionReconciler, SuggestionState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
