use memolink_core::{
    detect_follow_ups, follow_up_id, get_most_recent_follow_up, FollowUpDetector,
    FollowUpPriority, FollowUpQuery, FollowUpSettings, MemoRecord, MemoType, RelationshipProfile,
};
use uuid::Uuid;

fn memo(n: u128, text: &str, created_at: i64) -> MemoRecord {
    MemoRecord::with_id(Uuid::from_u128(n), MemoType::Note, text, created_at)
}

fn roster() -> Vec<RelationshipProfile> {
    vec![
        RelationshipProfile::new("c1", "Ann", "Lee"),
        RelationshipProfile::new("c2", "Bob", "Stone"),
    ]
}

fn single(text: &str) -> memolink_core::DetectedFollowUp {
    let memos = vec![memo(1, text, 1_000)];
    detect_follow_ups(&memos, &roster())
        .into_iter()
        .next()
        .expect("follow-up should be detected")
}

#[test]
fn most_recent_follow_up_comes_from_newest_memo() {
    let memos = vec![
        memo(1, "Call [Contact: c1] about the invoice", 1_000),
        memo(2, "Need to email [Contact: c2] the slides", 2_000),
    ];

    let recent = get_most_recent_follow_up(&memos, &roster()).expect("follow-up expected");
    assert_eq!(recent.memo_id, Uuid::from_u128(2));
    assert_eq!(recent.contact_name, "Bob Stone");
    assert_eq!(recent.text, "Need to email the slides");
    assert_eq!(recent.action, "Send a message");
    assert_eq!(recent.created_at, 2_000);
}

#[test]
fn results_sort_newest_first_with_memo_id_tiebreak() {
    let memos = vec![
        memo(3, "call the dentist", 1_000),
        memo(2, "call the vet", 5_000),
        memo(1, "call the bank", 5_000),
    ];

    let ids: Vec<Uuid> = detect_follow_ups(&memos, &roster())
        .into_iter()
        .map(|item| item.memo_id)
        .collect();
    assert_eq!(
        ids,
        vec![Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(3)]
    );
}

#[test]
fn empty_collection_yields_nothing() {
    let memos: Vec<MemoRecord> = Vec::new();
    assert!(detect_follow_ups(&memos, &roster()).is_empty());
    assert!(get_most_recent_follow_up(&memos, &roster()).is_none());
}

#[test]
fn memos_without_action_language_are_skipped() {
    let memos = vec![
        memo(1, "Lovely sunset tonight", 1_000),
        memo(2, "[Contact: c1]", 2_000),
    ];
    assert!(detect_follow_ups(&memos, &roster()).is_empty());
}

#[test]
fn priority_tag_overrides_heuristics() {
    let item = single("[priority: low] Call Dana urgently");
    assert_eq!(item.priority, FollowUpPriority::Low);
    assert_eq!(item.action, "Call");
}

#[test]
fn unknown_priority_tag_falls_back_to_heuristics() {
    let item = single("[priority: someday] Call the plumber asap");
    assert_eq!(item.priority, FollowUpPriority::High);
}

#[test]
fn urgency_words_beat_time_bound_phrasing() {
    let item = single("Need to call the bank today, not tomorrow");
    assert_eq!(item.priority, FollowUpPriority::High);
    assert_eq!(item.action, "Call");
}

#[test]
fn time_bound_phrasing_is_medium_with_due_hint() {
    let item = single("Send the draft by Friday");
    assert_eq!(item.priority, FollowUpPriority::Medium);
    assert_eq!(item.action, "Send");
    assert_eq!(item.due_hint.as_deref(), Some("by friday"));
}

#[test]
fn due_tag_is_medium_and_wins_due_hint() {
    let item = single("[due: March 3] Follow up on the quote before Monday");
    assert_eq!(item.priority, FollowUpPriority::Medium);
    assert_eq!(item.action, "Follow up");
    assert_eq!(item.due_hint.as_deref(), Some("March 3"));
}

#[test]
fn general_commitment_is_low() {
    let item = single("Share the photos with the group");
    assert_eq!(item.priority, FollowUpPriority::Low);
    assert_eq!(item.due_hint, None);
}

#[test]
fn missing_or_unknown_contact_uses_fallback_label() {
    let memos = vec![
        memo(1, "call the bank", 2_000),
        memo(2, "[Contact: c9] call back", 1_000),
    ];
    let items = detect_follow_ups(&memos, &roster());
    assert_eq!(items.len(), 2);
    assert!(items
        .iter()
        .all(|item| item.contact_name == "Unknown contact"));

    let detector = FollowUpDetector::with_settings(&FollowUpSettings {
        fallback_contact_label: "Someone".to_string(),
    });
    let custom = detector.detect(&memos, roster().as_slice());
    assert_eq!(custom[0].contact_name, "Someone");
}

#[test]
fn follow_up_ids_are_deterministic_per_memo() {
    let memos = vec![
        memo(1, "call the bank", 1_000),
        memo(2, "call the vet", 2_000),
    ];
    let first = detect_follow_ups(&memos, &roster());
    let second = detect_follow_ups(&memos, &roster());

    assert_eq!(first, second);
    assert_eq!(first[0].id, follow_up_id(Uuid::from_u128(2)));
    assert_ne!(first[0].id, first[1].id);
}

#[test]
fn list_applies_recency_window_and_limit() {
    let memos: Vec<MemoRecord> = (1..=5)
        .map(|n| memo(n, "call the office", n as i64 * 1_000))
        .collect();
    let detector = FollowUpDetector::new();

    let recent = detector.list(
        &memos,
        roster().as_slice(),
        &FollowUpQuery {
            since_ms: Some(3_000),
            limit: None,
        },
    );
    let times: Vec<i64> = recent.iter().map(|item| item.created_at).collect();
    assert_eq!(times, vec![5_000, 4_000, 3_000]);

    let limited = detector.list(
        &memos,
        roster().as_slice(),
        &FollowUpQuery {
            since_ms: None,
            limit: Some(2),
        },
    );
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].created_at, 5_000);
}

#[test]
fn completed_memos_are_not_filtered_by_the_core() {
    let mut done = memo(1, "call the bank", 1_000);
    done.completed = true;
    assert_eq!(detect_follow_ups(&[done], &roster()).len(), 1);
}

#[test]
fn meeting_cues_map_to_schedule_a_meeting() {
    let item = single("Grab coffee with [Contact: c1] next week");
    assert_eq!(item.action, "Schedule a meeting");
    assert_eq!(item.contact_name, "Ann Lee");
    assert_eq!(item.priority, FollowUpPriority::Medium);
    assert_eq!(item.due_hint.as_deref(), Some("next week"));
}

#[test]
fn check_in_cues_map_to_check_in() {
    let item = single("Reach out to [Contact: c2] about the move");
    assert_eq!(item.action, "Check in");
    assert_eq!(item.contact_name, "Bob Stone");
    assert_eq!(item.priority, FollowUpPriority::Low);
}

#[test]
fn general_obligations_map_to_complete_commitment() {
    let item = single("Remember to water the plants");
    assert_eq!(item.action, "Complete commitment");

    let item = single("don’t forget the keys");
    assert_eq!(item.action, "Complete commitment");
}

#[test]
fn commitment_loses_only_to_a_present_earlier_cue() {
    assert_eq!(single("Have to renew the passport").action, "Complete commitment");
    assert_eq!(single("Have to schedule the passport photo").action, "Schedule a meeting");
}

#[test]
fn by_without_a_deadline_word_is_not_time_bound() {
    for text in [
        "Send the report by email",
        "Need to drop by the office",
        "Call mom, stand by me",
    ] {
        let item = single(text);
        assert_eq!(item.priority, FollowUpPriority::Low, "priority for `{text}`");
        assert_eq!(item.due_hint, None, "due hint for `{text}`");
    }
}

#[test]
fn by_with_a_deadline_word_is_time_bound() {
    let item = single("Share the deck by end of week");
    assert_eq!(item.priority, FollowUpPriority::Medium);
    assert_eq!(item.due_hint.as_deref(), Some("by end of week"));

    let item = single("Forward the invoice by noon");
    assert_eq!(item.due_hint.as_deref(), Some("by noon"));
}
