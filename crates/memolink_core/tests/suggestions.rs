use memolink_core::{RelationshipProfile, SuggestionReconciler, SuggestionState};

fn names(state: &SuggestionState) -> Vec<String> {
    state
        .suggestions
        .iter()
        .map(|person| person.full_name.clone())
        .collect()
}

#[test]
fn dismissed_names_do_not_reappear() {
    let mut state = SuggestionState::new();
    {
        let mut reconciler = SuggestionReconciler::new(&mut state);
        let list = reconciler.analyze_text_for_people("Met with John Smith about the project", &[]);
        assert_eq!(list.len(), 1);

        reconciler.dismiss_suggestion("John Smith");
        assert!(reconciler.suggestions().is_empty());

        let list = reconciler.analyze_text_for_people("John Smith said hello", &[]);
        assert!(list.is_empty());
        assert!(reconciler.is_dismissed("john smith"));
    }
    assert!(state.dismissed.contains("JOHN SMITH"));
}

#[test]
fn accepted_names_may_reappear() {
    let mut state = SuggestionState::new();
    let mut reconciler = SuggestionReconciler::new(&mut state);
    reconciler.analyze_text_for_people("Met with John Smith about the project", &[]);

    let accepted = reconciler
        .accept_suggestion("john smith")
        .expect("suggestion should be returned on accept");
    assert_eq!(accepted.full_name, "John Smith");
    assert!(reconciler.suggestions().is_empty());
    assert!(!reconciler.is_dismissed("John Smith"));

    let list = reconciler.analyze_text_for_people("Talked to John Smith again", &[]);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].full_name, "John Smith");
}

#[test]
fn roster_members_are_excluded_case_insensitively() {
    let roster = vec![RelationshipProfile::new("p1", "john", "smith")];
    let mut state = SuggestionState::new();
    let mut reconciler = SuggestionReconciler::new(&mut state);

    let list = reconciler.analyze_text_for_people(
        "Met with John Smith and later spoke with Anna Bell",
        &roster,
    );
    let found: Vec<&str> = list.iter().map(|p| p.full_name.as_str()).collect();
    assert_eq!(found, vec!["Anna Bell"]);
}

#[test]
fn merge_is_append_only_and_keeps_first_context() {
    let mut state = SuggestionState::new();
    {
        let mut reconciler = SuggestionReconciler::new(&mut state);
        reconciler.analyze_text_for_people("Met with Anna Bell at work", &[]);
        reconciler.analyze_text_for_people("Anna Bell said dinner was great. Tom Hardy too", &[]);
    }

    assert_eq!(names(&state), vec!["Anna Bell", "Tom Hardy"]);
    assert_eq!(state.suggestions[0].context, "Met with Anna Bell at work");
}

#[test]
fn clear_keeps_dismissals() {
    let mut state = SuggestionState::new();
    {
        let mut reconciler = SuggestionReconciler::new(&mut state);
        reconciler.dismiss_suggestion("Tom Hardy");
        reconciler.analyze_text_for_people("Spoke with Tom Hardy and Anna Bell", &[]);
        assert_eq!(reconciler.suggestions().len(), 1);

        reconciler.clear_all_suggestions();
        assert!(reconciler.suggestions().is_empty());

        reconciler.analyze_text_for_people("Spoke with Tom Hardy and Anna Bell", &[]);
    }

    assert_eq!(names(&state), vec!["Anna Bell"]);
    assert_eq!(state.dismissed.len(), 1);
}

#[test]
fn sessions_do_not_share_dismissals() {
    let mut first = SuggestionState::new();
    SuggestionReconciler::new(&mut first).dismiss_suggestion("John Smith");

    let mut second = SuggestionState::new();
    let mut reconciler = SuggestionReconciler::new(&mut second);
    let list = reconciler.analyze_text_for_people("met with John Smith", &[]);
    assert_eq!(list.len(), 1);
}

#[test]
fn unknown_names_are_ignored_by_accept_and_dismiss() {
    let mut state = SuggestionState::new();
    let mut reconciler = SuggestionReconciler::new(&mut state);
    reconciler.analyze_text_for_people("met with John Smith", &[]);

    assert!(reconciler.accept_suggestion("Jane Doe").is_none());
    reconciler.dismiss_suggestion("Jane Doe");
    assert_eq!(reconciler.suggestions().len(), 1);
}
