//! Tests for cnorm-model types.

use cnorm_model::{AliasEntry, InvalidQuery, MatchCandidate, MatchOutcome, Priority};

#[test]
fn alias_entry_serializes_priority_code() {
    let entry = AliasEntry::high("Russia");
    let json = serde_json::to_string(&entry).expect("serialize entry");
    assert_eq!(json, r#"{"priority":1,"canonical":"Russia"}"#);

    let round: AliasEntry = serde_json::from_str(&json).expect("deserialize entry");
    assert_eq!(round, entry);
}

#[test]
fn alias_entry_rejects_unknown_priority() {
    let result = serde_json::from_str::<AliasEntry>(r#"{"priority":3,"canonical":"Russia"}"#);
    assert!(result.is_err());
}

#[test]
fn candidate_copies_entry_fields() {
    let entry = AliasEntry::low("France");
    let candidate = MatchCandidate::new("paris", &entry, 0.9);
    assert_eq!(candidate.key, "paris");
    assert_eq!(candidate.priority, Priority::Low);
    assert_eq!(candidate.canonical, "France");
}

#[test]
fn outcome_accessors() {
    let matched = MatchOutcome::Matched("Russia".to_string());
    assert!(matched.is_match());
    assert_eq!(matched.canonical(), Some("Russia"));

    assert!(!MatchOutcome::NotFound.is_match());
    assert_eq!(MatchOutcome::InvalidInput.canonical(), None);
}

#[test]
fn invalid_query_messages() {
    assert_eq!(InvalidQuery::EmptyText.to_string(), "query text is empty");
    assert!(
        InvalidQuery::AccuracyOutOfRange(3.0)
            .to_string()
            .contains("strictly between 0 and 1")
    );
}
