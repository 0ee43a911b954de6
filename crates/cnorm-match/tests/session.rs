mod common;

use std::path::Path;

use anyhow::Result;
use cnorm_match::{
    MatchConfig, MatchOutcome, NormalizerSession, Priority, StoreError, match_country_name_at,
    with_session,
};
use common::{init_tracing, sample_entries};
use tempfile::tempdir;

/// Seed a durable store at `path` with the sample dictionary.
fn seed(path: &Path) -> Result<()> {
    let mut session = NormalizerSession::create(path, MatchConfig::default())?;
    for (key, entry) in sample_entries() {
        assert!(session.admin().add_entry(key, entry));
    }
    session.close()?;
    Ok(())
}

#[test]
fn added_alias_matches_after_reopen() -> Result<()> {
    init_tracing();
    let dir = tempdir()?;
    let path = dir.path().join("countries.json");
    seed(&path)?;

    let added = with_session(&path, MatchConfig::default(), |session| {
        session.add_alias("SpecialForTest", "SpecialForTest", 1)
    })?;
    assert!(added);

    let outcome = match_country_name_at(&path, "SpecialForTest", 0.7)?;
    assert_eq!(outcome, MatchOutcome::Matched("SpecialForTest".to_string()));
    Ok(())
}

#[test]
fn deleted_alias_is_not_found() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("countries.json");
    seed(&path)?;

    with_session(&path, MatchConfig::default(), |session| {
        assert!(session.add_alias("SpecialForTest", "SpecialForTest", 2));
        session.delete_alias("SPECIALFORTEST");
    })?;

    let outcome = match_country_name_at(&path, "SpecialForTest", 0.7)?;
    assert_eq!(outcome, MatchOutcome::NotFound);
    Ok(())
}

#[test]
fn deleting_absent_alias_is_silent() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("countries.json");
    seed(&path)?;

    let mut session = NormalizerSession::open(&path, MatchConfig::default())?;
    session.delete_alias("SpecialForTest");
    assert_eq!(
        session.match_country_name("SpecialForTest"),
        MatchOutcome::NotFound
    );
    session.close()?;
    Ok(())
}

#[test]
fn rejected_add_leaves_store_unchanged() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("countries.json");
    seed(&path)?;
    let before = std::fs::read_to_string(&path)?;

    with_session(&path, MatchConfig::default(), |session| {
        for priority in [3, -5, 0] {
            assert!(!session.add_alias("SpecialForTest", "SpecialForTest", priority));
        }
        assert!(!session.add_alias("", "SpecialForTest", 1));
        assert!(!session.add_alias("SpecialForTest", "", 1));
        assert!(session.lookup_alias("SpecialForTest").is_none());
    })?;

    assert_eq!(std::fs::read_to_string(&path)?, before);
    Ok(())
}

#[test]
fn priority_is_stored_separately_from_name() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("countries.json");
    seed(&path)?;

    let session = NormalizerSession::open(&path, MatchConfig::default())?;
    let entry = session.lookup_alias("Moscow").expect("seeded alias");
    assert_eq!(entry.priority, Priority::Low);
    assert_eq!(entry.canonical, "Russia");
    session.close()?;

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(raw["aliases"]["moscow"]["priority"], 2);
    assert_eq!(raw["aliases"]["moscow"]["canonical"], "Russia");
    Ok(())
}

#[test]
fn session_uses_configured_default_accuracy() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("countries.json");
    seed(&path)?;

    let strict = MatchConfig::default().with_default_accuracy(0.9);
    let session = NormalizerSession::open(&path, strict)?;
    assert_eq!(session.match_country_name("Rassia"), MatchOutcome::NotFound);
    assert_eq!(
        session.match_country_name_with("Rassia", 0.7),
        MatchOutcome::Matched("Russia".to_string())
    );
    session.close()?;
    Ok(())
}

#[test]
fn flush_persists_mid_session() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("countries.json");
    seed(&path)?;

    let mut session = NormalizerSession::open(&path, MatchConfig::default())?;
    assert!(session.add_alias("Kyiv", "Ukraine", 2));
    session.flush()?;

    let outcome = match_country_name_at(&path, "Kiyv", 0.7)?;
    assert_eq!(outcome, MatchOutcome::Matched("Ukraine".to_string()));
    session.close()?;
    Ok(())
}

#[test]
fn missing_store_is_fatal() {
    let dir = tempdir().unwrap();
    let result = match_country_name_at(dir.path().join("absent.json"), "Russia", 0.7);
    assert!(matches!(result, Err(StoreError::Missing { .. })));
}

#[test]
fn invalid_arguments_do_not_touch_the_store() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("countries.json");
    seed(&path)?;

    assert_eq!(
        match_country_name_at(&path, "Russia", 3.0)?,
        MatchOutcome::InvalidInput
    );
    assert_eq!(
        match_country_name_at(&path, "", 0.7)?,
        MatchOutcome::InvalidInput
    );
    Ok(())
}
