//! Scoped access to a durable alias store.
//!
//! A session opens the store, serves queries and edits, and closes it.
//! [`with_session`] guarantees the close on every exit path; a session
//! dropped without [`NormalizerSession::close`] still flushes through the
//! store's drop, but write failures are then only logged.

use std::path::{Path, PathBuf};

use cnorm_model::{AliasEntry, MatchOutcome};
use cnorm_store::{AliasStore, FileAliasStore, StoreError};

use crate::admin::StoreAdmin;
use crate::config::MatchConfig;
use crate::engine::MatchEngine;

/// An open alias store together with the matcher settings used against it.
#[derive(Debug)]
pub struct NormalizerSession {
    store: FileAliasStore,
    config: MatchConfig,
}

impl NormalizerSession {
    /// Open an existing store.
    pub fn open(path: impl Into<PathBuf>, config: MatchConfig) -> Result<Self, StoreError> {
        Ok(Self {
            store: FileAliasStore::open(path)?,
            config,
        })
    }

    /// Create a new, empty store.
    pub fn create(path: impl Into<PathBuf>, config: MatchConfig) -> Result<Self, StoreError> {
        Ok(Self {
            store: FileAliasStore::create(path)?,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn engine(&self) -> MatchEngine<'_, FileAliasStore> {
        MatchEngine::new(&self.store, self.config.clone())
    }

    pub fn admin(&mut self) -> StoreAdmin<'_, FileAliasStore> {
        StoreAdmin::new(&mut self.store)
    }

    /// Match using the configured default accuracy.
    pub fn match_country_name(&self, text: &str) -> MatchOutcome {
        self.engine().match_default(text)
    }

    pub fn match_country_name_with(&self, text: &str, accuracy: f64) -> MatchOutcome {
        self.engine().match_country_name(text, accuracy)
    }

    /// See [`StoreAdmin::add`].
    pub fn add_alias(&mut self, key: &str, value: &str, priority: i64) -> bool {
        self.admin().add(key, value, priority)
    }

    /// See [`StoreAdmin::delete`].
    pub fn delete_alias(&mut self, key: &str) {
        self.admin().delete(key);
    }

    pub fn lookup_alias(&self, key: &str) -> Option<&AliasEntry> {
        self.store.get(&key.to_lowercase())
    }

    /// Persist pending edits without ending the session.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        self.store.flush()
    }

    /// Flush pending edits and release the store.
    pub fn close(self) -> Result<(), StoreError> {
        self.store.close()
    }
}

/// Run `f` against the store at `path`, closing it afterwards.
///
/// A failure to open or to close the store is returned; the closure's own
/// result is passed through on success.
pub fn with_session<T, F>(
    path: impl Into<PathBuf>,
    config: MatchConfig,
    f: F,
) -> Result<T, StoreError>
where
    F: FnOnce(&mut NormalizerSession) -> T,
{
    let mut session = NormalizerSession::open(path, config)?;
    let output = f(&mut session);
    session.close()?;
    Ok(output)
}

/// Open the store at `path`, run a single query, and close it.
pub fn match_country_name_at(
    path: impl Into<PathBuf>,
    text: &str,
    accuracy: f64,
) -> Result<MatchOutcome, StoreError> {
    with_session(path, MatchConfig::default(), |session| {
        session.match_country_name_with(text, accuracy)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn session_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("countries.json");

        let mut session = NormalizerSession::create(&path, MatchConfig::default()).unwrap();
        assert!(session.add_alias("Russia", "Russia", 1));
        assert_eq!(
            session.match_country_name("russia"),
            MatchOutcome::Matched("Russia".to_string())
        );
        session.close().unwrap();

        let outcome = match_country_name_at(&path, "RUSSIA", 0.7).unwrap();
        assert_eq!(outcome, MatchOutcome::Matched("Russia".to_string()));
    }

    #[test]
    fn with_session_fails_on_missing_store() {
        let dir = tempdir().unwrap();
        let result = with_session(dir.path().join("absent.json"), MatchConfig::default(), |_| ());
        assert!(matches!(result, Err(StoreError::Missing { .. })));
    }
}
