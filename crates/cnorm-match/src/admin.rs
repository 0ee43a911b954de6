//! Alias dictionary administration.

use cnorm_model::{AliasEntry, Priority};
use cnorm_store::AliasStore;

/// Validated writes to an open alias store.
///
/// Keys are lowercased on the way in, so lookups and deletes are
/// case-insensitive.
pub struct StoreAdmin<'s, S: AliasStore + ?Sized> {
    store: &'s mut S,
}

impl<'s, S: AliasStore + ?Sized> StoreAdmin<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self { store }
    }

    /// Add or replace an alias.
    ///
    /// `priority` is the numeric tier code: `1` for official names,
    /// translations and abbreviations, `2` for capitals, regions and other
    /// indirect references. Returns `false` without touching the store if
    /// the key or value is empty or whitespace-only, or the code is not 1
    /// or 2.
    pub fn add(&mut self, key: &str, value: &str, priority: i64) -> bool {
        let Ok(priority) = Priority::from_code(priority) else {
            tracing::debug!(priority, "Rejected alias with invalid priority");
            return false;
        };
        self.add_entry(key, AliasEntry::new(priority, value))
    }

    /// Add or replace an alias with an already-typed entry.
    ///
    /// Same validation as [`add`](Self::add) for the key and canonical name.
    pub fn add_entry(&mut self, key: &str, entry: AliasEntry) -> bool {
        if key.trim().is_empty() || entry.canonical.trim().is_empty() {
            tracing::debug!("Rejected alias with blank key or value");
            return false;
        }
        let key = key.to_lowercase();
        tracing::debug!(
            key = %key,
            canonical = %entry.canonical,
            priority = %entry.priority,
            "Stored alias"
        );
        self.store.set(key, entry);
        true
    }

    /// Remove an alias. Absent keys are ignored.
    pub fn delete(&mut self, key: &str) {
        let key = key.to_lowercase();
        if self.store.remove(&key).is_some() {
            tracing::debug!(key = %key, "Deleted alias");
        }
    }

    /// Case-insensitive lookup of a stored alias.
    pub fn lookup(&self, key: &str) -> Option<&AliasEntry> {
        self.store.get(&key.to_lowercase())
    }
}
