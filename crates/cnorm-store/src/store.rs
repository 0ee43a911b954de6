//! The alias store abstraction and its in-memory implementation.

use std::collections::BTreeMap;

use cnorm_model::AliasEntry;

/// A mapping from lowercase alias text to a priority-tagged canonical name.
///
/// Keys are iterated in ascending order so every search over the store is
/// deterministic.
pub trait AliasStore {
    fn get(&self, key: &str) -> Option<&AliasEntry>;

    /// Insert or replace the entry for `key`.
    fn set(&mut self, key: String, entry: AliasEntry);

    fn remove(&mut self, key: &str) -> Option<AliasEntry>;

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Non-durable store for fixed dictionaries and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryAliasStore {
    aliases: BTreeMap<String, AliasEntry>,
}

impl MemoryAliasStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Into<String>> FromIterator<(K, AliasEntry)> for MemoryAliasStore {
    fn from_iter<I: IntoIterator<Item = (K, AliasEntry)>>(iter: I) -> Self {
        Self {
            aliases: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl AliasStore for MemoryAliasStore {
    fn get(&self, key: &str) -> Option<&AliasEntry> {
        self.aliases.get(key)
    }

    fn set(&mut self, key: String, entry: AliasEntry) {
        self.aliases.insert(key, entry);
    }

    fn remove(&mut self, key: &str) -> Option<AliasEntry> {
        self.aliases.remove(key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.aliases.keys().map(String::as_str))
    }

    fn len(&self) -> usize {
        self.aliases.len()
    }
}
