#![allow(dead_code)]

use cnorm_match::{AliasEntry, MemoryAliasStore};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// A small dictionary with official names (high) and capitals (low).
pub fn sample_entries() -> Vec<(&'static str, AliasEntry)> {
    vec![
        ("russia", AliasEntry::high("Russia")),
        ("rf", AliasEntry::high("Russia")),
        ("usa", AliasEntry::high("United States")),
        ("united states", AliasEntry::high("United States")),
        ("united states of america", AliasEntry::high("United States")),
        ("france", AliasEntry::high("France")),
        ("germany", AliasEntry::high("Germany")),
        ("united kingdom", AliasEntry::high("United Kingdom")),
        ("uk", AliasEntry::high("United Kingdom")),
        ("moscow", AliasEntry::low("Russia")),
        ("paris", AliasEntry::low("France")),
        ("berlin", AliasEntry::low("Germany")),
        ("london", AliasEntry::low("United Kingdom")),
        ("washington", AliasEntry::low("United States")),
    ]
}

pub fn sample_store() -> MemoryAliasStore {
    sample_entries().into_iter().collect()
}
