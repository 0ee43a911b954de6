//! Persistent alias dictionary for country name normalization.
//!
//! The matching engine only sees the [`AliasStore`] trait: a mapping from
//! lowercase alias text to an [`AliasEntry`](cnorm_model::AliasEntry).
//! Two implementations are provided:
//!
//! - [`FileAliasStore`] - durable, JSON file with atomic writes
//! - [`MemoryAliasStore`] - in-memory, for fixed dictionaries and tests
//!
//! # Example
//!
//! ```ignore
//! use cnorm_model::AliasEntry;
//! use cnorm_store::{AliasStore, FileAliasStore};
//!
//! let mut store = FileAliasStore::open_or_create("countries.json")?;
//! store.set("russia".to_string(), AliasEntry::high("Russia"));
//! store.close()?;
//! ```

mod error;
mod file;
mod store;

pub use error::{Result, StoreError};
pub use file::{CURRENT_FORMAT_VERSION, FileAliasStore};
pub use store::{AliasStore, MemoryAliasStore};
