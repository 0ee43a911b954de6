//! Fuzzy normalization of free-form country names.
//!
//! Free text such as `"Paris, USA"` or `"Russian Federation"` is resolved to
//! a canonical country name by approximate matching against an alias
//! dictionary.
//!
//! # Architecture
//!
//! - `normalize` - lowercasing, punctuation stripping, tokenization
//! - `search` - ratio-based similarity search over alias keys
//! - `engine` - the tiered search pipeline and token voting
//! - `admin` - validated alias edits
//! - `session` - scoped open/close of a durable store
//! - `config` - tunable matcher parameters
//!
//! # Example
//!
//! ```ignore
//! use cnorm_match::{MatchConfig, with_session};
//!
//! let outcome = with_session("countries.json", MatchConfig::default(), |session| {
//!     session.add_alias("Russia", "Russia", 1);
//!     session.match_country_name("Rassia")
//! })?;
//! assert_eq!(outcome.canonical(), Some("Russia"));
//! ```

#![deny(unsafe_code)]

pub mod admin;
pub mod config;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod search;
pub mod session;

pub use admin::StoreAdmin;
pub use config::MatchConfig;
pub use engine::{
    MatchEngine, QueryForm, Resolution, SEARCH_ORDER, SearchScope, SearchStrategy, validate_query,
};
pub use error::ConfigError;
pub use normalize::normalize;
pub use search::{ScoredKey, best_matches, similarity};
pub use session::{NormalizerSession, match_country_name_at, with_session};

pub use cnorm_model::{AliasEntry, InvalidQuery, MatchCandidate, MatchOutcome, Priority};
pub use cnorm_store::{AliasStore, FileAliasStore, MemoryAliasStore, StoreError};
