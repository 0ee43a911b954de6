pub mod alias;
pub mod error;
pub mod priority;

pub use alias::{AliasEntry, MatchCandidate, MatchOutcome};
pub use error::{InvalidPriority, InvalidQuery};
pub use priority::Priority;
