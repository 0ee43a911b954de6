//! Priority tiers for alias entries.
//!
//! Aliases are split into two tiers. Official names, translations and
//! abbreviations are `High`; indirect references such as capitals or
//! regions are `Low`. When the best whole-string match is a `High` alias it
//! is accepted before any `Low` one is considered, and token votes are cast
//! over `High` aliases first.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidPriority;

/// Priority tier of an alias entry.
///
/// Serialized as its numeric code (`1` or `2`) so stored files stay
/// compatible with dictionaries populated by other tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    /// Official name, translation or abbreviation (code `1`).
    High,
    /// Capital, state, region or other indirect reference (code `2`).
    Low,
}

impl Priority {
    /// Both tiers, strongest first.
    pub const ALL: [Priority; 2] = [Priority::High, Priority::Low];

    /// Returns the numeric code used in stored dictionaries.
    pub fn code(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Low => 2,
        }
    }

    /// Parses a numeric code. Only `1` and `2` are valid.
    pub fn from_code(code: i64) -> Result<Self, InvalidPriority> {
        match code {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Low),
            other => Err(InvalidPriority(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<u8> for Priority {
    type Error = InvalidPriority;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Priority::from_code(i64::from(code))
    }
}

impl TryFrom<i64> for Priority {
    type Error = InvalidPriority;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Priority::from_code(code)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.code()
    }
}
