//! Matcher configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunable parameters of the matching pipeline.
///
/// Fields missing from a config file take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Accuracy used when the caller does not pass one (default: 0.7).
    pub default_accuracy: f64,

    /// Maximum length difference, in characters, between a whole-string
    /// query and the matched key (default: 1).
    ///
    /// Rejects matches where only the beginning or some other part of the
    /// query coincided with a short key. `None` disables the check.
    pub length_tolerance: Option<usize>,

    /// Number of candidates considered per token in token-wise search
    /// (default: 3).
    pub token_candidates: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            default_accuracy: 0.7,
            length_tolerance: Some(1),
            token_candidates: 3,
        }
    }
}

impl MatchConfig {
    /// Load a config from a JSON file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.default_accuracy > 0.0 && self.default_accuracy < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "default_accuracy {} must lie strictly between 0 and 1",
                self.default_accuracy
            )));
        }
        if self.token_candidates == 0 {
            return Err(ConfigError::Invalid(
                "token_candidates must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_default_accuracy(mut self, accuracy: f64) -> Self {
        self.default_accuracy = accuracy;
        self
    }

    #[must_use]
    pub fn with_length_tolerance(mut self, tolerance: Option<usize>) -> Self {
        self.length_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_token_candidates(mut self, count: usize) -> Self {
        self.token_candidates = count;
        self
    }
}
