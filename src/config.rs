//! Matcher configuration loading.
//!
//! A matcher is configured from a JSON file holding its two gate distances:
//!
//! ```json
//! { "max_match_distance": 2.5, "bound_match_distance": 4.0 }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{MatcherError, Result};

/// Where to find a matcher's config file.
#[derive(Debug, Clone, Default)]
pub struct MatcherInitOptions {
    /// Directory holding the config file.
    pub config_path: PathBuf,
    /// File name, relative to `config_path`.
    pub config_file: String,
}

impl MatcherInitOptions {
    pub fn new(config_path: impl Into<PathBuf>, config_file: impl Into<String>) -> Self {
        Self {
            config_path: config_path.into(),
            config_file: config_file.into(),
        }
    }

    /// Full path of the config file.
    pub fn config_file_path(&self) -> PathBuf {
        self.config_path.join(&self.config_file)
    }
}

/// Gate distances for the gated Hungarian matcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatcherConfig {
    /// Pairs whose association cost is not below this are never matched.
    pub max_match_distance: f64,
    /// Cost charged for an infeasible pair inside a connected component.
    pub bound_match_distance: f64,
}

impl MatcherConfig {
    pub fn new(max_match_distance: f64, bound_match_distance: f64) -> Self {
        Self {
            max_match_distance,
            bound_match_distance,
        }
    }

    /// Load and validate a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::ConfigRead`] if the file cannot be read,
    /// [`MatcherError::ConfigParse`] if the JSON is malformed or a field is
    /// missing, and [`MatcherError::InvalidConfig`] if validation fails.
    pub fn from_json(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| MatcherError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: MatcherConfig =
            serde_json::from_str(&contents).map_err(|source| MatcherError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Both distances must be finite. A bound below the max distance is
    /// accepted but logged, since it lets infeasible pairs undercut feasible
    /// ones inside a component.
    pub fn validate(&self) -> Result<()> {
        if !self.max_match_distance.is_finite() {
            return Err(MatcherError::invalid_config(
                "max_match_distance",
                format!("must be finite, got {}", self.max_match_distance),
            ));
        }
        if !self.bound_match_distance.is_finite() {
            return Err(MatcherError::invalid_config(
                "bound_match_distance",
                format!("must be finite, got {}", self.bound_match_distance),
            ));
        }
        if self.bound_match_distance < self.max_match_distance {
            warn!(
                max_match_distance = self.max_match_distance,
                bound_match_distance = self.bound_match_distance,
                "bound match distance is below max match distance"
            );
        }
        Ok(())
    }
}
