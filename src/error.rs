//! Error types for matcher configuration and construction.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient `Result` alias used across the crate.
pub type Result<T> = std::result::Result<T, MatcherError>;

/// Errors raised while setting up a matcher.
///
/// Matching itself never fails: these only come out of initialization
/// and registry lookups.
#[derive(Debug, Error)]
pub enum MatcherError {
    #[error("cannot read matcher config `{path}`: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse matcher config `{path}`: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("no matcher registered under `{0}`")]
    UnknownMatcher(String),
}

impl MatcherError {
    /// Construct a [`MatcherError::InvalidConfig`].
    pub fn invalid_config<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
