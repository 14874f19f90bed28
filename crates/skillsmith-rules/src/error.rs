//! Error types for rule generation

use skillsmith_types::UnknownImpactLevel;
use std::path::PathBuf;
use thiserror::Error;

/// Rule generation errors
#[derive(Debug, Error)]
pub enum RulesError {
    /// Filesystem failure while writing a rules directory
    #[error("Failed to {action} {path:?}: {source}")]
    Io {
        /// What was being attempted ("create", "write", ...)
        action: &'static str,
        /// Path of the file or directory involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A rule file does not have the preamble/heading/body layout
    #[error("Malformed rule file: {0}")]
    MalformedRuleFile(String),

    /// Rule preamble is not valid YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Rule preamble names an unknown impact tier
    #[error(transparent)]
    Impact(#[from] UnknownImpactLevel),
}

impl RulesError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| RulesError::Io {
            action,
            path,
            source,
        }
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, RulesError>;
