//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building the executor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The merged config sources do not deserialize into [`Config`][super::Config].
    #[error("Failed to deserialize merged configuration: {0}")]
    Merge(#[from] serde_json::Error),

    /// A required field is empty after merging all sources.
    #[error("Missing required configuration field: {field}")]
    MissingField { field: &'static str },
}
