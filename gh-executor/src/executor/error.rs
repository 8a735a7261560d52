//! Executor error types.

use crate::config::ConfigError;
use crate::publish::PublishError;
use thiserror::Error;

/// Errors that fail a whole `execute` invocation.
///
/// Diagnostics and rendering failures are deliberately absent: they are
/// degraded, not propagated, so an issue still gets filed.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// The merged configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The issue could not be created.
    #[error("Failed to create GitHub issue: {0}")]
    Publish(#[from] PublishError),
}
