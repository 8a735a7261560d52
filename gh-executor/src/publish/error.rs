//! Issue publishing error types.

use crate::shell::ShellError;
use thiserror::Error;

/// Errors that can occur while filing the issue through the `gh` CLI.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The `gh` invocation failed (bad token, network, unknown repository).
    #[error("gh invocation failed: {0}")]
    Shell(#[from] ShellError),

    /// `gh` exited successfully but printed no issue URL.
    #[error("gh returned no issue URL")]
    MissingUrl,
}
