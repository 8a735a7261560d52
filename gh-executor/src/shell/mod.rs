//! External command construction and execution.
//!
//! Everything the plugin does against the outside world goes through
//! [`ShellRunner`]: the cluster probes (`kubectl`) and issue publishing
//! (`gh`). The trait is the seam tests script against; production code
//! uses [`ProcessRunner`].

mod error;

pub use error::ShellError;

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use tracing::debug;

/// A single external command invocation: program, arguments, and
/// environment entries scoped to that one child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    program: String,
    args: Vec<String>,
    envs: BTreeMap<String, String>,
}

impl ShellCommand {
    /// Starts building a command for the given program.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: BTreeMap::new(),
        }
    }

    /// Appends a single argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends multiple arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets an environment variable for the child process only.
    ///
    /// This is how credentials travel; they never touch the parent
    /// process environment or the command line.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.insert(key.into(), value.into());
        self
    }

    /// Returns the program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the argument vector.
    pub fn argv(&self) -> &[String] {
        &self.args
    }

    /// Returns the child-scoped environment entries.
    pub fn envs(&self) -> &BTreeMap<String, String> {
        &self.envs
    }

    /// Space-joined rendering for logs and assertions.
    ///
    /// Environment entries are deliberately omitted so credentials never
    /// reach log output.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Runs external commands and captures their standard output.
#[async_trait]
pub trait ShellRunner: Send + Sync {
    /// Runs the command to completion, returning trimmed stdout.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] if the program cannot be started or exits
    /// non-zero.
    async fn run(&self, command: &ShellCommand) -> Result<String, ShellError>;
}

#[async_trait]
impl<T: ShellRunner + ?Sized> ShellRunner for Arc<T> {
    async fn run(&self, command: &ShellCommand) -> Result<String, ShellError> {
        (**self).run(command).await
    }
}

/// [`ShellRunner`] backed by real child processes.
///
/// Children are spawned with `kill_on_drop`, so cancelling the caller's
/// future (host deadline, CLI timeout) terminates in-flight invocations
/// instead of leaving them to run unbounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl ShellRunner for ProcessRunner {
    async fn run(&self, command: &ShellCommand) -> Result<String, ShellError> {
        debug!(command = %command.command_line(), "Running external command");

        let output = Command::new(command.program())
            .args(command.argv())
            .envs(command.envs())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ShellError::Spawn {
                program: command.program().to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(ShellError::NonZeroExit {
                program: command.program().to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
