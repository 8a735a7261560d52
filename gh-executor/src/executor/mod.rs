//! The `gh` executor: one command in, one issue URL out.
//!
//! Flow per invocation: parse the command, collect diagnostics
//! (best-effort), render the body (best-effort), publish the issue
//! (fatal on failure). Every invocation is independent and stateless, so
//! the host may dispatch commands concurrently.

mod error;
mod output;

pub use error::ExecuteError;
pub use output::{ExecuteInput, ExecuteOutput, Metadata};

use crate::command::{parse_command, usage, PLUGIN_NAME};
use crate::config::Config;
use crate::diagnostics::collect_issue_details;
use crate::publish;
use crate::shell::{ProcessRunner, ShellRunner};
use crate::templates::{generate_issue_title, IssueRenderer};
use async_trait::async_trait;
use tracing::{info_span, warn, Instrument};

/// Executor plugin surface the host runtime binds to a named capability.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Reports plugin identification to the host registry.
    fn metadata(&self) -> Metadata;

    /// Handles one command invocation.
    async fn execute(&self, input: ExecuteInput) -> Result<ExecuteOutput, ExecuteError>;
}

/// Files a GitHub issue for a malfunctioning Kubernetes resource.
pub struct GhExecutor<R = ProcessRunner> {
    runner: R,
    renderer: IssueRenderer,
}

impl GhExecutor<ProcessRunner> {
    /// Creates an executor running real child processes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_runner(ProcessRunner)
    }
}

impl Default for GhExecutor<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ShellRunner> GhExecutor<R> {
    /// Creates an executor over a custom shell runner.
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            renderer: IssueRenderer::new(),
        }
    }
}

#[async_trait]
impl<R: ShellRunner> Executor for GhExecutor<R> {
    fn metadata(&self) -> Metadata {
        Metadata {
            version: "v1.0.0".to_string(),
            description: "GH creates an issue on GitHub for a related Kubernetes resource."
                .to_string(),
        }
    }

    async fn execute(&self, input: ExecuteInput) -> Result<ExecuteOutput, ExecuteError> {
        let span = info_span!("execute", plugin = PLUGIN_NAME);

        async {
            let Some(command) = parse_command(&input.command) else {
                return Ok(ExecuteOutput { message: usage() });
            };

            let config = Config::from_values(&input.configs)?;
            config.validate()?;

            let details =
                collect_issue_details(&self.runner, &command.namespace, &command.resource).await;

            let body = match self
                .renderer
                .render_issue_body(&config.github.issue_template, &details)
            {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, "Issue template failed to render, filing issue with empty body");
                    String::new()
                }
            };

            let title = generate_issue_title(&command.resource);
            let url = publish::create_issue(&self.runner, &config.github, &title, &body).await?;

            Ok(ExecuteOutput {
                message: format!("New issue created successfully! 🎉\n\nIssue URL: {url}"),
            })
        }
        .instrument(span)
        .await
    }
}
