//! Best-effort cluster diagnostics collection.
//!
//! Two read-only `kubectl` probes feed the issue body: a tail of the
//! failing resource's logs and the cluster version. A probe failure
//! degrades to empty text instead of aborting. An issue report with
//! missing logs is still worth filing.

mod details;

pub use details::IssueDetails;

use crate::shell::{ShellCommand, ShellRunner};
use tracing::warn;

/// Number of log lines tailed from the failing resource.
pub const LOGS_TAIL_LINES: u32 = 150;

/// Builds `kubectl logs <resource> -n <namespace> --tail <N>`.
#[must_use]
pub fn logs_command(resource: &str, namespace: &str) -> ShellCommand {
    ShellCommand::new("kubectl")
        .args(["logs", resource, "-n", namespace, "--tail"])
        .arg(LOGS_TAIL_LINES.to_string())
}

/// Builds `kubectl version -o yaml`.
#[must_use]
pub fn version_command() -> ShellCommand {
    ShellCommand::new("kubectl").args(["version", "-o", "yaml"])
}

/// Collects logs and cluster version for the named resource.
///
/// Each probe failure is logged and replaced with empty text; this
/// function never fails.
pub async fn collect_issue_details(
    runner: &dyn ShellRunner,
    namespace: &str,
    resource: &str,
) -> IssueDetails {
    let logs = run_probe(runner, &logs_command(resource, namespace), "logs").await;
    let version = run_probe(runner, &version_command(), "version").await;

    IssueDetails {
        resource: resource.to_string(),
        namespace: namespace.to_string(),
        logs,
        version,
    }
}

async fn run_probe(runner: &dyn ShellRunner, command: &ShellCommand, probe: &str) -> String {
    match runner.run(command).await {
        Ok(output) => output,
        Err(e) => {
            warn!(
                probe,
                command = %command.command_line(),
                error = %e,
                "Diagnostics probe failed, continuing without it"
            );
            String::new()
        }
    }
}
