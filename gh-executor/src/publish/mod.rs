//! GitHub issue publishing through the `gh` CLI.
//!
//! This is the one step whose failure fails the whole request: if no
//! issue exists afterwards, the user-visible goal was not achieved.

mod error;

pub use error::PublishError;

use crate::config::GitHubConfig;
use crate::shell::{ShellCommand, ShellRunner};
use tracing::{info, info_span, Instrument};

/// Environment variable the `gh` CLI reads its token from.
const TOKEN_ENV: &str = "GH_TOKEN";

/// Label attached to every filed issue.
const ISSUE_LABEL: &str = "bug";

/// Builds `gh issue create --title <title> --body <body> --label bug -R <repo>`.
///
/// The token rides in the child-scoped environment, never in the argument
/// vector or any rendered text.
#[must_use]
pub fn issue_create_command(config: &GitHubConfig, title: &str, body: &str) -> ShellCommand {
    ShellCommand::new("gh")
        .args([
            "issue",
            "create",
            "--title",
            title,
            "--body",
            body,
            "--label",
            ISSUE_LABEL,
            "-R",
            &config.repository,
        ])
        .env(TOKEN_ENV, &config.token)
}

/// Files the issue and returns its URL from `gh`'s stdout.
///
/// # Errors
///
/// Returns [`PublishError`] when `gh` fails or reports no URL; the caller
/// must surface this to the end user.
pub async fn create_issue(
    runner: &dyn ShellRunner,
    config: &GitHubConfig,
    title: &str,
    body: &str,
) -> Result<String, PublishError> {
    let span = info_span!("create_issue", repository = %config.repository);

    async {
        info!(title = %title, "Filing GitHub issue");

        let url = runner
            .run(&issue_create_command(config, title, body))
            .await?;
        if url.is_empty() {
            return Err(PublishError::MissingUrl);
        }

        info!(url = %url, "Issue created");
        Ok(url)
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> GitHubConfig {
        GitHubConfig {
            token: "secret-token".to_string(),
            repository: "acme/widgets".to_string(),
            issue_template: String::new(),
        }
    }

    #[test]
    fn issue_create_command_matches_gh_contract() {
        let command = issue_create_command(&sample_config(), "The `pod/api` malfunctions", "body");

        assert_eq!(command.program(), "gh");
        assert_eq!(
            command.argv(),
            [
                "issue",
                "create",
                "--title",
                "The `pod/api` malfunctions",
                "--body",
                "body",
                "--label",
                "bug",
                "-R",
                "acme/widgets",
            ]
        );
    }

    #[test]
    fn token_is_scoped_to_the_child_environment() {
        let command = issue_create_command(&sample_config(), "t", "b");

        assert_eq!(
            command.envs().get(TOKEN_ENV).map(String::as_str),
            Some("secret-token")
        );
        assert!(command.argv().iter().all(|arg| !arg.contains("secret-token")));
        assert!(!command.command_line().contains("secret-token"));
    }
}
