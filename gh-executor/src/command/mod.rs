//! Command grammar for the `gh` executor.
//!
//! The plugin understands exactly one verb:
//!
//! ```text
//! gh create issue KIND/NAME [-n|--namespace NAMESPACE]
//! ```
//!
//! Anything else is "no actionable command" and maps to the usage message;
//! parsing never panics on caller input.

use clap::{Args, Parser, Subcommand};

/// Capability name this plugin registers with the host runtime.
pub const PLUGIN_NAME: &str = "gh";

/// Namespace used when the caller does not pass `-n`.
pub const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Parser)]
#[command(name = "gh")]
struct CommandLine {
    #[command(subcommand)]
    verb: Verb,
}

#[derive(Debug, Subcommand)]
enum Verb {
    /// Create a GitHub artifact.
    Create {
        #[command(subcommand)]
        target: CreateTarget,
    },
}

#[derive(Debug, Subcommand)]
enum CreateTarget {
    /// File an issue for a malfunctioning resource.
    Issue(CreateIssueCommand),
}

/// Parsed `create issue` request.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct CreateIssueCommand {
    /// Resource identifier in `kind/name` form.
    pub resource: String,

    /// Namespace the resource lives in.
    #[arg(short = 'n', long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,
}

/// Parses the raw command text following the plugin invocation.
///
/// A leading plugin name is tolerated and stripped, matching how the host
/// hands commands over. Returns `None` for anything that is not a complete
/// `create issue` request; the caller answers with [`usage`].
#[must_use]
pub fn parse_command(raw: &str) -> Option<CreateIssueCommand> {
    let mut words = raw.split_whitespace().peekable();
    if words.peek() == Some(&PLUGIN_NAME) {
        words.next();
    }

    let argv = std::iter::once(PLUGIN_NAME).chain(words);
    match CommandLine::try_parse_from(argv) {
        Ok(CommandLine {
            verb:
                Verb::Create {
                    target: CreateTarget::Issue(command),
                },
        }) => Some(command),
        Err(_) => None,
    }
}

/// The response for any input [`parse_command`] rejects.
#[must_use]
pub fn usage() -> String {
    format!("Usage: {PLUGIN_NAME} create issue KIND/NAME")
}
