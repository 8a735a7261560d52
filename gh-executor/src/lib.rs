#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod command;
pub mod config;
pub mod deps;
pub mod diagnostics;
pub mod executor;
pub mod publish;
pub mod shell;
pub mod templates;

pub use command::{parse_command, usage, CreateIssueCommand, DEFAULT_NAMESPACE, PLUGIN_NAME};
pub use config::{Config, ConfigError, GitHubConfig};
pub use deps::{current_platform, download_descriptors, verify, Dependency, DepsError};
pub use diagnostics::{collect_issue_details, IssueDetails, LOGS_TAIL_LINES};
pub use executor::{ExecuteError, ExecuteInput, ExecuteOutput, Executor, GhExecutor, Metadata};
pub use publish::{create_issue, PublishError};
pub use shell::{ProcessRunner, ShellCommand, ShellError, ShellRunner};
pub use templates::{create_handlebars_registry, generate_issue_title, IssueRenderer, TemplateError};
