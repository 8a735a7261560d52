//! CLI harness for the `gh` executor plugin.
//!
//! Stands in for the host bot runtime: builds the layered configuration,
//! feeds one command string to the executor, and prints the response.

use clap::Parser;
use gh_executor::{deps, Config, ExecuteInput, Executor, GhExecutor, ProcessRunner};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File a GitHub issue for a malfunctioning Kubernetes resource.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional TOML config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Target repository in owner/repo form.
    #[arg(long)]
    repository: Option<String>,

    /// Path to the Handlebars issue body template.
    #[arg(long)]
    template_path: Option<PathBuf>,

    /// Abort in-flight shell invocations after this many seconds.
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,

    /// Check that kubectl and gh are invokable before executing.
    #[arg(long)]
    verify_deps: bool,

    /// Command words, e.g.: create issue KIND/NAME -n NAMESPACE
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    command: Vec<String>,
}

/// Errors that prevent the harness from reaching the executor at all.
#[derive(Debug, thiserror::Error)]
enum SetupError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Config(#[from] gh_executor::ConfigError),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    let input = match build_input(&args) {
        Ok(input) => input,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::from(2);
        }
    };

    if args.verify_deps {
        if let Err(e) = deps::verify(&ProcessRunner).await {
            error!(error = %e, "Dependency check failed");
            return ExitCode::from(2);
        }
    }

    let executor = GhExecutor::new();
    let deadline = Duration::from_secs(args.timeout_secs);

    // Dropping the execute future on timeout kills in-flight children.
    match tokio::time::timeout(deadline, executor.execute(input)).await {
        Ok(Ok(output)) => {
            println!("{}", output.message);
            ExitCode::from(0)
        }
        Ok(Err(e)) => {
            error!(error = %e, "Command failed");
            ExitCode::from(1)
        }
        Err(_) => {
            error!(timeout_secs = args.timeout_secs, "Command timed out");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Builds the executor input: config file first, flag overrides second,
/// mirroring the host's least-specific-first config sources.
fn build_input(args: &Args) -> Result<ExecuteInput, SetupError> {
    let mut sources: Vec<Value> = Vec::new();

    if let Some(path) = &args.config {
        sources.push(load_config_file(path)?);
    }

    let mut github = serde_json::Map::new();
    if let Some(token) = &args.token {
        github.insert("token".to_string(), json!(token));
    }
    if let Some(repository) = &args.repository {
        github.insert("repository".to_string(), json!(repository));
    }
    if let Some(path) = &args.template_path {
        let template = read_file(path)?;
        github.insert("issueTemplate".to_string(), json!(template));
    }
    if !github.is_empty() {
        sources.push(json!({ "github": github }));
    }

    // Fail fast on unusable config instead of deep inside the publish step.
    let config = Config::from_values(&sources)?;
    config.validate()?;

    Ok(ExecuteInput {
        command: args.command.join(" "),
        configs: sources,
    })
}

fn load_config_file(path: &PathBuf) -> Result<Value, SetupError> {
    let text = read_file(path)?;
    let value: toml::Value = toml::from_str(&text).map_err(|source| SetupError::Toml {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::to_value(value).map_err(|source| SetupError::Config(source.into()))
}

fn read_file(path: &PathBuf) -> Result<String, SetupError> {
    std::fs::read_to_string(path).map_err(|source| SetupError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            config: None,
            token: Some("t".to_string()),
            repository: Some("acme/widgets".to_string()),
            template_path: None,
            timeout_secs: 120,
            verify_deps: false,
            command: vec![
                "create".to_string(),
                "issue".to_string(),
                "foo/bar".to_string(),
            ],
        }
    }

    #[test]
    fn flags_override_config_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[github]
token = "from-file"
repository = "acme/widgets"
issueTemplate = "body {{Type}}"
"#,
        )
        .unwrap();

        let mut args = base_args();
        args.config = Some(config_path);

        let input = build_input(&args).unwrap();
        let config = Config::from_values(&input.configs).unwrap();

        assert_eq!(config.github.token, "t");
        assert_eq!(config.github.issue_template, "body {{Type}}");
        assert_eq!(input.command, "create issue foo/bar");
    }

    #[test]
    fn template_path_flag_loads_the_template_text() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("issue-template.md");
        std::fs::write(&template_path, "Resource: {{Type}}").unwrap();

        let mut args = base_args();
        args.template_path = Some(template_path);

        let input = build_input(&args).unwrap();
        let config = Config::from_values(&input.configs).unwrap();

        assert_eq!(config.github.issue_template, "Resource: {{Type}}");
    }

    #[test]
    fn incomplete_config_fails_setup() {
        let mut args = base_args();
        args.repository = None;

        assert!(matches!(
            build_input(&args),
            Err(SetupError::Config(
                gh_executor::ConfigError::MissingField { .. }
            ))
        ));
    }
}
