//! Pinned external binary dependencies.
//!
//! The host runtime downloads plugin dependencies before first use; this
//! module is the read-only descriptor table it consumes (tool name →
//! per-platform release URL), plus a probe that checks the binaries
//! actually answer on the current execution path. The download itself is
//! not performed here.

use crate::shell::{ShellCommand, ShellError, ShellRunner};
use std::collections::BTreeMap;
use thiserror::Error;

/// Per-platform download locations for one external binary.
#[derive(Debug, Clone)]
pub struct Dependency {
    /// Release URL per `os/arch` key (e.g. `linux/amd64`).
    pub urls: BTreeMap<&'static str, &'static str>,
}

impl Dependency {
    /// Returns the download URL for a platform key, if pinned.
    #[must_use]
    pub fn url_for(&self, platform: &str) -> Option<&'static str> {
        self.urls.get(platform).copied()
    }
}

/// Errors that can occur while checking external binary dependencies.
#[derive(Debug, Error)]
pub enum DepsError {
    /// No release is pinned for the running platform.
    #[error("No {tool} release pinned for platform {platform}")]
    UnsupportedPlatform { tool: &'static str, platform: String },

    /// The binary does not answer a version probe.
    #[error("{tool} is not invokable on the execution path: {source}")]
    Unavailable {
        tool: &'static str,
        #[source]
        source: ShellError,
    },
}

/// Download descriptors for the two binaries this plugin shells out to.
#[must_use]
pub fn download_descriptors() -> BTreeMap<&'static str, Dependency> {
    BTreeMap::from([
        (
            "gh",
            Dependency {
                urls: BTreeMap::from([
                    (
                        "darwin/amd64",
                        "https://github.com/cli/cli/releases/download/v2.21.2/gh_2.21.2_macOS_amd64.tar.gz//gh_2.21.2_macOS_amd64/bin",
                    ),
                    (
                        "linux/amd64",
                        "https://github.com/cli/cli/releases/download/v2.21.2/gh_2.21.2_linux_amd64.tar.gz//gh_2.21.2_linux_amd64/bin",
                    ),
                    (
                        "linux/arm64",
                        "https://github.com/cli/cli/releases/download/v2.21.2/gh_2.21.2_linux_arm64.tar.gz//gh_2.21.2_linux_arm64/bin",
                    ),
                    (
                        "linux/386",
                        "https://github.com/cli/cli/releases/download/v2.21.2/gh_2.21.2_linux_386.tar.gz//gh_2.21.2_linux_386/bin",
                    ),
                ]),
            },
        ),
        (
            "kubectl",
            Dependency {
                urls: BTreeMap::from([
                    (
                        "darwin/amd64",
                        "https://dl.k8s.io/release/v1.26.0/bin/darwin/amd64/kubectl",
                    ),
                    (
                        "linux/amd64",
                        "https://dl.k8s.io/release/v1.26.0/bin/linux/amd64/kubectl",
                    ),
                    (
                        "linux/arm64",
                        "https://dl.k8s.io/release/v1.26.0/bin/linux/arm64/kubectl",
                    ),
                    (
                        "linux/386",
                        "https://dl.k8s.io/release/v1.26.0/bin/linux/386/kubectl",
                    ),
                ]),
            },
        ),
    ])
}

/// `os/arch` key for the running process, in the form the descriptor
/// table uses.
#[must_use]
pub fn current_platform() -> String {
    let arch = match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        other => other,
    };
    format!("{}/{arch}", std::env::consts::OS)
}

/// One-time setup check: every dependency is pinned for this platform and
/// answers a version probe by name on the execution path.
///
/// # Errors
///
/// Returns [`DepsError`] naming the first tool that is unsupported or
/// unavailable.
pub async fn verify(runner: &dyn ShellRunner) -> Result<(), DepsError> {
    let platform = current_platform();

    for (tool, dependency) in download_descriptors() {
        if dependency.url_for(&platform).is_none() {
            return Err(DepsError::UnsupportedPlatform { tool, platform });
        }

        let probe = match tool {
            "kubectl" => ShellCommand::new(tool).args(["version", "--client"]),
            _ => ShellCommand::new(tool).arg("--version"),
        };
        runner
            .run(&probe)
            .await
            .map_err(|source| DepsError::Unavailable { tool, source })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_pin_both_tools_on_four_platforms() {
        let descriptors = download_descriptors();

        for tool in ["gh", "kubectl"] {
            let dependency = descriptors.get(tool).unwrap();
            assert_eq!(dependency.urls.len(), 4, "tool: {tool}");
            for platform in ["darwin/amd64", "linux/amd64", "linux/arm64", "linux/386"] {
                assert!(dependency.url_for(platform).is_some(), "{tool} on {platform}");
            }
        }
    }

    #[test]
    fn pinned_urls_carry_the_released_versions() {
        let descriptors = download_descriptors();

        let gh = descriptors.get("gh").unwrap().url_for("linux/amd64").unwrap();
        assert!(gh.contains("v2.21.2"));

        let kubectl = descriptors
            .get("kubectl")
            .unwrap()
            .url_for("linux/amd64")
            .unwrap();
        assert!(kubectl.contains("v1.26.0"));
    }

    #[test]
    fn unknown_platform_has_no_url() {
        let descriptors = download_descriptors();

        assert!(descriptors
            .get("gh")
            .unwrap()
            .url_for("plan9/mips")
            .is_none());
    }

    #[test]
    fn current_platform_is_an_os_arch_pair() {
        let platform = current_platform();

        assert_eq!(platform.split('/').count(), 2);
    }
}
