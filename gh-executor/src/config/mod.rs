//! Executor configuration.
//!
//! The host resolves zero or more raw config sources for each invocation;
//! [`Config::from_values`] merges them in order (later sources win) into
//! the single typed structure the rest of the plugin reads.

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use serde_json::Value;

/// Top-level executor configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// GitHub-specific settings.
    pub github: GitHubConfig,
}

/// GitHub settings for issue publishing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GitHubConfig {
    /// Personal access token handed to `gh` via `GH_TOKEN`.
    pub token: String,

    /// Target repository in `owner/repo` form.
    pub repository: String,

    /// Handlebars template for the issue body.
    pub issue_template: String,
}

impl Config {
    /// Merges raw config sources in order and deserializes the result.
    ///
    /// Objects merge recursively; scalars and arrays from later sources
    /// replace earlier values wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Merge`] if the merged value does not match
    /// the config shape.
    pub fn from_values(sources: &[Value]) -> Result<Self, ConfigError> {
        let mut merged = Value::Object(serde_json::Map::new());
        for source in sources {
            merge_value(&mut merged, source);
        }
        Ok(serde_json::from_value(merged)?)
    }

    /// Checks that every required field survived the merge.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("github.token", &self.github.token),
            ("github.repository", &self.github.repository),
            ("github.issueTemplate", &self.github.issue_template),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(ConfigError::MissingField { field });
            }
        }
        Ok(())
    }
}

/// Recursive object merge; anything that is not a pair of objects is
/// replaced by the overlay.
fn merge_value(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                merge_value(base_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (slot, overlay) => *slot = overlay.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_fields() {
        let config = Config::from_values(&[json!({
            "github": {
                "token": "t",
                "repository": "acme/widgets",
                "issueTemplate": "body"
            }
        })])
        .unwrap();

        assert_eq!(config.github.token, "t");
        assert_eq!(config.github.repository, "acme/widgets");
        assert_eq!(config.github.issue_template, "body");
    }

    #[test]
    fn later_sources_override_field_by_field() {
        let config = Config::from_values(&[
            json!({"github": {"token": "old", "repository": "acme/widgets"}}),
            json!({"github": {"token": "new"}}),
        ])
        .unwrap();

        assert_eq!(config.github.token, "new");
        assert_eq!(config.github.repository, "acme/widgets");
    }

    #[test]
    fn empty_sources_yield_default_config() {
        let config = Config::from_values(&[]).unwrap();

        assert!(config.github.token.is_empty());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField { field: "github.token" })
        ));
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let config = Config::from_values(&[json!({
            "github": {"token": "t", "repository": "acme/widgets"}
        })])
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField { field: "github.issueTemplate" })
        ));
    }

    #[test]
    fn validate_accepts_complete_config() {
        let config = Config::from_values(&[json!({
            "github": {"token": "t", "repository": "acme/widgets", "issueTemplate": "x"}
        })])
        .unwrap();

        assert!(config.validate().is_ok());
    }
}
