//! Template rendering using Handlebars.
//!
//! The issue body template is user-supplied configuration. It sees the
//! diagnostics variables `Type`, `Namespace`, `Logs`, and `Version`, plus
//! the `code` helper for embedding command output in fenced blocks.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::IssueRenderer;

use handlebars::{no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext};

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
/// - `code` helper for fenced code blocks
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs.register_helper("code", Box::new(code_helper));

    hbs
}

/// Helper that wraps a text blob in a fenced code block.
///
/// Usage: `{{code "yaml" Version}}`
fn code_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let syntax = h.param(0).and_then(|v| v.value().as_str()).unwrap_or_default();
    let content = h.param(1).and_then(|v| v.value().as_str()).unwrap_or_default();

    out.write(&format!("\n```{syntax}\n{content}\n```\n"))?;
    Ok(())
}

/// Generates the issue title for a malfunctioning resource.
///
/// Format: ``The `KIND/NAME` malfunctions``
#[must_use]
pub fn generate_issue_title(resource: &str) -> String {
    format!("The `{resource}` malfunctions")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::IssueDetails;

    fn sample_details() -> IssueDetails {
        IssueDetails {
            resource: "pod/api".to_string(),
            namespace: "staging".to_string(),
            logs: "line1\nline2".to_string(),
            version: "serverVersion:\n  gitVersion: v1.26.0".to_string(),
        }
    }

    #[test]
    fn generates_issue_title() {
        assert_eq!(generate_issue_title("pod/api"), "The `pod/api` malfunctions");
    }

    #[test]
    fn renders_diagnostics_variables() {
        let renderer = IssueRenderer::new();

        let body = renderer
            .render_issue_body("Resource: {{Type}} in {{Namespace}}", &sample_details())
            .unwrap();

        assert_eq!(body, "Resource: pod/api in staging");
    }

    #[test]
    fn code_helper_wraps_content_in_fenced_block() {
        let renderer = IssueRenderer::new();
        let details = IssueDetails {
            version: "foo: bar".to_string(),
            ..sample_details()
        };

        let body = renderer
            .render_issue_body(r#"{{code "yaml" Version}}"#, &details)
            .unwrap();

        assert_eq!(body, "\n```yaml\nfoo: bar\n```\n");
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = IssueRenderer::new();
        let template = r#"{{Type}} {{code "text" Logs}}"#;
        let details = sample_details();

        let first = renderer.render_issue_body(template, &details).unwrap();
        let second = renderer.render_issue_body(template, &details).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn malformed_template_is_an_error_not_a_panic() {
        let renderer = IssueRenderer::new();

        let result = renderer.render_issue_body("{{#if}}", &sample_details());

        assert!(matches!(result, Err(TemplateError::RenderError(_))));
    }

    #[test]
    fn unknown_variable_is_rejected_in_strict_mode() {
        let renderer = IssueRenderer::new();

        let result = renderer.render_issue_body("{{Nope}}", &sample_details());

        assert!(result.is_err());
    }

    #[test]
    fn no_html_escaping_in_markdown_output() {
        let renderer = IssueRenderer::new();
        let details = IssueDetails {
            logs: "<error> & more".to_string(),
            ..sample_details()
        };

        let body = renderer.render_issue_body("{{Logs}}", &details).unwrap();

        assert_eq!(body, "<error> & more");
    }
}
