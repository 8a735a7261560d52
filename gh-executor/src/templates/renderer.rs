//! Issue body rendering.

use super::{create_handlebars_registry, TemplateError};
use crate::diagnostics::IssueDetails;
use handlebars::Handlebars;

/// Renders issue bodies from the user-configured Handlebars template.
pub struct IssueRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for IssueRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueRenderer {
    /// Creates a new renderer with the standard registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the issue body template with the collected diagnostics.
    ///
    /// Rendering is pure and deterministic: the same template and details
    /// always produce byte-identical output.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is malformed or references
    /// variables or helpers the registry does not know.
    pub fn render_issue_body(
        &self,
        template: &str,
        details: &IssueDetails,
    ) -> Result<String, TemplateError> {
        Ok(self.handlebars.render_template(template, details)?)
    }
}
