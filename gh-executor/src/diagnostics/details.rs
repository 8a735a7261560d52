//! Diagnostics aggregate.

use serde::Serialize;

/// Everything collected about a malfunctioning resource, ready for
/// template rendering.
///
/// All fields are opaque text; log and version content gets no further
/// structure so it can be embedded in the issue body as-is. Serialized
/// field names (`Type`, `Namespace`, `Logs`, `Version`) are the template
/// variables user templates reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueDetails {
    /// Resource identifier in `kind/name` form.
    #[serde(rename = "Type")]
    pub resource: String,

    /// Namespace the resource lives in.
    #[serde(rename = "Namespace")]
    pub namespace: String,

    /// Tail of the resource's logs, possibly empty.
    #[serde(rename = "Logs")]
    pub logs: String,

    /// Cluster version output, possibly empty.
    #[serde(rename = "Version")]
    pub version: String,
}
