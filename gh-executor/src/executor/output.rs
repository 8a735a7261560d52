//! Executor input and output payloads.

use serde_json::Value;

/// One incoming invocation: raw command text plus the config sources the
/// host resolved for this call.
#[derive(Debug, Clone, Default)]
pub struct ExecuteInput {
    /// Raw command string following the plugin invocation name.
    pub command: String,

    /// Raw config sources, least specific first.
    pub configs: Vec<Value>,
}

/// Plain-text response returned to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteOutput {
    /// Human-readable message body.
    pub message: String,
}

/// Plugin identification reported to the host registry.
#[derive(Debug, Clone)]
pub struct Metadata {
    /// Plugin version.
    pub version: String,

    /// One-line plugin description.
    pub description: String,
}
