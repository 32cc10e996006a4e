use serde::Serialize;
use thiserror::Error;

/// Errors raised when converting a host-specific graph format into a
/// [`FlowSnapshot`](crate::flow::FlowSnapshot).
///
/// These mark contract violations by the caller (malformed snapshot data),
/// not states reachable through normal editing. Partial graphs, missing
/// schemas and stale references are all tolerated downstream and never
/// surface here.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid flow snapshot data: {0}")]
    Invalid(String),

    #[error("Node id '{0}' appears more than once in the snapshot")]
    DuplicateNode(String),
}

/// A single finding produced by mapping validation.
///
/// `UnknownField` and `DuplicateTarget` are hard errors; the host must block
/// applying such a mapping set. `UnboundPlaceholder` is a soft warning so a
/// placeholder can be left intentionally unmapped.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MappingIssue {
    #[error(
        "Mapping for '{variable}' references field '{field}', which is not available on this node"
    )]
    UnknownField { variable: String, field: String },

    #[error("Multiple mappings target the variable '{variable}'")]
    DuplicateTarget { variable: String },

    #[error("Mapping for '{variable}' has no source field and no default value")]
    UnboundPlaceholder { variable: String },
}

impl MappingIssue {
    /// Whether this finding blocks applying the mapping set.
    pub fn is_hard_error(&self) -> bool {
        !matches!(self, MappingIssue::UnboundPlaceholder { .. })
    }
}
