//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so a host can pull
//! in the whole resolution surface with a single `use`.
//!
//! # Example
//!
//! ```rust,no_run
//! use hokan::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph_json = std::fs::read_to_string("path/to/graph.json")?;
//! let ui_graph: hokan::ui::UiGraph = serde_json::from_str(&graph_json)?;
//! let snapshot = ui_graph.into_snapshot()?;
//!
//! let mut resolver = Resolver::new(&snapshot);
//! let resolution = resolver.resolve_node(&ResolutionRequest {
//!     node_id: "prompt-1".to_string(),
//!     template: "Hello {name}".to_string(),
//!     ..Default::default()
//! });
//!
//! println!("{}", PreviewFormatter::format(&resolution));
//! # Ok(())
//! # }
//! ```

// Snapshot model and conversion
pub use crate::flow::{
    ConnectionPayload, EdgeDefinition, ExecutionState, FlowSnapshot, IntoSnapshot, NodeSnapshot,
    PayloadEntry,
};

// Schema and field collection
pub use crate::fields::{FieldCache, InputField, collect_input_fields};
pub use crate::schema::{DEFAULT_OUTPUT_PORT, FieldKind, OutputSchema, SchemaProperty};

// Template scanning
pub use crate::template::{TemplateAnalysis, analyze, extract_variables};

// Mapping and transforms
pub use crate::mapping::{
    MappingOrigin, MappingReport, VariableMapping, suggest_mappings, validate_mappings,
};
pub use crate::transform::{Transform, TransformOutcome};

// Resolution
pub use crate::resolve::{
    NodeResolution, ResolutionRequest, ResolvedField, Resolver, SubstitutionRecord,
    SubstitutionResult, ValueOrigin, resolve, substitute,
};

// Error types
pub use crate::error::{ConversionError, MappingIssue};

// Preview formatting
pub use crate::trace::PreviewFormatter;

// Standard library re-exports commonly used with this crate
pub use std::collections::HashMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
