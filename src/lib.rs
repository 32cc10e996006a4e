//! # Hokan - Variable Resolution and Substitution Engine
//!
//! **Hokan** is the resolution core of a node-based flow editor: it walks a
//! directed graph of nodes and edges to determine which typed fields are
//! available to a node, parses free-text templates for `{variable}`
//! references, suggests and validates mappings between fields and variables,
//! applies value transforms, and produces the final resolved string together
//! with a full diagnostic trail.
//!
//! The engine is deterministic and side-effect-free so the host can re-run
//! it cheaply on every edit: no I/O, no timers, no internal mutable state
//! beyond an explicit per-revision field cache. Rendering, drag-and-drop,
//! persistence and live execution of node logic are all external
//! collaborators; hokan only ever operates on an in-memory snapshot.
//!
//! ## Core Workflow
//!
//! 1.  **Snapshot**: Convert the editor's graph into a [`FlowSnapshot`],
//!     either from the editor's JSON shape via [`ui::UiGraph`] or from your
//!     own model through the [`IntoSnapshot`] trait.
//! 2.  **Resolve**: Create a [`Resolver`] over the snapshot and call
//!     [`Resolver::resolve_node`] with the node id, its template, any
//!     directly-supplied values, and the user's mapping overrides.
//! 3.  **Inspect**: Render the returned [`NodeResolution`] (resolved text,
//!     applied and unmapped variables, per-variable provenance, validation
//!     findings) for the preview surface, or feed `result` onward.
//!
//! [`FlowSnapshot`]: flow::FlowSnapshot
//! [`IntoSnapshot`]: flow::IntoSnapshot
//! [`Resolver`]: resolve::Resolver
//! [`Resolver::resolve_node`]: resolve::Resolver::resolve_node
//! [`NodeResolution`]: resolve::NodeResolution
//!
//! ## Quick Start
//!
//! ```rust
//! use hokan::prelude::*;
//! use ahash::AHashMap;
//!
//! // A minimal snapshot: one completed upstream node exposing `name`.
//! let mut values = AHashMap::new();
//! values.insert("name".to_string(), serde_json::json!("Ada"));
//!
//! let snapshot = FlowSnapshot {
//!     nodes: vec![
//!         NodeSnapshot {
//!             id: "input-1".to_string(),
//!             output_schema: Some(OutputSchema {
//!                 properties: vec![SchemaProperty {
//!                     name: "name".to_string(),
//!                     kind: FieldKind::String,
//!                     description: None,
//!                     schema: None,
//!                 }],
//!             }),
//!             output_values: Some(values),
//!             state: ExecutionState::Completed,
//!         },
//!         NodeSnapshot {
//!             id: "prompt-1".to_string(),
//!             output_schema: None,
//!             output_values: None,
//!             state: ExecutionState::NotRun,
//!         },
//!     ],
//!     edges: vec![EdgeDefinition {
//!         source: "input-1".to_string(),
//!         source_port: None,
//!         target: "prompt-1".to_string(),
//!         target_port: None,
//!         payload: None,
//!     }],
//!     revision: 0,
//! };
//!
//! let mut resolver = Resolver::new(&snapshot);
//! let resolution = resolver.resolve_node(&ResolutionRequest {
//!     node_id: "prompt-1".to_string(),
//!     template: "Hello {name}, you are from {city}".to_string(),
//!     ..Default::default()
//! });
//!
//! assert_eq!(resolution.substitution.result, "Hello Ada, you are from {city}");
//! assert_eq!(resolution.substitution.unmapped_variables, vec!["city"]);
//! ```

pub mod data;
pub mod error;
pub mod fields;
pub mod flow;
pub mod mapping;
pub mod prelude;
pub mod resolve;
pub mod schema;
pub mod template;
pub mod trace;
pub mod transform;
pub mod ui;
