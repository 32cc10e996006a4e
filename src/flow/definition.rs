use crate::schema::{DEFAULT_OUTPUT_PORT, FieldKind, OutputSchema};
use ahash::AHashMap;

/// An immutable snapshot of the graph under edit, ready for resolution.
/// This is the target structure for any custom data model conversion.
///
/// The engine borrows a snapshot for the duration of one resolution call and
/// never mutates it. `revision` is the identity token for the node and edge
/// collections: the host bumps it on every structural change, and cached
/// field collections are invalidated through it.
#[derive(Debug, Clone, Default)]
pub struct FlowSnapshot {
    pub nodes: Vec<NodeSnapshot>,
    pub edges: Vec<EdgeDefinition>,
    pub revision: u64,
}

/// A single node as the editor currently sees it.
#[derive(Debug, Clone)]
pub struct NodeSnapshot {
    pub id: String,
    pub output_schema: Option<OutputSchema>,
    /// Values produced by the last run, if any. Only trusted when `state`
    /// is [`ExecutionState::Completed`].
    pub output_values: Option<AHashMap<String, serde_json::Value>>,
    pub state: ExecutionState,
}

/// Where a node stands in its execution lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionState {
    #[default]
    NotRun,
    Running,
    Completed,
    Failed,
}

/// A directed connection between two node ports.
#[derive(Debug, Clone, Default)]
pub struct EdgeDefinition {
    pub source: String,
    pub source_port: Option<String>,
    pub target: String,
    pub target_port: Option<String>,
    /// Pre-negotiated field descriptors carried by the edge itself. When
    /// present, field collection bypasses the source node's schema.
    pub payload: Option<ConnectionPayload>,
}

/// The multi-variable connection payload: a flat list of field descriptors
/// the edge negotiated when it was drawn.
#[derive(Debug, Clone, Default)]
pub struct ConnectionPayload {
    pub entries: Vec<PayloadEntry>,
}

/// One negotiated field descriptor on a multi-variable connection.
#[derive(Debug, Clone)]
pub struct PayloadEntry {
    pub target_variable: String,
    pub kind: FieldKind,
    pub description: Option<String>,
}

impl FlowSnapshot {
    pub fn node(&self, id: &str) -> Option<&NodeSnapshot> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Inbound edges of `target`, optionally narrowed to one target port,
    /// in insertion order. Edge order is part of the graph's identity and
    /// is the tie-break for colliding field names downstream.
    pub fn inbound_edges<'a>(
        &'a self,
        target: &'a str,
        target_port: Option<&'a str>,
    ) -> impl Iterator<Item = &'a EdgeDefinition> {
        self.edges.iter().filter(move |edge| {
            edge.target == target
                && target_port.is_none_or(|port| edge.target_port.as_deref() == Some(port))
        })
    }
}

impl NodeSnapshot {
    /// The value this node currently exposes under `field`, if it has run to
    /// completion. Looks at the flat key first, then inside the nested
    /// default-output bundle.
    pub fn completed_value(&self, field: &str) -> Option<&serde_json::Value> {
        if self.state != ExecutionState::Completed {
            return None;
        }
        let values = self.output_values.as_ref()?;
        values.get(field).or_else(|| {
            values
                .get(DEFAULT_OUTPUT_PORT)
                .and_then(|bundle| bundle.as_object())
                .and_then(|bundle| bundle.get(field))
        })
    }
}

impl EdgeDefinition {
    /// The source port this edge reads from, defaulting to the sentinel
    /// output port when the editor left it implicit.
    pub fn source_port(&self) -> &str {
        self.source_port.as_deref().unwrap_or(DEFAULT_OUTPUT_PORT)
    }
}
