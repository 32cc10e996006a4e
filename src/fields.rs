//! Collection of the typed fields available to a node from its inbound edges.

use crate::flow::FlowSnapshot;
use crate::schema::{self, FieldKind};
use ahash::AHashMap;
use serde::Serialize;

/// A piece of data a node could consume, with its provenance.
///
/// Field names are not unique across edges: when two inbound edges expose
/// the same name, both are retained as separate candidates and consumers
/// decide precedence (first occurrence wins).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputField {
    pub name: String,
    pub kind: FieldKind,
    pub description: Option<String>,
    pub source_node: String,
    pub source_port: String,
}

/// Collects every field available to `target`, in deterministic order:
/// inbound edges in insertion order, then within one edge the payload or
/// schema property order.
///
/// An edge whose source node is missing from the snapshot is a transient
/// editing state and simply contributes no fields. An edge carrying a
/// negotiated payload emits its entries directly, bypassing the source
/// schema; a legacy edge derives its fields from the source node's output
/// schema and port.
pub fn collect_input_fields(
    snapshot: &FlowSnapshot,
    target: &str,
    target_port: Option<&str>,
) -> Vec<InputField> {
    let mut fields = Vec::new();

    for edge in snapshot.inbound_edges(target, target_port) {
        let Some(source) = snapshot.node(&edge.source) else {
            log::debug!(
                "edge into '{target}' references missing node '{}'; skipping",
                edge.source
            );
            continue;
        };

        if let Some(payload) = &edge.payload {
            fields.extend(payload.entries.iter().map(|entry| InputField {
                name: entry.target_variable.clone(),
                kind: entry.kind,
                description: entry.description.clone(),
                source_node: source.id.clone(),
                source_port: edge.source_port().to_string(),
            }));
        } else {
            fields.extend(
                schema::port_fields(source.output_schema.as_ref(), edge.source_port())
                    .into_iter()
                    .map(|field| InputField {
                        name: field.name,
                        kind: field.kind,
                        description: field.description,
                        source_node: source.id.clone(),
                        source_port: edge.source_port().to_string(),
                    }),
            );
        }
    }

    fields
}

/// Memoizes collected fields per `(target, target_port, revision)`.
///
/// The host recomputes on every edit, so collection must be cheap to call
/// repeatedly; entries become stale the moment the snapshot's revision
/// moves, and stale revisions are evicted lazily on access.
#[derive(Debug, Default)]
pub struct FieldCache {
    revision: u64,
    entries: AHashMap<(String, Option<String>), Vec<InputField>>,
}

impl FieldCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached collection for `target`, computing it on miss.
    pub fn collect<'a>(
        &'a mut self,
        snapshot: &FlowSnapshot,
        target: &str,
        target_port: Option<&str>,
    ) -> &'a [InputField] {
        if self.revision != snapshot.revision {
            self.entries.clear();
            self.revision = snapshot.revision;
        }
        self.entries
            .entry((target.to_string(), target_port.map(str::to_string)))
            .or_insert_with(|| collect_input_fields(snapshot, target, target_port))
    }
}
