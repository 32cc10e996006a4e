use super::types::{UiGraph, UiNode};
use crate::error::ConversionError;
use crate::flow::{
    ConnectionPayload, EdgeDefinition, ExecutionState, FlowSnapshot, IntoSnapshot, NodeSnapshot,
    PayloadEntry,
};
use crate::schema::{FieldKind, OutputSchema, SchemaProperty};
use ahash::{AHashMap, AHashSet};

/// Narrows an open-world type label to the closed kind set. The kind only
/// labels fields for display, so degrading to `string` is lossless for
/// resolution.
fn kind_from_label(label: Option<&str>) -> FieldKind {
    match label {
        None => FieldKind::String,
        Some(label) => FieldKind::from_label(label).unwrap_or_else(|| {
            log::warn!("unknown field type label '{label}'; treating as string");
            FieldKind::String
        }),
    }
}

fn state_from_label(label: Option<&str>) -> ExecutionState {
    match label {
        None => ExecutionState::NotRun,
        Some("not_run") | Some("not-run") => ExecutionState::NotRun,
        Some("running") => ExecutionState::Running,
        Some("completed") => ExecutionState::Completed,
        Some("failed") => ExecutionState::Failed,
        Some(other) => {
            log::warn!("unknown execution state '{other}'; treating as not run");
            ExecutionState::NotRun
        }
    }
}

/// Parses a JSON-schema-shaped fragment (`{"properties": {...}}`) into the
/// canonical ordered schema. Anything that is not an object with a
/// `properties` object degrades to no schema; resolution then simply sees a
/// node exposing no fields.
pub fn schema_from_json(value: &serde_json::Value) -> Option<OutputSchema> {
    let properties = value.get("properties")?.as_object()?;

    let properties = properties
        .iter()
        .map(|(name, def)| {
            let nested = schema_from_json(def);
            // An object bundling sub-values is a structural shape, not a
            // field kind; its label stays the default.
            let kind = match def.get("type").and_then(|t| t.as_str()) {
                Some("object") if nested.is_some() => FieldKind::String,
                label => kind_from_label(label),
            };
            SchemaProperty {
                name: name.clone(),
                kind,
                description: def
                    .get("description")
                    .and_then(|d| d.as_str())
                    .map(str::to_string),
                schema: nested,
            }
        })
        .collect();

    Some(OutputSchema { properties })
}

fn convert_node(node: UiNode) -> NodeSnapshot {
    let schema = node.data.output_schema.as_ref().and_then(|value| {
        let schema = schema_from_json(value);
        if schema.is_none() {
            log::warn!("node '{}' has a malformed output schema", node.id);
        }
        schema
    });

    NodeSnapshot {
        id: node.id,
        output_schema: schema,
        output_values: node
            .data
            .output_values
            .map(|values| values.into_iter().collect::<AHashMap<_, _>>()),
        state: state_from_label(node.data.execution_state.as_deref()),
    }
}

impl IntoSnapshot for UiGraph {
    fn into_snapshot(self) -> Result<FlowSnapshot, ConversionError> {
        let mut seen = AHashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(ConversionError::DuplicateNode(node.id.clone()));
            }
        }

        let nodes = self.nodes.into_iter().map(convert_node).collect();

        let edges = self
            .edges
            .into_iter()
            .map(|edge| {
                let payload = edge.data.and_then(|data| {
                    (data.is_multi_variable_connection && !data.variable_mappings.is_empty()).then(
                        || ConnectionPayload {
                            entries: data
                                .variable_mappings
                                .into_iter()
                                .map(|descriptor| PayloadEntry {
                                    target_variable: descriptor.target_variable,
                                    kind: kind_from_label(descriptor.data_type.as_deref()),
                                    description: descriptor.description,
                                })
                                .collect(),
                        },
                    )
                });

                EdgeDefinition {
                    source: edge.source,
                    source_port: edge.source_handle,
                    target: edge.target,
                    target_port: edge.target_handle,
                    payload,
                }
            })
            .collect();

        Ok(FlowSnapshot {
            nodes,
            edges,
            revision: 0,
        })
    }
}
