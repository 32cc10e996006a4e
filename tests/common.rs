//! Common test utilities for building flow snapshots.
use ahash::AHashMap;
use hokan::prelude::*;

/// A string-kinded top-level schema property.
#[allow(dead_code)]
pub fn string_prop(name: &str) -> SchemaProperty {
    SchemaProperty {
        name: name.to_string(),
        kind: FieldKind::String,
        description: None,
        schema: None,
    }
}

/// A schema exposing `fields` as top-level properties.
#[allow(dead_code)]
pub fn flat_schema(fields: &[&str]) -> OutputSchema {
    OutputSchema {
        properties: fields.iter().map(|f| string_prop(f)).collect(),
    }
}

/// A schema bundling `fields` under the single logical output port.
#[allow(dead_code)]
pub fn bundled_schema(fields: &[&str]) -> OutputSchema {
    OutputSchema {
        properties: vec![SchemaProperty {
            name: DEFAULT_OUTPUT_PORT.to_string(),
            kind: FieldKind::String,
            description: None,
            schema: Some(flat_schema(fields)),
        }],
    }
}

/// A node that ran to completion with the given output values.
#[allow(dead_code)]
pub fn completed_node(
    id: &str,
    schema: Option<OutputSchema>,
    values: serde_json::Value,
) -> NodeSnapshot {
    let values: Option<AHashMap<String, serde_json::Value>> = values
        .as_object()
        .map(|map| map.iter().map(|(k, v)| (k.clone(), v.clone())).collect());
    NodeSnapshot {
        id: id.to_string(),
        output_schema: schema,
        output_values: values,
        state: ExecutionState::Completed,
    }
}

/// A node that has not run and declares nothing.
#[allow(dead_code)]
pub fn idle_node(id: &str) -> NodeSnapshot {
    NodeSnapshot {
        id: id.to_string(),
        output_schema: None,
        output_values: None,
        state: ExecutionState::NotRun,
    }
}

/// A legacy edge with implicit ports.
#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> EdgeDefinition {
    EdgeDefinition {
        source: source.to_string(),
        source_port: None,
        target: target.to_string(),
        target_port: None,
        payload: None,
    }
}

/// An edge carrying a negotiated multi-variable payload.
#[allow(dead_code)]
pub fn payload_edge(source: &str, target: &str, variables: &[&str]) -> EdgeDefinition {
    EdgeDefinition {
        source: source.to_string(),
        source_port: Some(DEFAULT_OUTPUT_PORT.to_string()),
        target: target.to_string(),
        target_port: None,
        payload: Some(ConnectionPayload {
            entries: variables
                .iter()
                .map(|v| PayloadEntry {
                    target_variable: v.to_string(),
                    kind: FieldKind::String,
                    description: None,
                })
                .collect(),
        }),
    }
}

/// Creates a simple, valid snapshot for basic tests.
///
/// A completed text-input node bundling `text` and `length` under its
/// output port, feeding an idle prompt node.
#[allow(dead_code)]
pub fn create_chat_snapshot() -> FlowSnapshot {
    FlowSnapshot {
        nodes: vec![
            completed_node(
                "text-input-1",
                Some(bundled_schema(&["text", "length"])),
                serde_json::json!({ "output": { "text": "hello world", "length": 11 } }),
            ),
            idle_node("prompt-1"),
        ],
        edges: vec![edge("text-input-1", "prompt-1")],
        revision: 1,
    }
}

/// Creates a snapshot with two inbound edges exposing a colliding `text`
/// field: a payload connection first, then a legacy schema connection.
#[allow(dead_code)]
pub fn create_colliding_snapshot() -> FlowSnapshot {
    FlowSnapshot {
        nodes: vec![
            completed_node(
                "mapper-1",
                None,
                serde_json::json!({ "text": "from the mapper" }),
            ),
            completed_node(
                "text-input-1",
                Some(bundled_schema(&["text"])),
                serde_json::json!({ "output": { "text": "from the input" } }),
            ),
            idle_node("prompt-1"),
        ],
        edges: vec![
            payload_edge("mapper-1", "prompt-1", &["text", "tone"]),
            edge("text-input-1", "prompt-1"),
        ],
        revision: 1,
    }
}
