use crate::mapping::VariableMapping;
use crate::ui::{UiEdge, UiGraph, UiNode, UiNodeData};
use serde::Deserialize;
use std::fs;

/// A preview scenario, matching the expected JSON format for the CLI: a
/// graph snapshot in the editor's shape, the node under preview, its
/// template, and optional directly-supplied values and mapping overrides.
#[derive(Debug, Deserialize)]
pub struct PreviewScenario {
    pub graph: UiGraph,
    pub node: String,
    pub template: String,
    #[serde(default)]
    pub values: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub overrides: Vec<VariableMapping>,
}

impl PreviewScenario {
    /// Load a scenario from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let scenario = serde_json::from_str(&content)?;
        Ok(scenario)
    }

    /// Creates a default mock scenario when no file is provided: a completed
    /// text-input node feeding a prompt template.
    pub fn mock() -> Self {
        let schema = serde_json::json!({
            "properties": {
                "output": {
                    "type": "object",
                    "properties": {
                        "text": { "type": "string", "description": "User text" }
                    }
                }
            }
        });
        let mut values = serde_json::Map::new();
        values.insert(
            "output".to_string(),
            serde_json::json!({ "text": "hello from the editor" }),
        );

        let graph = UiGraph {
            nodes: vec![
                UiNode {
                    id: "text-input-1".to_string(),
                    data: UiNodeData {
                        output_schema: Some(schema),
                        output_values: Some(values),
                        execution_state: Some("completed".to_string()),
                    },
                },
                UiNode {
                    id: "prompt-1".to_string(),
                    data: UiNodeData::default(),
                },
            ],
            edges: vec![UiEdge {
                source: "text-input-1".to_string(),
                source_handle: Some("output".to_string()),
                target: "prompt-1".to_string(),
                target_handle: None,
                data: None,
            }],
        };

        PreviewScenario {
            graph,
            node: "prompt-1".to_string(),
            template: "Summarize the following: {text}".to_string(),
            values: serde_json::Map::new(),
            overrides: Vec::new(),
        }
    }
}
