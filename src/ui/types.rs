use serde::Deserialize;

/// Complete editor graph structure, as the flow-editing surface serializes it.
#[derive(Debug, Deserialize)]
pub struct UiGraph {
    pub nodes: Vec<UiNode>,
    pub edges: Vec<UiEdge>,
}

/// UI node with id and configuration data.
#[derive(Debug, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(default)]
    pub data: UiNodeData,
}

/// UI node data: declared output surface and last-run values.
#[derive(Debug, Default, Deserialize)]
pub struct UiNodeData {
    /// JSON-schema-shaped fragment describing the node's outputs.
    #[serde(default, alias = "outputSchema")]
    pub output_schema: Option<serde_json::Value>,
    #[serde(default, alias = "outputValues")]
    pub output_values: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, alias = "executionState")]
    pub execution_state: Option<String>,
}

/// UI edge connecting two node ports.
#[derive(Debug, Deserialize)]
pub struct UiEdge {
    pub source: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<String>,
    pub target: String,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: Option<String>,
    #[serde(default)]
    pub data: Option<UiEdgeData>,
}

/// Edge-carried connection data negotiated when the edge was drawn.
#[derive(Debug, Default, Deserialize)]
pub struct UiEdgeData {
    #[serde(default, alias = "isMultiVariableConnection")]
    pub is_multi_variable_connection: bool,
    #[serde(default, alias = "variableMappings")]
    pub variable_mappings: Vec<UiVariableDescriptor>,
}

/// One negotiated field descriptor on a multi-variable connection.
#[derive(Debug, Deserialize)]
pub struct UiVariableDescriptor {
    #[serde(alias = "targetVariable")]
    pub target_variable: String,
    #[serde(default, alias = "dataType")]
    pub data_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
