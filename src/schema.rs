//! Output schema model and per-port field extraction.
//!
//! A node declares the fields it exposes through an [`OutputSchema`]. The
//! schema is an ordered list of properties; declaration order is part of the
//! deterministic field ordering contract and is preserved end to end.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The handle id of the single logical output port most nodes expose. Its
/// nested schema bundles the node's named sub-values.
pub const DEFAULT_OUTPUT_PORT: &str = "output";

/// The closed set of field kinds the engine propagates. The kind is only
/// used to label fields for display and selection; open-world type labels
/// are narrowed to this set at the UI boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    String,
    Number,
    Integer,
    Boolean,
    Enum,
    Password,
}

impl FieldKind {
    /// Narrows an arbitrary type label to the closed kind set.
    /// Returns `None` for labels with no direct counterpart.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "string" | "str" | "text" => Some(FieldKind::String),
            "number" | "float" => Some(FieldKind::Number),
            "integer" | "int" => Some(FieldKind::Integer),
            "boolean" | "bool" => Some(FieldKind::Boolean),
            "enum" => Some(FieldKind::Enum),
            "password" => Some(FieldKind::Password),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Enum => "enum",
            FieldKind::Password => "password",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The declared output surface of a node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputSchema {
    pub properties: Vec<SchemaProperty>,
}

/// A single declared property of an output schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaProperty {
    pub name: String,
    pub kind: FieldKind,
    pub description: Option<String>,
    /// Present when this property is an object bundling named sub-values,
    /// i.e. the single-logical-output-port shape.
    pub schema: Option<OutputSchema>,
}

/// A flat, named, typed field exposed by a schema, without provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaField {
    pub name: String,
    pub kind: FieldKind,
    pub description: Option<String>,
}

impl OutputSchema {
    pub fn property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl From<&SchemaProperty> for SchemaField {
    fn from(prop: &SchemaProperty) -> Self {
        SchemaField {
            name: prop.name.clone(),
            kind: prop.kind,
            description: prop.description.clone(),
        }
    }
}

/// Flattens the fields a schema exposes through `port`.
///
/// Resolution order:
/// 1. The default output port with a nested bundle at that property yields
///    the bundle's sub-properties.
/// 2. A dotted reference (`output.text`) yields only that sub-field, if the
///    bundle declares it.
/// 3. Any other port yields every top-level property; the port id validates
///    the connection's topology but never restricts field visibility.
///
/// A missing or empty schema degrades to no fields with a logged warning;
/// this is a normal editing state, never an error.
pub fn port_fields(schema: Option<&OutputSchema>, port: &str) -> Vec<SchemaField> {
    let Some(schema) = schema else {
        log::warn!("no output schema declared; exposing no fields for port '{port}'");
        return Vec::new();
    };
    if schema.is_empty() {
        log::warn!("output schema declares no properties; exposing no fields for port '{port}'");
        return Vec::new();
    }

    if port == DEFAULT_OUTPUT_PORT {
        if let Some(bundle) = schema
            .property(DEFAULT_OUTPUT_PORT)
            .and_then(|p| p.schema.as_ref())
            .filter(|nested| !nested.is_empty())
        {
            return bundle.properties.iter().map(SchemaField::from).collect();
        }
    } else if let Some(sub_name) = port
        .strip_prefix(DEFAULT_OUTPUT_PORT)
        .and_then(|rest| rest.strip_prefix('.'))
    {
        let sub_field = schema
            .property(DEFAULT_OUTPUT_PORT)
            .and_then(|p| p.schema.as_ref())
            .and_then(|nested| nested.property(sub_name))
            .map(SchemaField::from);
        return match sub_field {
            Some(field) => vec![field],
            None => {
                log::warn!("port '{port}' references a sub-field the schema does not declare");
                Vec::new()
            }
        };
    }

    schema.properties.iter().map(SchemaField::from).collect()
}
