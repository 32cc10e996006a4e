//! Mapping of available fields onto template variables: auto-suggestion and
//! validation.

use crate::error::MappingIssue;
use crate::fields::InputField;
use crate::transform::Transform;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Who authored a mapping. Once a node carries any [`Manual`] mapping,
/// auto-suggestion must not silently overwrite the set.
///
/// [`Manual`]: MappingOrigin::Manual
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingOrigin {
    #[default]
    ConnectedNode,
    Manual,
}

/// An association from an available field (or a default value) to a template
/// variable, with an optional transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VariableMapping {
    /// Name of the source field; empty means "unmapped", in which case only
    /// the default value can supply the variable.
    #[serde(default, alias = "inputField")]
    pub input_field: String,
    /// The template placeholder this mapping fills.
    #[serde(alias = "variableName")]
    pub variable_name: String,
    #[serde(default, alias = "defaultValue")]
    pub default_value: String,
    #[serde(default)]
    pub transform: Transform,
    #[serde(default, rename = "source", alias = "origin")]
    pub origin: MappingOrigin,
}

impl VariableMapping {
    /// A suggested mapping binding `field` to `variable`.
    pub fn suggested(field: &str, variable: &str) -> Self {
        VariableMapping {
            input_field: field.to_string(),
            variable_name: variable.to_string(),
            default_value: String::new(),
            transform: Transform::None,
            origin: MappingOrigin::ConnectedNode,
        }
    }
}

/// Proposes a best-effort 1:1 mapping from `available` fields onto
/// `template_variables`.
///
/// Each variable takes the first field whose name matches
/// case-insensitively; variables with no match are omitted rather than bound
/// to a nonexistent field. When the target is not a template (no variables)
/// and at least one field is available, a single direct mapping from the
/// first field onto its own name is synthesized.
///
/// Pure and idempotent: the same inputs always yield the same sequence.
pub fn suggest_mappings(
    template_variables: &[String],
    available: &[InputField],
) -> Vec<VariableMapping> {
    if template_variables.is_empty() {
        return available
            .first()
            .map(|field| vec![VariableMapping::suggested(&field.name, &field.name)])
            .unwrap_or_default();
    }

    template_variables
        .iter()
        .filter_map(|variable| {
            available
                .iter()
                .find(|field| field.name.eq_ignore_ascii_case(variable))
                .map(|field| VariableMapping::suggested(&field.name, variable))
        })
        .collect()
}

/// The outcome of validating a candidate mapping set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MappingReport {
    /// False iff any hard error (unknown field, duplicate target) is present.
    pub valid: bool,
    pub errors: Vec<MappingIssue>,
    pub warnings: Vec<MappingIssue>,
}

impl MappingReport {
    pub fn is_clean(&self) -> bool {
        self.valid && self.warnings.is_empty()
    }
}

/// Checks a mapping set against the currently available fields.
///
/// Hard errors: a non-empty `input_field` naming a field not in `available`,
/// and two mappings sharing a `variable_name`. A mapping with neither a
/// source field nor a default is only a soft warning; whether the
/// corresponding placeholder is required is the caller's policy.
pub fn validate_mappings(mappings: &[VariableMapping], available: &[InputField]) -> MappingReport {
    let known: AHashSet<&str> = available.iter().map(|f| f.name.as_str()).collect();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut targets = AHashSet::new();

    for mapping in mappings {
        if !mapping.input_field.is_empty() && !known.contains(mapping.input_field.as_str()) {
            errors.push(MappingIssue::UnknownField {
                variable: mapping.variable_name.clone(),
                field: mapping.input_field.clone(),
            });
        }
        if !targets.insert(mapping.variable_name.as_str()) {
            errors.push(MappingIssue::DuplicateTarget {
                variable: mapping.variable_name.clone(),
            });
        }
        if mapping.input_field.is_empty() && mapping.default_value.is_empty() {
            warnings.push(MappingIssue::UnboundPlaceholder {
                variable: mapping.variable_name.clone(),
            });
        }
    }

    MappingReport {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}
