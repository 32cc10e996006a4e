//! The substitution engine: turns (template, graph, mappings) into a
//! resolved string plus a structured diagnostic trail.

use crate::fields::{FieldCache, InputField};
use crate::flow::FlowSnapshot;
use crate::mapping::{self, MappingReport, VariableMapping};
use crate::template::{self, Token};
use crate::transform::Transform;
use ahash::AHashMap;
use serde::Serialize;

/// Where a substituted value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ValueOrigin {
    /// Produced by an upstream node and carried through a mapping.
    ConnectedField { node: String, field: String },
    /// Supplied directly by the caller alongside the template.
    DirectInput,
    /// The mapping's default value, used because the field was absent or empty.
    DefaultValue,
}

/// One per-variable trace entry in the substitution log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstitutionRecord {
    pub variable: String,
    pub origin: ValueOrigin,
    pub transform: Transform,
    pub was_transformed: bool,
    pub used_default: bool,
}

/// The outcome of substituting one template.
///
/// `applied_variables` and `unmapped_variables` together cover exactly the
/// template's variable set, with no overlap. The log lists applied variables
/// in template first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubstitutionResult {
    pub result: String,
    pub applied_variables: AHashMap<String, String>,
    pub unmapped_variables: Vec<String>,
    pub log: Vec<SubstitutionRecord>,
}

/// Everything the preview surface needs for one node: the fields that were
/// available, the mapping set that was applied, its validation report, and
/// the substitution itself.
#[derive(Debug, Clone, Serialize)]
pub struct NodeResolution {
    pub fields: Vec<InputField>,
    pub mappings: Vec<VariableMapping>,
    pub report: MappingReport,
    pub substitution: SubstitutionResult,
}

/// An available field paired with the value its source node currently
/// exposes, if any.
#[derive(Debug, Clone)]
pub struct ResolvedField {
    pub field: InputField,
    pub value: Option<serde_json::Value>,
}

/// The caller's input for one resolution call.
#[derive(Debug, Clone, Default)]
pub struct ResolutionRequest {
    pub node_id: String,
    pub target_port: Option<String>,
    pub template: String,
    /// Values supplied directly with the template (the node's own configured
    /// inputs). Graph-resolved values win on collision.
    pub direct_values: AHashMap<String, serde_json::Value>,
    /// User-edited mappings. When non-empty, auto-suggestion is suppressed
    /// entirely so user edits are never silently overwritten.
    pub overrides: Vec<VariableMapping>,
}

/// Renders a runtime value for textual substitution. Strings pass through
/// unquoted; everything else uses its compact JSON form.
pub fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn is_empty_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Replaces every `{name}` whose name has an entry in `variables`, leaving
/// other placeholders verbatim. Returns the spliced text, the applied names
/// and the unresolved names, both distinct and in first-occurrence order.
fn splice(
    template: &str,
    variables: &AHashMap<String, String>,
) -> (String, Vec<String>, Vec<String>) {
    let mut result = String::with_capacity(template.len());
    let mut applied = Vec::new();
    let mut unmapped = Vec::new();

    for token in template::tokenize(template) {
        match token {
            Token::Text(text) => result.push_str(text),
            Token::Variable { raw, name } => match variables.get(name) {
                Some(value) => {
                    result.push_str(value);
                    if !applied.iter().any(|v| v == name) {
                        applied.push(name.to_string());
                    }
                }
                None => {
                    result.push_str(raw);
                    if !unmapped.iter().any(|v| v == name) {
                        unmapped.push(name.to_string());
                    }
                }
            },
        }
    }

    (result, applied, unmapped)
}

/// Substitutes `variables` into `template`.
///
/// Replacement is literal, single-pass text substitution: a value containing
/// `{...}` is never re-substituted. Identical inputs always yield an
/// identical result.
pub fn substitute(template: &str, variables: &AHashMap<String, String>) -> SubstitutionResult {
    let (result, applied, unmapped_variables) = splice(template, variables);

    let log = applied
        .iter()
        .map(|variable| SubstitutionRecord {
            variable: variable.clone(),
            origin: ValueOrigin::DirectInput,
            transform: Transform::None,
            was_transformed: false,
            used_default: false,
        })
        .collect();

    let applied_variables = applied
        .into_iter()
        .filter_map(|variable| {
            let value = variables.get(&variable).cloned()?;
            Some((variable, value))
        })
        .collect();

    SubstitutionResult {
        result,
        applied_variables,
        unmapped_variables,
        log,
    }
}

/// Builds the variable map from `mappings` over `fields` and substitutes it
/// into `template`.
///
/// Per mapping: the field's current value is looked up (first field with a
/// matching name wins), the transform is applied, and the default value
/// steps in when the field is absent or its value is empty. A mapping with
/// neither a value nor a default contributes nothing and its placeholder is
/// reported as unmapped.
pub fn resolve(
    template: &str,
    fields: &[ResolvedField],
    mappings: &[VariableMapping],
) -> SubstitutionResult {
    resolve_with_direct(template, fields, mappings, &AHashMap::new())
}

pub(crate) fn resolve_with_direct(
    template: &str,
    fields: &[ResolvedField],
    mappings: &[VariableMapping],
    direct_values: &AHashMap<String, serde_json::Value>,
) -> SubstitutionResult {
    let mut variables: AHashMap<String, String> = AHashMap::new();
    let mut records: AHashMap<String, SubstitutionRecord> = AHashMap::new();

    for (name, value) in direct_values {
        variables.insert(name.clone(), render_value(value));
        records.insert(
            name.clone(),
            SubstitutionRecord {
                variable: name.clone(),
                origin: ValueOrigin::DirectInput,
                transform: Transform::None,
                was_transformed: false,
                used_default: false,
            },
        );
    }

    for mapping in mappings {
        let Some((raw, origin, used_default)) = mapping_value(mapping, fields) else {
            continue;
        };
        let outcome = mapping.transform.apply(&raw);
        variables.insert(mapping.variable_name.clone(), outcome.value);
        records.insert(
            mapping.variable_name.clone(),
            SubstitutionRecord {
                variable: mapping.variable_name.clone(),
                origin,
                transform: mapping.transform,
                was_transformed: outcome.was_transformed,
                used_default,
            },
        );
    }

    let (result, applied, unmapped_variables) = splice(template, &variables);

    let log = applied
        .iter()
        .filter_map(|variable| records.get(variable).cloned())
        .collect();

    let applied_variables = applied
        .into_iter()
        .filter_map(|variable| {
            let value = variables.get(&variable).cloned()?;
            Some((variable, value))
        })
        .collect();

    SubstitutionResult {
        result,
        applied_variables,
        unmapped_variables,
        log,
    }
}

/// Resolves one mapping to its raw (pre-transform) value, its origin, and
/// whether the default stepped in. `None` means the variable stays unmapped.
fn mapping_value(
    mapping: &VariableMapping,
    fields: &[ResolvedField],
) -> Option<(String, ValueOrigin, bool)> {
    if !mapping.input_field.is_empty() {
        let hit = fields
            .iter()
            .find(|f| f.field.name == mapping.input_field)
            .and_then(|f| {
                f.value
                    .as_ref()
                    .filter(|value| !is_empty_value(value))
                    .map(|value| (render_value(value), f.field.source_node.clone()))
            });
        if let Some((value, node)) = hit {
            return Some((
                value,
                ValueOrigin::ConnectedField {
                    node,
                    field: mapping.input_field.clone(),
                },
                false,
            ));
        }
    }
    if !mapping.default_value.is_empty() {
        return Some((mapping.default_value.clone(), ValueOrigin::DefaultValue, true));
    }
    None
}

/// Orchestrates one snapshot's resolutions: extraction, field collection
/// (cached against the snapshot's revision), suggestion, validation,
/// transforms and substitution.
///
/// The resolver borrows the snapshot read-only; its only state is the
/// revision-keyed field cache, so it can be rebuilt cheaply whenever the
/// host's graph changes identity.
#[derive(Debug)]
pub struct Resolver<'a> {
    snapshot: &'a FlowSnapshot,
    cache: FieldCache,
}

impl<'a> Resolver<'a> {
    pub fn new(snapshot: &'a FlowSnapshot) -> Self {
        Self {
            snapshot,
            cache: FieldCache::new(),
        }
    }

    /// The fields currently available to `node_id`, memoized per revision.
    pub fn available_fields(&mut self, node_id: &str, target_port: Option<&str>) -> &[InputField] {
        self.cache.collect(self.snapshot, node_id, target_port)
    }

    /// Resolves one node's template end to end.
    pub fn resolve_node(&mut self, request: &ResolutionRequest) -> NodeResolution {
        let template_variables = template::extract_variables(&request.template);
        let fields = self
            .cache
            .collect(self.snapshot, &request.node_id, request.target_port.as_deref())
            .to_vec();

        let mappings = if request.overrides.is_empty() {
            mapping::suggest_mappings(&template_variables, &fields)
        } else {
            request.overrides.clone()
        };
        let report = mapping::validate_mappings(&mappings, &fields);

        let resolved: Vec<ResolvedField> = fields
            .iter()
            .map(|field| ResolvedField {
                value: self
                    .snapshot
                    .node(&field.source_node)
                    .and_then(|node| node.completed_value(&field.name))
                    .cloned(),
                field: field.clone(),
            })
            .collect();

        let substitution = resolve_with_direct(
            &request.template,
            &resolved,
            &mappings,
            &request.direct_values,
        );

        NodeResolution {
            fields,
            mappings,
            report,
            substitution,
        }
    }
}
