//! Tests for mapping suggestion and validation.
mod common;
use common::*;
use hokan::prelude::*;

fn available() -> Vec<InputField> {
    let snapshot = create_chat_snapshot();
    collect_input_fields(&snapshot, "prompt-1", None)
}

#[test]
fn test_suggest_matches_by_name() {
    let suggested = suggest_mappings(&["text".to_string()], &available());

    assert_eq!(suggested.len(), 1);
    assert_eq!(suggested[0].input_field, "text");
    assert_eq!(suggested[0].variable_name, "text");
    assert_eq!(suggested[0].default_value, "");
    assert_eq!(suggested[0].transform, Transform::None);
    assert_eq!(suggested[0].origin, MappingOrigin::ConnectedNode);
}

#[test]
fn test_suggest_matches_case_insensitively() {
    let suggested = suggest_mappings(&["TEXT".to_string()], &available());

    assert_eq!(suggested.len(), 1);
    // The mapping references the field's real name, not the variable's casing.
    assert_eq!(suggested[0].input_field, "text");
    assert_eq!(suggested[0].variable_name, "TEXT");
}

#[test]
fn test_suggest_omits_unmatched_variables() {
    let suggested = suggest_mappings(&["text".to_string(), "city".to_string()], &available());

    assert_eq!(suggested.len(), 1);
    assert_eq!(suggested[0].variable_name, "text");
}

#[test]
fn test_suggest_direct_mapping_without_template_variables() {
    // Non-template fields still get the first available field bound to its
    // own identifier.
    let suggested = suggest_mappings(&[], &available());

    assert_eq!(suggested.len(), 1);
    assert_eq!(suggested[0].input_field, "text");
    assert_eq!(suggested[0].variable_name, "text");
}

#[test]
fn test_suggest_nothing_from_nothing() {
    assert!(suggest_mappings(&[], &[]).is_empty());
    assert!(suggest_mappings(&["text".to_string()], &[]).is_empty());
}

#[test]
fn test_suggest_first_occurrence_wins_on_collision() {
    let snapshot = create_colliding_snapshot();
    let fields = collect_input_fields(&snapshot, "prompt-1", None);
    let suggested = suggest_mappings(&["text".to_string()], &fields);

    assert_eq!(suggested.len(), 1);
    assert_eq!(suggested[0].input_field, "text");
    // Resolution will read the first candidate, which is the payload edge.
    assert_eq!(fields[0].source_node, "mapper-1");
}

#[test]
fn test_suggest_is_idempotent() {
    let variables = vec!["text".to_string(), "length".to_string()];
    let fields = available();

    let first = suggest_mappings(&variables, &fields);
    let second = suggest_mappings(&variables, &fields);
    assert_eq!(first, second);
}

#[test]
fn test_validate_empty_set_is_valid() {
    let report = validate_mappings(&[], &available());
    assert!(report.valid);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
    assert!(report.is_clean());
}

#[test]
fn test_validate_rejects_unknown_field() {
    let mapping = VariableMapping {
        input_field: "vanished".to_string(),
        variable_name: "text".to_string(),
        ..Default::default()
    };

    let report = validate_mappings(&[mapping], &available());
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert!(matches!(
        report.errors[0],
        MappingIssue::UnknownField { .. }
    ));
}

#[test]
fn test_validate_rejects_duplicate_targets() {
    let mappings = vec![
        VariableMapping::suggested("text", "prompt"),
        VariableMapping::suggested("length", "prompt"),
    ];

    let report = validate_mappings(&mappings, &available());
    assert!(!report.valid);
    assert!(matches!(
        report.errors[0],
        MappingIssue::DuplicateTarget { .. }
    ));
}

#[test]
fn test_validate_unbound_placeholder_is_soft() {
    let mapping = VariableMapping {
        variable_name: "tone".to_string(),
        ..Default::default()
    };

    let report = validate_mappings(&[mapping], &available());
    // Intentionally unmapped placeholders stay a warning, never an error.
    assert!(report.valid);
    assert!(!report.is_clean());
    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(
        report.warnings[0],
        MappingIssue::UnboundPlaceholder { .. }
    ));
}

#[test]
fn test_validate_default_satisfies_unbound_mapping() {
    let mapping = VariableMapping {
        variable_name: "tone".to_string(),
        default_value: "neutral".to_string(),
        ..Default::default()
    };

    let report = validate_mappings(&[mapping], &available());
    assert!(report.is_clean());
}
