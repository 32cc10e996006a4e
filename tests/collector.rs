//! Tests for schema field extraction and graph field collection.
mod common;
use common::*;
use hokan::prelude::*;
use hokan::schema::port_fields;

#[test]
fn test_default_port_yields_bundled_sub_fields() {
    // Schema {properties: {output: {properties: {text}}}} on the default
    // port exposes the bundle's sub-values, not the bundle itself.
    let schema = bundled_schema(&["text"]);
    let fields = port_fields(Some(&schema), DEFAULT_OUTPUT_PORT);

    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "text");
    assert_eq!(fields[0].kind, FieldKind::String);
}

#[test]
fn test_dotted_port_yields_single_sub_field() {
    let schema = bundled_schema(&["text", "length"]);

    let fields = port_fields(Some(&schema), "output.length");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "length");

    let missing = port_fields(Some(&schema), "output.tone");
    assert!(missing.is_empty());
}

#[test]
fn test_other_ports_expose_full_surface() {
    // The port id validates topology only; it never narrows visibility.
    let schema = flat_schema(&["text", "tone", "length"]);

    let fields = port_fields(Some(&schema), "secondary");
    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["text", "tone", "length"]);
}

#[test]
fn test_default_port_without_bundle_falls_back_to_full_surface() {
    let schema = flat_schema(&["text"]);
    let fields = port_fields(Some(&schema), DEFAULT_OUTPUT_PORT);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "text");
}

#[test]
fn test_absent_or_empty_schema_exposes_nothing() {
    assert!(port_fields(None, DEFAULT_OUTPUT_PORT).is_empty());
    assert!(port_fields(Some(&OutputSchema::default()), DEFAULT_OUTPUT_PORT).is_empty());
}

#[test]
fn test_collect_through_legacy_edge() {
    let snapshot = create_chat_snapshot();
    let fields = collect_input_fields(&snapshot, "prompt-1", None);

    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["text", "length"]);
    assert_eq!(fields[0].source_node, "text-input-1");
    assert_eq!(fields[0].source_port, DEFAULT_OUTPUT_PORT);
}

#[test]
fn test_payload_edge_bypasses_schema() {
    let snapshot = create_colliding_snapshot();
    let fields = collect_input_fields(&snapshot, "prompt-1", None);

    // Payload entries first (edge order), then the legacy edge's bundle.
    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["text", "tone", "text"]);
    assert_eq!(fields[0].source_node, "mapper-1");
    assert_eq!(fields[2].source_node, "text-input-1");
}

#[test]
fn test_colliding_names_both_retained() {
    let snapshot = create_colliding_snapshot();
    let fields = collect_input_fields(&snapshot, "prompt-1", None);

    let text_candidates: Vec<_> = fields.iter().filter(|f| f.name == "text").collect();
    assert_eq!(text_candidates.len(), 2);
    // First occurrence (the payload edge) is the one suggestion will take.
    assert_eq!(text_candidates[0].source_node, "mapper-1");
}

#[test]
fn test_broken_edge_reference_contributes_nothing() {
    let mut snapshot = create_chat_snapshot();
    snapshot.edges.push(edge("deleted-node", "prompt-1"));

    let fields = collect_input_fields(&snapshot, "prompt-1", None);
    assert_eq!(fields.len(), 2);
}

#[test]
fn test_target_port_filter() {
    let mut snapshot = create_chat_snapshot();
    snapshot.edges[0].target_port = Some("system".to_string());

    assert!(collect_input_fields(&snapshot, "prompt-1", Some("user")).is_empty());
    assert_eq!(
        collect_input_fields(&snapshot, "prompt-1", Some("system")).len(),
        2
    );
    // No port filter selects every inbound edge.
    assert_eq!(collect_input_fields(&snapshot, "prompt-1", None).len(), 2);
}

#[test]
fn test_unconnected_node_has_no_fields() {
    let snapshot = create_chat_snapshot();
    assert!(collect_input_fields(&snapshot, "text-input-1", None).is_empty());
}

#[test]
fn test_field_cache_invalidates_on_revision_change() {
    let snapshot = create_chat_snapshot();
    let mut cache = FieldCache::new();
    assert_eq!(cache.collect(&snapshot, "prompt-1", None).len(), 2);

    // Same revision: the stale entry is served even though the edges moved.
    let mut changed = snapshot.clone();
    changed.edges.clear();
    assert_eq!(cache.collect(&changed, "prompt-1", None).len(), 2);

    // Bumping the revision invalidates every entry.
    changed.revision += 1;
    assert!(cache.collect(&changed, "prompt-1", None).is_empty());
}
