//! Parser tests.
//!
//! Tests for resolving raw paths into node chains.

use jsonapi_path_foundation::{ErrorKind, IdList};
use jsonapi_path_parser::{
    JsonPath, NodeKind, ParseResult, PathConfig, PathParser, ResourceRegistry, parse_path,
};

use crate::fixtures::registry;

fn parse(raw: &str) -> jsonapi_path_foundation::Result<JsonPath> {
    parse_path(raw, &registry())
}

fn kinds(raw: &str) -> Vec<NodeKind> {
    parse(raw).unwrap().into_kinds()
}

fn ids(list: &str) -> IdList {
    IdList::parse(list)
}

fn malformed_reason(raw: &str) -> String {
    match parse(raw).unwrap_err().kind {
        ErrorKind::Malformed(reason) => reason,
        other => panic!("expected malformed error for {raw}, got {other:?}"),
    }
}

// =============================================================================
// Empty and root-only paths
// =============================================================================

#[test]
fn empty_paths_are_malformed() {
    for raw in ["", "/", "//", "   "] {
        assert_eq!(malformed_reason(raw), "Path is empty", "input {raw:?}");
    }
}

#[test]
fn flat_collection() {
    let path = parse("/resource1/").unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path.root().kind(), &NodeKind::resource("resource1"));
    assert!(path.root().ids().is_none());
    assert!(path.is_collection());
}

#[test]
fn separators_are_optional() {
    assert_eq!(kinds("resource1"), kinds("/resource1/"));
    assert_eq!(kinds("resource1/1"), kinds("/resource1/1/"));
}

#[test]
fn flat_instance() {
    let path = parse("/resource1/1").unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path.root().ids(), Some(&ids("1")));
    assert!(!path.is_collection());
}

#[test]
fn multiple_instances_are_a_collection() {
    let path = parse("/resource1/1,2").unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(
        path.root().ids().map(IdList::ids),
        Some(["1".to_string(), "2".to_string()].as_slice())
    );
    assert!(path.is_collection());
}

#[test]
fn trailing_id_separator_is_preserved() {
    let path = parse("/resource1/1,").unwrap();
    assert_eq!(path.root().ids(), Some(&ids("1,")));
}

// =============================================================================
// Not found
// =============================================================================

#[test]
fn unknown_root_is_not_found() {
    let err = parse("/unknown/1").unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound("/unknown/1".to_string()));
    assert!(!err.is_client_error());
}

#[test]
fn unknown_root_resolves_to_not_found() {
    let registry = registry();
    let parser = PathParser::new(&registry);
    assert_eq!(
        parser.resolve("/unknown"),
        ParseResult::NotFound("/unknown".to_string())
    );
}

#[test]
fn empty_registry_finds_nothing() {
    let registry = ResourceRegistry::new();
    assert!(parse_path("/resource1", &registry).unwrap_err().is_not_found());
}

// =============================================================================
// Nested fields and relationships
// =============================================================================

#[test]
fn nested_field() {
    assert_eq!(
        kinds("/resource1/1/resource2"),
        vec![
            NodeKind::resource_with_ids("resource1", "1"),
            NodeKind::field("resource2"),
        ]
    );
}

#[test]
fn ids_after_field_are_malformed() {
    assert_eq!(
        malformed_reason("/resource1/1/resource2/2"),
        "RelationshipsPath and FieldPath cannot contain ids"
    );
}

#[test]
fn nested_relationship() {
    let path = parse("/resource1/1/relationships/resource2/").unwrap();
    assert_eq!(
        path.clone().into_kinds(),
        vec![
            NodeKind::resource_with_ids("resource1", "1"),
            NodeKind::relationship("resource2"),
        ]
    );
    assert!(path.leaf().ids().is_none());
    assert_eq!(path.leaf().parent(), Some(path.root_index()));
    assert_eq!(path.root().child(), Some(path.leaf_index()));
}

#[test]
fn relationship_on_collection() {
    assert_eq!(
        kinds("/resource1/relationships/owner"),
        vec![
            NodeKind::resource("resource1"),
            NodeKind::relationship("owner"),
        ]
    );
}

#[test]
fn ids_after_relationship_are_malformed() {
    assert!(parse("/resource1/1/relationships/owner/5")
        .unwrap_err()
        .is_malformed());
}

#[test]
fn marker_without_field_is_malformed() {
    assert_eq!(
        malformed_reason("/resource1/1/relationships/"),
        "No type field defined after links marker"
    );
    assert_eq!(
        malformed_reason("/resource1/1/relationships/relationships/owner"),
        "No type field defined after links marker"
    );
}

#[test]
fn marker_cannot_open_a_path() {
    assert!(parse("/relationships/resource1").unwrap_err().is_malformed());
    assert!(parse("/relationships/unknown").unwrap_err().is_malformed());
}

#[test]
fn unknown_field_is_reported() {
    let err = parse("/resource1/1/missing").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UnknownField {
            resource_type: "resource1".to_string(),
            field: "missing".to_string(),
        }
    );
    assert!(parse("/resource1/1/relationships/missing")
        .unwrap_err()
        .is_unknown_field());
}

#[test]
fn fields_resolve_against_target_type() {
    // owner points at people, which relates to resource1
    assert_eq!(
        kinds("/resource1/1/owner/relationships/resource1"),
        vec![
            NodeKind::resource_with_ids("resource1", "1"),
            NodeKind::field("owner"),
            NodeKind::relationship("resource1"),
        ]
    );
    // people has no resource2 field
    assert!(parse("/resource1/1/owner/relationships/resource2")
        .unwrap_err()
        .is_unknown_field());
}

#[test]
fn unregistered_target_stops_resolution() {
    assert_eq!(
        kinds("/resource1/1/ghost"),
        vec![
            NodeKind::resource_with_ids("resource1", "1"),
            NodeKind::field("ghost"),
        ]
    );
    let err = parse("/resource1/1/ghost/relationships/anything").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UnknownField {
            resource_type: "ghosts".to_string(),
            field: "anything".to_string(),
        }
    );
}

#[test]
fn three_node_chain_links() {
    let path = parse("/resource1/1/owner/relationships/resource1").unwrap();
    let middle = path.child_of(path.root_index()).unwrap();
    assert_eq!(middle.element_name(), "owner");
    assert_eq!(middle.parent(), Some(path.root_index()));
    assert_eq!(middle.child(), Some(path.leaf_index()));
    assert_eq!(path.iter().filter(|n| n.parent().is_none()).count(), 1);
    assert_eq!(path.iter().filter(|n| n.child().is_none()).count(), 1);
}

// =============================================================================
// Actions
// =============================================================================

#[test]
fn collection_action() {
    let path = parse("/resource1/count").unwrap();
    assert_eq!(
        path.clone().into_kinds(),
        vec![NodeKind::resource("resource1"), NodeKind::action("count")]
    );
    assert_eq!(path.action(), Some("count"));
    assert!(path.is_collection());
}

#[test]
fn instance_action() {
    assert_eq!(
        kinds("/resource1/1/close"),
        vec![
            NodeKind::resource_with_ids("resource1", "1"),
            NodeKind::action("close"),
        ]
    );
}

#[test]
fn any_scope_action_works_at_both_positions() {
    assert_eq!(parse("/resource1/archive").unwrap().action(), Some("archive"));
    assert_eq!(parse("/resource1/1,2/archive").unwrap().action(), Some("archive"));
}

#[test]
fn instance_only_action_reads_as_ids_at_collection_scope() {
    assert_eq!(
        kinds("/resource1/close"),
        vec![NodeKind::resource_with_ids("resource1", "close")]
    );
}

#[test]
fn collection_only_action_is_a_field_lookup_at_instance_scope() {
    assert!(parse("/resource1/1/count").unwrap_err().is_unknown_field());
}

#[test]
fn action_on_related_field() {
    assert_eq!(
        kinds("/resource1/1/resource2/publish"),
        vec![
            NodeKind::resource_with_ids("resource1", "1"),
            NodeKind::field("resource2"),
            NodeKind::action("publish"),
        ]
    );
}

#[test]
fn segments_after_action_are_malformed() {
    assert_eq!(
        malformed_reason("/resource1/archive/resource2"),
        "action must be the last path segment"
    );
    assert!(parse("/resource1/1/close/relationships/owner")
        .unwrap_err()
        .is_malformed());
}

// =============================================================================
// Configuration and concurrency
// =============================================================================

#[test]
fn custom_relationship_mark() {
    let registry = registry();
    let config = PathConfig::new().with_relationship_mark("links");
    let parser = PathParser::with_config(&registry, &config);

    assert_eq!(
        parser.parse("/resource1/1/links/owner").unwrap().into_kinds(),
        vec![
            NodeKind::resource_with_ids("resource1", "1"),
            NodeKind::relationship("owner"),
        ]
    );
    assert!(parser
        .parse("/resource1/1/relationships/owner")
        .unwrap_err()
        .is_unknown_field());
}

#[test]
fn parallel_parses_share_a_registry() {
    let registry = registry();
    let inputs = [
        "/resource1/1",
        "/resource1/1,2/archive",
        "/resource1/1/relationships/owner",
        "/resource2/7/resource1",
    ];

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|raw| {
                let registry = &registry;
                scope.spawn(move || parse_path(raw, registry))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (raw, result) in inputs.iter().zip(results) {
        assert_eq!(result.unwrap(), parse(raw).unwrap());
    }
}

#[test]
fn error_context_records_path_and_segment() {
    let err = parse("/resource1/1/relationships/missing").unwrap_err();
    let ctx = err.context.expect("context");
    assert_eq!(ctx.path.as_deref(), Some("/resource1/1/relationships/missing"));
    assert_eq!(ctx.segment, Some(2));
}
