//! Rendering of resolved paths and errors.
//!
//! Text output is meant for terminals, JSON output for scripts.

use std::fmt::Write as _;

use jsonapi_path_foundation::{Error, ErrorKind};
use jsonapi_path_parser::{JsonPath, NodeKind, PathConfig, PathSerializer};
use serde_json::{Value, json};

/// Stable name of an error kind.
#[must_use]
pub fn error_kind_name(err: &Error) -> &'static str {
    match err.kind {
        ErrorKind::NotFound(_) => "not_found",
        ErrorKind::Malformed(_) => "malformed",
        ErrorKind::UnknownField { .. } => "unknown_field",
        ErrorKind::Config(_) => "config",
    }
}

/// Renders a resolved path as indented text, one node per line.
#[must_use]
pub fn describe(path: &JsonPath, config: &PathConfig) -> String {
    let mut out = String::new();
    for (depth, node) in path.iter().enumerate() {
        let indent = "  ".repeat(depth + 1);
        let _ = write!(out, "{indent}{} {}", node.kind().label(), node.element_name());
        if let Some(ids) = node.ids() {
            let _ = write!(out, " [{ids}]");
        }
        if matches!(node.kind(), NodeKind::Resource { .. }) {
            let scope = if node.is_collection() {
                "collection"
            } else {
                "instance"
            };
            let _ = write!(out, " ({scope})");
        }
        out.push('\n');
    }
    let _ = write!(
        out,
        "  canonical: {}",
        PathSerializer::new(config).serialize(path)
    );
    out
}

/// Renders a resolved path as JSON.
#[must_use]
pub fn path_to_json(path: &JsonPath, config: &PathConfig) -> Value {
    let nodes: Vec<Value> = path
        .iter()
        .map(|node| {
            let mut value = json!({
                "kind": node.kind().label(),
                "name": node.element_name(),
            });
            if let NodeKind::Resource { ids, .. } = node.kind() {
                value["ids"] = json!(ids.as_ref().map(|ids| ids.ids()));
                value["collection"] = json!(node.is_collection());
            }
            value
        })
        .collect();

    json!({
        "resource_type": path.resource_type(),
        "action": path.action(),
        "canonical": PathSerializer::new(config).serialize(path),
        "nodes": nodes,
    })
}

/// Renders an error as JSON.
#[must_use]
pub fn error_to_json(err: &Error) -> Value {
    let mut value = json!({
        "error": error_kind_name(err),
        "message": err.to_string(),
    });
    if let Some(segment) = err.context.as_ref().and_then(|ctx| ctx.segment) {
        value["segment"] = json!(segment);
    }
    value
}

/// Renders the outcome of parsing `raw` as one JSON object.
#[must_use]
pub fn outcome_to_json(
    raw: &str,
    outcome: &jsonapi_path_foundation::Result<JsonPath>,
    config: &PathConfig,
) -> Value {
    let body = match outcome {
        Ok(path) => path_to_json(path, config),
        Err(err) => error_to_json(err),
    };
    json!({ "input": raw, "result": body })
}
