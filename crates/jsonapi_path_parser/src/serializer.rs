//! Path serialization.
//!
//! Turns a chain back into its canonical string, e.g. for `self` and
//! `related` links. The result preserves the structure of the parsed path,
//! not its exact spelling: `tasks/1` and `/tasks/1/` both come out as
//! `/tasks/1/`.

use jsonapi_path_foundation::PATH_SEPARATOR;

use crate::config::PathConfig;
use crate::node::{JsonPath, NodeIndex, NodeKind};

/// Serializes chains using a fixed configuration.
#[derive(Clone, Copy, Debug)]
pub struct PathSerializer<'c> {
    config: &'c PathConfig,
}

impl<'c> PathSerializer<'c> {
    /// Creates a serializer that writes the configured relationship marker.
    #[must_use]
    pub fn new(config: &'c PathConfig) -> Self {
        Self { config }
    }

    /// Serializes the whole chain.
    #[must_use]
    pub fn serialize(&self, path: &JsonPath) -> String {
        self.serialize_from(path, path.leaf_index())
            .unwrap_or_else(|| PATH_SEPARATOR.to_string())
    }

    /// Serializes the chain from its root down to the node at `leaf`.
    ///
    /// Returns `None` if `leaf` does not belong to `path`.
    #[must_use]
    pub fn serialize_from(&self, path: &JsonPath, leaf: NodeIndex) -> Option<String> {
        let mut parts = Vec::new();
        let mut current = Some(path.node(leaf)?);
        while let Some(node) = current {
            parts.push(self.part(node.kind()));
            current = node.parent().and_then(|parent| path.node(parent));
        }
        parts.reverse();

        let mut out = String::from(PATH_SEPARATOR);
        for part in parts {
            out.push_str(&part);
            out.push(PATH_SEPARATOR);
        }
        Some(out)
    }

    fn part(&self, kind: &NodeKind) -> String {
        match kind {
            NodeKind::Relationship { name } => {
                format!("{}{PATH_SEPARATOR}{name}", self.config.relationship_mark)
            }
            NodeKind::Field { name } | NodeKind::Action { name } => name.clone(),
            NodeKind::Resource { name, ids: None } => name.clone(),
            NodeKind::Resource {
                name,
                ids: Some(ids),
            } => format!("{name}{PATH_SEPARATOR}{ids}"),
        }
    }
}

/// Serializes a chain with the default configuration.
#[must_use]
pub fn serialize_path(path: &JsonPath) -> String {
    PathSerializer::new(&PathConfig::default()).serialize(path)
}
