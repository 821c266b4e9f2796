//! Path nodes and chains.
//!
//! A parsed path is a chain of nodes from the root segment to the leaf. The
//! chain is stored as an arena: nodes live in path order in one vector and
//! link to each other through [`NodeIndex`] values.

use std::fmt;

use jsonapi_path_foundation::{Error, IdList, Result};

use crate::config::PathConfig;
use crate::serializer::PathSerializer;

/// Index of a node inside its [`JsonPath`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Returns the position of the node in path order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a single node addresses.
///
/// Only resources carry identifiers: a relationship or field node holding
/// ids cannot be constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A resource collection, a single instance, or several instances
    Resource {
        /// Resource type name
        name: String,
        /// Addressed instances; `None` addresses the whole collection
        ids: Option<IdList>,
    },
    /// Linkage of a relationship field (behind the relationship marker)
    Relationship {
        /// Relationship field name
        name: String,
    },
    /// Resources related through a relationship field
    Field {
        /// Relationship field name
        name: String,
    },
    /// A repository action; always the leaf
    Action {
        /// Action name
        name: String,
    },
}

impl NodeKind {
    /// Creates a resource collection node.
    #[must_use]
    pub fn resource(name: impl Into<String>) -> Self {
        Self::Resource {
            name: name.into(),
            ids: None,
        }
    }

    /// Creates a resource node addressing the given instances.
    #[must_use]
    pub fn resource_with_ids(name: impl Into<String>, ids: impl Into<IdList>) -> Self {
        Self::Resource {
            name: name.into(),
            ids: Some(ids.into()),
        }
    }

    /// Creates a relationship linkage node.
    #[must_use]
    pub fn relationship(name: impl Into<String>) -> Self {
        Self::Relationship { name: name.into() }
    }

    /// Creates a related field node.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field { name: name.into() }
    }

    /// Creates an action node.
    #[must_use]
    pub fn action(name: impl Into<String>) -> Self {
        Self::Action { name: name.into() }
    }

    /// The type, field or action name of this node.
    #[must_use]
    pub fn element_name(&self) -> &str {
        match self {
            Self::Resource { name, .. }
            | Self::Relationship { name }
            | Self::Field { name }
            | Self::Action { name } => name,
        }
    }

    /// The addressed identifiers, if any.
    #[must_use]
    pub fn ids(&self) -> Option<&IdList> {
        match self {
            Self::Resource { ids, .. } => ids.as_ref(),
            _ => None,
        }
    }

    /// Returns true for a resource node addressing zero or several instances.
    ///
    /// A resource without ids is the whole collection, one with several ids a
    /// "many" selection. Other kinds are never collections by this measure.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        match self {
            Self::Resource { ids: None, .. } => true,
            Self::Resource { ids: Some(ids), .. } => ids.is_many(),
            _ => false,
        }
    }

    /// Short lowercase name of the variant.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Resource { .. } => "resource",
            Self::Relationship { .. } => "relationship",
            Self::Field { .. } => "field",
            Self::Action { .. } => "action",
        }
    }
}

/// One node of a [`JsonPath`] with its links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathNode {
    kind: NodeKind,
    parent: Option<NodeIndex>,
    child: Option<NodeIndex>,
}

impl PathNode {
    /// What this node addresses.
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The node immediately before this one, if any.
    #[must_use]
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// The node immediately after this one, if any.
    #[must_use]
    pub fn child(&self) -> Option<NodeIndex> {
        self.child
    }

    /// Shorthand for [`NodeKind::element_name`].
    #[must_use]
    pub fn element_name(&self) -> &str {
        self.kind.element_name()
    }

    /// Shorthand for [`NodeKind::ids`].
    #[must_use]
    pub fn ids(&self) -> Option<&IdList> {
        self.kind.ids()
    }

    /// Shorthand for [`NodeKind::is_collection`].
    #[must_use]
    pub fn is_collection(&self) -> bool {
        self.kind.is_collection()
    }
}

/// A resolved path: a non-empty chain with exactly one root and one leaf.
///
/// Equality is structural. Two chains are equal when their node kinds,
/// names and ids match in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonPath {
    nodes: Vec<PathNode>,
}

impl JsonPath {
    /// Builds a chain from node kinds in path order, wiring all links.
    ///
    /// # Errors
    ///
    /// Returns a malformed error if the kinds do not form a valid chain:
    /// - the chain is empty
    /// - the root is not a resource, or a resource appears below the root
    /// - an action is followed by another node
    /// - a resource carries an empty id list
    /// - a field node does not directly follow a resource with ids
    ///
    /// An id equal to a collection action name of its type, or to the
    /// relationship marker, is accepted here but reads back differently once
    /// serialized and parsed.
    pub fn from_kinds(kinds: Vec<NodeKind>) -> Result<Self> {
        let Some(last) = kinds.len().checked_sub(1) else {
            return Err(Error::malformed("Path is empty"));
        };

        for (i, kind) in kinds.iter().enumerate() {
            match kind {
                NodeKind::Resource { ids: Some(ids), .. } if ids.is_empty() => {
                    return Err(Error::malformed("resource id list cannot be empty"));
                }
                NodeKind::Resource { .. } if i > 0 => {
                    return Err(Error::malformed(
                        "resource node can only open a path",
                    ));
                }
                NodeKind::Relationship { .. } | NodeKind::Field { .. } | NodeKind::Action { .. }
                    if i == 0 =>
                {
                    return Err(Error::malformed(format!(
                        "path cannot start with a {} node",
                        kind.label()
                    )));
                }
                NodeKind::Action { .. } if i != last => {
                    return Err(Error::malformed("action must be the last path segment"));
                }
                // A bare field name after anything but an id segment reads as ids.
                NodeKind::Field { .. } if kinds[i - 1].ids().is_none() => {
                    return Err(Error::malformed(
                        "field node must follow a resource addressed by id",
                    ));
                }
                _ => {}
            }
        }

        let nodes = kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| PathNode {
                kind,
                parent: i.checked_sub(1).map(NodeIndex),
                child: (i < last).then_some(NodeIndex(i + 1)),
            })
            .collect();

        Ok(Self { nodes })
    }

    /// Index of the root node.
    #[must_use]
    pub fn root_index(&self) -> NodeIndex {
        NodeIndex(0)
    }

    /// Index of the leaf node.
    #[must_use]
    pub fn leaf_index(&self) -> NodeIndex {
        NodeIndex(self.nodes.len() - 1)
    }

    /// The first node of the path.
    #[must_use]
    pub fn root(&self) -> &PathNode {
        &self.nodes[0]
    }

    /// The last node of the path.
    #[must_use]
    pub fn leaf(&self) -> &PathNode {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Looks up a node by index.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> Option<&PathNode> {
        self.nodes.get(index.0)
    }

    /// The parent of the node at `index`.
    #[must_use]
    pub fn parent_of(&self, index: NodeIndex) -> Option<&PathNode> {
        self.node(index)?.parent.and_then(|p| self.node(p))
    }

    /// The child of the node at `index`.
    #[must_use]
    pub fn child_of(&self, index: NodeIndex) -> Option<&PathNode> {
        self.node(index)?.child.and_then(|c| self.node(c))
    }

    /// Number of nodes in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a chain holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the nodes from root to leaf.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PathNode> {
        self.nodes.iter()
    }

    /// Iterates over the node kinds from root to leaf.
    pub fn kinds(&self) -> impl Iterator<Item = &NodeKind> {
        self.nodes.iter().map(PathNode::kind)
    }

    /// Consumes the chain, returning its node kinds in path order.
    #[must_use]
    pub fn into_kinds(self) -> Vec<NodeKind> {
        self.nodes.into_iter().map(|node| node.kind).collect()
    }

    /// The resource type named by the root segment.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        self.root().element_name()
    }

    /// The action name if the path addresses a repository action.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        match self.leaf().kind() {
            NodeKind::Action { name } => Some(name),
            _ => None,
        }
    }

    /// Returns true if the root addresses a collection (see [`NodeKind::is_collection`]).
    #[must_use]
    pub fn is_collection(&self) -> bool {
        self.root().is_collection()
    }

    /// Serializes the chain using the given configuration.
    #[must_use]
    pub fn to_path_string(&self, config: &PathConfig) -> String {
        PathSerializer::new(config).serialize(self)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_string(&PathConfig::default()))
    }
}
