//! Resource type directory.
//!
//! The parser never decides on its own whether a segment is a type, a field,
//! an action or an id list. It asks a [`ResourceDirectory`] which resource
//! types are registered and what each one declares.

use std::collections::{BTreeMap, HashMap};

/// Where a repository action may be addressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActionScope {
    /// Directly after the type segment: `/tasks/archive`
    Collection,
    /// After an id segment: `/tasks/1/archive`
    Instance,
    /// Either position
    #[default]
    Any,
}

impl ActionScope {
    /// Returns true if an action declared with this scope may appear at `position`.
    ///
    /// Asking for [`ActionScope::Any`] matches every declared action.
    #[must_use]
    pub fn permits(self, position: ActionScope) -> bool {
        self == ActionScope::Any || position == ActionScope::Any || self == position
    }
}

/// A named operation exposed by a resource repository.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepositoryAction {
    /// Segment that addresses the action
    pub name: String,
    /// Positions where the action is recognized
    #[cfg_attr(feature = "serde", serde(default))]
    pub scope: ActionScope,
}

impl RepositoryAction {
    /// Creates an action addressable at both collection and instance scope.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: ActionScope::Any,
        }
    }

    /// Builder method to restrict the action scope.
    #[must_use]
    pub fn with_scope(mut self, scope: ActionScope) -> Self {
        self.scope = scope;
        self
    }
}

/// A relationship field declared on a resource type.
///
/// Every relationship field is addressable two ways: behind the relationship
/// marker for its linkage, or bare for the related resources.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationshipField {
    /// Name of the field as it appears in the path
    pub json_name: String,
    /// Resource type on the other side of the relationship
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_type: Option<String>,
}

impl RelationshipField {
    /// Creates a field whose target type shares its name.
    #[must_use]
    pub fn new(json_name: impl Into<String>) -> Self {
        Self {
            json_name: json_name.into(),
            target_type: None,
        }
    }

    /// Builder method to set the target resource type.
    #[must_use]
    pub fn with_target(mut self, target_type: impl Into<String>) -> Self {
        self.target_type = Some(target_type.into());
        self
    }

    /// Name of the resource type that segments after this field resolve against.
    ///
    /// Falls back to the field name when no target type was declared.
    #[must_use]
    pub fn target(&self) -> &str {
        self.target_type.as_deref().unwrap_or(&self.json_name)
    }
}

/// A registered resource type with its relationship fields and actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceType {
    name: String,
    relationship_fields: BTreeMap<String, RelationshipField>,
    actions: BTreeMap<String, RepositoryAction>,
}

impl ResourceType {
    /// Creates a resource type with no fields and no actions.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relationship_fields: BTreeMap::new(),
            actions: BTreeMap::new(),
        }
    }

    /// Builder method to declare a relationship field.
    #[must_use]
    pub fn with_relationship(mut self, field: RelationshipField) -> Self {
        self.add_relationship(field);
        self
    }

    /// Builder method to declare a repository action.
    #[must_use]
    pub fn with_action(mut self, action: RepositoryAction) -> Self {
        self.add_action(action);
        self
    }

    /// Declares a relationship field, replacing one with the same name.
    pub fn add_relationship(&mut self, field: RelationshipField) {
        self.relationship_fields
            .insert(field.json_name.clone(), field);
    }

    /// Declares a repository action, replacing one with the same name.
    pub fn add_action(&mut self, action: RepositoryAction) {
        self.actions.insert(action.name.clone(), action);
    }

    /// The type name addressed by the root path segment.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a relationship field by its path name.
    #[must_use]
    pub fn relationship_field(&self, json_name: &str) -> Option<&RelationshipField> {
        self.relationship_fields.get(json_name)
    }

    /// Iterates over the declared relationship fields, ordered by name.
    pub fn relationship_fields(&self) -> impl Iterator<Item = &RelationshipField> {
        self.relationship_fields.values()
    }

    /// Looks up an action recognized at the given position.
    #[must_use]
    pub fn action(&self, name: &str, position: ActionScope) -> Option<&RepositoryAction> {
        self.actions
            .get(name)
            .filter(|action| action.scope.permits(position))
    }

    /// Iterates over the declared actions, ordered by name.
    pub fn actions(&self) -> impl Iterator<Item = &RepositoryAction> {
        self.actions.values()
    }
}

/// Read-only source of resource type metadata consulted while parsing.
pub trait ResourceDirectory {
    /// Looks up a registered resource type by name.
    fn resource_type(&self, name: &str) -> Option<&ResourceType>;

    /// Returns true if `name` is a registered resource type.
    fn contains(&self, name: &str) -> bool {
        self.resource_type(name).is_some()
    }
}

/// In-memory directory of resource types.
#[derive(Clone, Debug, Default)]
pub struct ResourceRegistry {
    types: HashMap<String, ResourceType>,
}

impl ResourceRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource type, returning the one it replaced.
    pub fn register(&mut self, resource_type: ResourceType) -> Option<ResourceType> {
        self.types
            .insert(resource_type.name.clone(), resource_type)
    }

    /// Builder method to register a resource type.
    #[must_use]
    pub fn with_type(mut self, resource_type: ResourceType) -> Self {
        self.register(resource_type);
        self
    }

    /// Looks up a resource type by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&ResourceType> {
        self.types.get(name)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over the registered types in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceType> {
        self.types.values()
    }
}

impl ResourceDirectory for ResourceRegistry {
    fn resource_type(&self, name: &str) -> Option<&ResourceType> {
        self.lookup(name)
    }
}

impl FromIterator<ResourceType> for ResourceRegistry {
    fn from_iter<I: IntoIterator<Item = ResourceType>>(iter: I) -> Self {
        let mut registry = Self::new();
        for resource_type in iter {
            registry.register(resource_type);
        }
        registry
    }
}
