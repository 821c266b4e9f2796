//! Runtime configuration.
//!
//! A JSON document describes the parser settings and every resource type
//! the directory should know about:
//!
//! ```json
//! {
//!   "parser": { "relationship_mark": "relationships" },
//!   "resources": [
//!     {
//!       "name": "articles",
//!       "relationships": [{ "json_name": "author", "target_type": "people" }],
//!       "actions": [{ "name": "publish", "scope": "instance" }]
//!     },
//!     { "name": "people" }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use jsonapi_path_foundation::{Error, ErrorContext, ID_SEPARATOR, PATH_SEPARATOR, Result};
use jsonapi_path_parser::{
    PathConfig, RelationshipField, RepositoryAction, ResourceRegistry, ResourceType,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A resource type as written in the configuration file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Type name used as the root path segment
    pub name: String,
    /// Declared relationship fields
    #[serde(default)]
    pub relationships: Vec<RelationshipField>,
    /// Declared repository actions
    #[serde(default)]
    pub actions: Vec<RepositoryAction>,
}

impl ResourceDefinition {
    /// Builds the directory entry for this definition.
    #[must_use]
    pub fn to_resource_type(&self) -> ResourceType {
        let mut resource_type = ResourceType::new(&self.name);
        for field in &self.relationships {
            resource_type.add_relationship(field.clone());
        }
        for action in &self.actions {
            resource_type.add_action(action.clone());
        }
        resource_type
    }
}

/// Parser settings plus resource type definitions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Settings shared by the parser and serializer
    pub parser: PathConfig,
    /// Resource types to register
    pub resources: Vec<ResourceDefinition>,
}

impl RuntimeConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the document is not valid JSON or
    /// does not match the expected shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(format!("invalid config: {e}")))
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&contents).map_err(|err| {
            err.with_context(ErrorContext::new().with_path(path.display().to_string()))
        })
    }

    /// Checks the parser settings and the resource definitions.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid relationship marker, an
    /// empty or duplicate type name, a name containing a separator, or a
    /// type named like the relationship marker.
    pub fn validate(&self) -> Result<()> {
        self.parser.validate()?;

        let mut seen = HashSet::new();
        for resource in &self.resources {
            let name = resource.name.as_str();
            if name.is_empty() {
                return Err(Error::config("resource type name must not be empty"));
            }
            if name.contains(PATH_SEPARATOR) || name.contains(ID_SEPARATOR) {
                return Err(Error::config(format!(
                    "resource type name contains a separator: {name}"
                )));
            }
            if name == self.parser.relationship_mark {
                return Err(Error::config(format!(
                    "resource type name is reserved: {name}"
                )));
            }
            if !seen.insert(name) {
                return Err(Error::config(format!("duplicate resource type: {name}")));
            }
        }
        Ok(())
    }

    /// Validates the configuration and builds a registry from it.
    ///
    /// # Errors
    ///
    /// See [`RuntimeConfig::validate`].
    pub fn build_registry(&self) -> Result<ResourceRegistry> {
        self.validate()?;
        let registry: ResourceRegistry = self
            .resources
            .iter()
            .map(ResourceDefinition::to_resource_type)
            .collect();
        info!(types = registry.len(), "resource registry built");
        Ok(registry)
    }
}
