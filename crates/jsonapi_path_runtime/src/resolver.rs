//! Owning path resolver.
//!
//! Request routing code usually wants one long-lived object that holds the
//! directory and the parser settings together. [`PathResolver`] is that
//! object; parsing through it borrows nothing from the caller but the path.

use std::path::Path;

use jsonapi_path_foundation::Result;
use jsonapi_path_parser::{
    JsonPath, NodeIndex, ParseResult, PathConfig, PathParser, PathSerializer, ResourceRegistry,
};

use crate::config::RuntimeConfig;

/// A registry bundled with the settings used to parse and serialize paths.
#[derive(Clone, Debug, Default)]
pub struct PathResolver {
    config: PathConfig,
    registry: ResourceRegistry,
}

impl PathResolver {
    /// Creates a resolver from parts.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the parser settings are invalid.
    pub fn new(config: PathConfig, registry: ResourceRegistry) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, registry })
    }

    /// Creates a resolver from a runtime configuration.
    ///
    /// # Errors
    ///
    /// See [`RuntimeConfig::build_registry`].
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let registry = config.build_registry()?;
        Ok(Self {
            config: config.parser.clone(),
            registry,
        })
    }

    /// Creates a resolver from a configuration file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be loaded or is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(&RuntimeConfig::from_file(path)?)
    }

    /// The parser settings.
    #[must_use]
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// The resource directory.
    #[must_use]
    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    fn parser(&self) -> PathParser<'_, '_> {
        PathParser::with_config(&self.registry, &self.config)
    }

    /// Parses a request path.
    ///
    /// # Errors
    ///
    /// See [`PathParser::parse`].
    pub fn parse(&self, raw: &str) -> Result<JsonPath> {
        self.parser().parse(raw)
    }

    /// Parses a request path into a [`ParseResult`].
    #[must_use]
    pub fn resolve(&self, raw: &str) -> ParseResult {
        self.parser().resolve(raw)
    }

    /// Serializes a chain with this resolver's relationship marker.
    #[must_use]
    pub fn serialize(&self, path: &JsonPath) -> String {
        PathSerializer::new(&self.config).serialize(path)
    }

    /// Serializes the chain from its root down to `leaf`, e.g. a `self` link
    /// for the resource that owns a relationship.
    #[must_use]
    pub fn serialize_from(&self, path: &JsonPath, leaf: NodeIndex) -> Option<String> {
        PathSerializer::new(&self.config).serialize_from(path, leaf)
    }
}
