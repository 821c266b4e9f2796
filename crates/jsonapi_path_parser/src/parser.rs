//! The path parser.
//!
//! Scans the segments of a path left to right. At each step the directory
//! decides what the next segment is: a resource type, a relationship field,
//! an action, or an id list.

use std::sync::LazyLock;

use jsonapi_path_foundation::{Error, ErrorContext, ErrorKind, IdList, Result};
use tracing::{debug, trace};

use crate::config::PathConfig;
use crate::directory::{ActionScope, ResourceDirectory, ResourceType};
use crate::node::{JsonPath, NodeKind};
use crate::segments::PathSegments;

/// The default configuration used by [`PathParser::new`].
static DEFAULT_CONFIG: LazyLock<PathConfig> = LazyLock::new(PathConfig::default);

/// Result of resolving a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// The path addresses a known route
    Success(JsonPath),
    /// The root segment is not a registered resource type
    NotFound(String),
    /// The path is invalid for a known resource type
    Error(Error),
}

impl ParseResult {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&JsonPath> {
        match self {
            Self::Success(path) => Some(path),
            _ => None,
        }
    }

    /// Converts back into a plain result.
    ///
    /// # Errors
    ///
    /// Returns the not found or parse error carried by this result.
    pub fn into_result(self) -> Result<JsonPath> {
        match self {
            Self::Success(path) => Ok(path),
            Self::NotFound(path) => Err(Error::not_found(path)),
            Self::Error(err) => Err(err),
        }
    }
}

impl From<Result<JsonPath>> for ParseResult {
    fn from(result: Result<JsonPath>) -> Self {
        match result {
            Ok(path) => Self::Success(path),
            Err(Error {
                kind: ErrorKind::NotFound(path),
                ..
            }) => Self::NotFound(path),
            Err(err) => Self::Error(err),
        }
    }
}

/// What the next segment resolves against.
#[derive(Clone, Copy)]
enum Scope<'a> {
    /// Nothing consumed yet; the segment names a resource type
    Root,
    /// The segment names a relationship field of this type
    Type(&'a ResourceType),
    /// The previous field points at a type the directory does not know
    Unregistered(&'a str),
}

impl<'a> Scope<'a> {
    fn resource_type(self) -> Option<&'a ResourceType> {
        match self {
            Self::Type(resource_type) => Some(resource_type),
            Self::Root | Self::Unregistered(_) => None,
        }
    }
}

/// Parses request paths against a resource directory.
///
/// The parser keeps no state between calls and only reads the directory.
#[derive(Clone, Copy)]
pub struct PathParser<'d, 'c> {
    directory: &'d dyn ResourceDirectory,
    config: &'c PathConfig,
}

impl<'d> PathParser<'d, 'static> {
    /// Creates a parser with the default configuration.
    #[must_use]
    pub fn new(directory: &'d dyn ResourceDirectory) -> Self {
        Self {
            directory,
            config: &DEFAULT_CONFIG,
        }
    }
}

impl<'d, 'c> PathParser<'d, 'c> {
    /// Creates a parser with a custom configuration.
    #[must_use]
    pub fn with_config(directory: &'d dyn ResourceDirectory, config: &'c PathConfig) -> Self {
        Self { directory, config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &PathConfig {
        self.config
    }

    /// Parses a path such as `/tasks/1/relationships/project`.
    ///
    /// The path must not contain a scheme, host or query string. Leading and
    /// trailing separators are optional.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the root segment is not a registered resource type
    /// - `Malformed` if the path is structurally invalid
    /// - `UnknownField` if a segment names no relationship field of its type
    pub fn parse(&self, raw: &str) -> Result<JsonPath> {
        debug!(path = raw, "parsing path");
        let kinds = self.scan(raw)?;
        let path = JsonPath::from_kinds(kinds)
            .map_err(|err| err.with_context(ErrorContext::new().with_path(raw)))?;
        debug!(path = raw, nodes = path.len(), "path resolved");
        Ok(path)
    }

    /// Parses a path, folding the outcome into a [`ParseResult`].
    #[must_use]
    pub fn resolve(&self, raw: &str) -> ParseResult {
        self.parse(raw).into()
    }

    fn scan(&self, raw: &str) -> Result<Vec<NodeKind>> {
        let mut segments = PathSegments::new(raw, &self.config.relationship_mark);
        if segments.is_empty() {
            return Err(Error::malformed("Path is empty")
                .with_context(ErrorContext::new().with_path(raw)));
        }

        let fail = |err: Error, segment: usize| {
            debug!(path = raw, segment, error = %err, "path rejected");
            err.with_context(ErrorContext::new().with_path(raw).with_segment(segment))
        };

        let mut kinds: Vec<NodeKind> = Vec::new();
        let mut scope = Scope::Root;

        while !segments.is_exhausted() {
            let start = segments.position();

            if matches!(kinds.last(), Some(NodeKind::Action { .. })) {
                return Err(fail(
                    Error::malformed("action must be the last path segment"),
                    start,
                ));
            }

            let relationship_mark = segments.advance_if_marker();
            let Some(element_name) = segments.advance_element() else {
                return Err(fail(
                    Error::malformed("No type field defined after links marker"),
                    start,
                ));
            };

            let (node, next_scope) = match scope {
                Scope::Root => {
                    if relationship_mark {
                        return Err(fail(
                            Error::malformed("relationship marker cannot open a path"),
                            start,
                        ));
                    }
                    let Some(resource_type) = self.directory.resource_type(element_name) else {
                        debug!(path = raw, resource = element_name, "unknown resource type");
                        return Err(Error::not_found(raw));
                    };
                    (NodeKind::resource(element_name), Scope::Type(resource_type))
                }
                Scope::Type(owner) => {
                    let Some(field) = owner.relationship_field(element_name) else {
                        return Err(fail(
                            Error::unknown_field(owner.name(), element_name),
                            start,
                        ));
                    };
                    let node = if relationship_mark {
                        NodeKind::relationship(element_name)
                    } else {
                        NodeKind::field(element_name)
                    };
                    let next_scope = match self.directory.resource_type(field.target()) {
                        Some(target) => Scope::Type(target),
                        None => Scope::Unregistered(field.target()),
                    };
                    (node, next_scope)
                }
                Scope::Unregistered(target) => {
                    return Err(fail(Error::unknown_field(target, element_name), start));
                }
            };

            let (ids, action) = Self::lookahead(&mut segments, next_scope.resource_type());

            let node = match (node, ids) {
                (NodeKind::Resource { name, .. }, ids) => NodeKind::Resource { name, ids },
                (node, None) => node,
                (_, Some(_)) => {
                    return Err(fail(
                        Error::malformed("RelationshipsPath and FieldPath cannot contain ids"),
                        start,
                    ));
                }
            };

            trace!(kind = node.label(), name = node.element_name(), "node resolved");
            kinds.push(node);
            if let Some(action) = action {
                trace!(action, "action resolved");
                kinds.push(NodeKind::action(action));
            }
            scope = next_scope;
        }

        Ok(kinds)
    }

    /// Consumes an optional action or id segment following an element.
    ///
    /// A registered collection action wins over an id list; after an id list,
    /// a registered instance action may follow.
    fn lookahead<'s>(
        segments: &mut PathSegments<'s>,
        resolved: Option<&ResourceType>,
    ) -> (Option<IdList>, Option<&'s str>) {
        let is_action = |segment: &str, scope: ActionScope| {
            resolved.is_some_and(|ty| ty.action(segment, scope).is_some())
        };

        let Some(next) = segments.peek_element() else {
            return (None, None);
        };
        if is_action(next, ActionScope::Collection) {
            segments.advance();
            return (None, Some(next));
        }

        segments.advance();
        trace!(segment = next, "id segment");
        let ids = IdList::parse(next);

        let action = segments
            .peek_element()
            .filter(|&segment| is_action(segment, ActionScope::Instance));
        if action.is_some() {
            segments.advance();
        }
        (Some(ids), action)
    }
}

/// Parses a path with the default configuration.
///
/// # Errors
///
/// See [`PathParser::parse`].
pub fn parse_path(raw: &str, directory: &dyn ResourceDirectory) -> Result<JsonPath> {
    PathParser::new(directory).parse(raw)
}
