//! Error types for path resolution.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every kind is terminal: none of them describes a transient condition.

use std::fmt;

use thiserror::Error;

/// The main error type for path resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a not found error for a path whose root is not a registered type.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound(path.into()))
    }

    /// Creates a malformed path error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Malformed(reason.into()))
    }

    /// Creates an unknown relationship field error.
    #[must_use]
    pub fn unknown_field(resource_type: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownField {
            resource_type: resource_type.into(),
            field: field.into(),
        })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Returns true if the path does not name an existing route.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound(_))
    }

    /// Returns true if the path is structurally invalid.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, ErrorKind::Malformed(_))
    }

    /// Returns true if a relationship segment names no declared field.
    #[must_use]
    pub fn is_unknown_field(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownField { .. })
    }

    /// Returns true for errors caused by the request rather than the route table.
    ///
    /// Not found is excluded: callers answer it as a missing route.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.is_malformed() || self.is_unknown_field()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Root segment does not name a registered resource type.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Structurally invalid path.
    #[error("malformed path: {0}")]
    Malformed(String),

    /// Relationship or field segment not declared on the addressed type.
    #[error("field not found: {field} on resource type {resource_type}")]
    UnknownField {
        /// The resource type that was queried.
        resource_type: String,
        /// The field name that was not found.
        field: String,
    },

    /// Invalid directory or parser configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The raw path being parsed.
    pub path: Option<String>,
    /// Zero-based index of the offending segment.
    pub segment: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the segment index.
    #[must_use]
    pub fn with_segment(mut self, segment: usize) -> Self {
        self.segment = Some(segment);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "in {path}")?;
            if let Some(segment) = self.segment {
                write!(f, " at segment {segment}")?;
            }
        } else if let Some(segment) = self.segment {
            write!(f, "at segment {segment}")?;
        }
        Ok(())
    }
}
