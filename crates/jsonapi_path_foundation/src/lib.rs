//! Core types and errors for JSON:API path resolution.
//!
//! This crate provides:
//! - [`IdList`] - Ordered identifiers parsed from a comma-separated path segment
//! - [`Error`] - Rich error types with context
//! - Separator and marker constants shared by the parser and serializer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod constants;
pub mod error;
pub mod ids;

pub use constants::{DEFAULT_RELATIONSHIP_MARK, ID_SEPARATOR, PATH_SEPARATOR};
pub use error::{Error, ErrorContext, ErrorKind};
pub use ids::IdList;

/// Result type alias using the path resolution error type.
pub type Result<T> = std::result::Result<T, Error>;
