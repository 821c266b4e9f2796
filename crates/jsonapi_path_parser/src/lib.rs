//! Directory-driven parser for JSON:API resource paths.
//!
//! This crate turns a request path like `/articles/1/relationships/author`
//! into a chain of addressed nodes, and turns such a chain back into its
//! canonical string.
//!
//! # Architecture
//!
//! ```text
//! "/articles/1/relationships/author/"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SEGMENTS      │  → ["articles", "1", "relationships", "author"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PARSER          │  ◀── ResourceDirectory (types, fields, actions)
//! │                 │  → [Resource(articles, [1]), Relationship(author)]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ JSON PATH       │  → root ⇄ child links wired in one pass
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SERIALIZER      │  → "/articles/1/relationships/author/"
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Parser configuration (relationship marker)
//! - [`directory`] - Registered resource types, relationship fields and actions
//! - [`segments`] - Path splitting and segment cursor
//! - [`node`] - Path nodes and the [`JsonPath`] chain
//! - [`parser`] - The path parser
//! - [`serializer`] - Chain to string conversion

pub mod config;
pub mod directory;
pub mod node;
pub mod parser;
pub mod segments;
pub mod serializer;

// Re-export main types for convenience
pub use config::PathConfig;
pub use directory::{
    ActionScope, RelationshipField, RepositoryAction, ResourceDirectory, ResourceRegistry,
    ResourceType,
};
pub use node::{JsonPath, NodeIndex, NodeKind, PathNode};
pub use parser::{ParseResult, PathParser, parse_path};
pub use serializer::{PathSerializer, serialize_path};
