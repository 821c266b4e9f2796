//! jsonapi_path - JSON:API resource path resolution
//!
//! This crate re-exports all layers of the system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: jsonapi_path_runtime   : Config loading, rendering, CLI
//! Layer 1: jsonapi_path_parser    : Directory, parser, path chain, serializer
//! Layer 0: jsonapi_path_foundation: Core types (IdList, Error)
//! ```

pub use jsonapi_path_foundation as foundation;
pub use jsonapi_path_parser as parser;
pub use jsonapi_path_runtime as runtime;
