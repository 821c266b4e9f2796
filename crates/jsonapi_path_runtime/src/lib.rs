//! Configuration loading, rendering and CLI for JSON:API path resolution.
//!
//! This crate provides:
//! - [`RuntimeConfig`] - JSON description of the parser settings and resource types
//! - [`PathResolver`] - An owning facade over a registry and its parser settings
//! - [`render`] - Text and JSON rendering of resolved paths and errors
//! - The `jsonapi-path` command line tool

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod render;
pub mod resolver;

pub use config::{ResourceDefinition, RuntimeConfig};
pub use resolver::PathResolver;
