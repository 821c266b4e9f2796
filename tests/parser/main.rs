//! Integration tests for the jsonapi_path_parser crate.
//!
//! Tests for the path resolution pipeline:
//! - Directory registration and lookup
//! - Path parsing against a directory
//! - Chain serialization
//! - Parse/serialize round trips

mod parser_tests;
