//! Integration tests for the jsonapi_path_runtime crate.
//!
//! Tests for configuration files, the owning resolver and rendering.

mod config_tests;
