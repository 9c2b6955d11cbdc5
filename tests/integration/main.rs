//! Integration tests for TCG Catalog
//!
//! These tests use wiremock to stand in for the storefronts and tempfile for
//! the catalog location.

mod common;
mod pipeline_tests;
