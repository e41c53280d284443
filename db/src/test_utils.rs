//! Shared test utilities for store and integration tests.
//!
//! This module provides helpers for applying schemas to throwaway stores and
//! writing schema files.

#[cfg(feature = "test-utils")]
use std::io::Write;

#[cfg(feature = "test-utils")]
use tempfile::NamedTempFile;

use crate::backend::SchemaStore;
use crate::materialize::{materialize, ApplyEvent, SchemaSource};

/// Create a temporary file containing the given content.
///
/// Used to hand schema text and SQL scripts to commands that read files.
#[cfg(feature = "test-utils")]
pub fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Apply a source and collect every reported event.
///
/// Panics if the store connection fails.
pub fn apply_collect(store: &mut dyn SchemaStore, source: &SchemaSource) -> Vec<ApplyEvent> {
    let mut events: Vec<ApplyEvent> = Vec::new();
    materialize(store, source, &mut |event: ApplyEvent| events.push(event))
        .expect("Materialize should not hit a connection failure");
    events
}
