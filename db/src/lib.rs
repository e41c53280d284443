//! Schema layer for tablewright - dialect compiler, stores and the materializer

pub mod backend;
pub mod compiler;
pub mod config;
pub mod dialect;
pub mod generator;
pub mod materialize;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;
#[cfg(all(any(test, feature = "test-utils"), feature = "backend-sqlite"))]
pub mod test_utils;

// Re-export commonly used items
pub use backend::{ForeignKey, SchemaStore, StoreError};
pub use compiler::{compile, CompiledSchema, DdlStatement};
pub use config::{DatabaseConfig, PostgresConfig};
pub use dialect::{SkipKind, SkippedSpan};
pub use generator::{CommandGenerator, GeneratorError, TextGenerator};
pub use materialize::{materialize, ApplyEvent, MaterializeError, OutcomeSink, SchemaSource};
