//! Backend abstraction layer for the relational store.
//!
//! This module provides the trait the materializer applies DDL through,
//! allowing SQLite and PostgreSQL backends to implement the same interface.

use serde::Serialize;
use thiserror::Error;

#[cfg(feature = "backend-sqlite")]
mod sqlite;
#[cfg(feature = "backend-sqlite")]
pub use sqlite::SqliteStore;

#[cfg(feature = "backend-postgres")]
mod postgres;
#[cfg(feature = "backend-postgres")]
pub use self::postgres::PostgresStore;

/// Store error types.
///
/// `Open` and `Connection` are fatal to the current operation; `Statement`
/// means the store rejected a statement and the connection is still usable.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to open store '{target}': {message}")]
    Open { target: String, message: String },

    #[error("Store connection failed: {message}")]
    Connection { message: String },

    #[error("{message}")]
    Statement { message: String },

    #[error("Backend '{backend}' is not available in this build")]
    Unavailable { backend: String },
}

impl StoreError {
    /// Whether the error leaves the connection unusable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, StoreError::Statement { .. })
    }
}

/// A foreign key as reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
    pub column: String,
    pub remote_table: String,
    pub remote_column: String,
}

/// Core trait for store operations.
///
/// Each write runs in its own transaction: it either commits completely or is
/// rolled back before the method returns.
pub trait SchemaStore {
    /// Backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;

    /// Execute one statement and commit it, rolling back on failure.
    fn execute_statement(&mut self, sql: &str) -> Result<(), StoreError>;

    /// Execute a multi-statement script as a single unit.
    fn execute_script(&mut self, script: &str) -> Result<(), StoreError>;

    /// Names of the user tables in the store, sorted.
    fn table_names(&mut self) -> Result<Vec<String>, StoreError>;

    /// Foreign keys declared on `table`.
    fn foreign_keys(&mut self, table: &str) -> Result<Vec<ForeignKey>, StoreError>;

    /// Check if a table exists.
    fn table_exists(&mut self, table: &str) -> Result<bool, StoreError> {
        Ok(self.table_names()?.iter().any(|name| name == table))
    }
}
