//! SQLite backend implementation.
//!
//! Wraps a `rusqlite::Connection`. SQLite DDL is transactional, so a failed
//! `CREATE TABLE` or script leaves no trace once its transaction is dropped.

use std::path::Path;

use rusqlite::{Connection, ErrorCode};

use super::{ForeignKey, SchemaStore, StoreError};

/// SQLite store, file-backed or in-memory.
pub struct SqliteStore {
    conn: Connection,
    in_memory: bool,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database file.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Open {
            target: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::configure(conn, false)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Open {
            target: ":memory:".to_string(),
            message: e.to_string(),
        })?;
        Self::configure(conn, true)
    }

    fn configure(conn: Connection, in_memory: bool) -> Result<Self, StoreError> {
        conn.pragma_update(None, "foreign_keys", true)
            .map_err(classify)?;
        Ok(Self { conn, in_memory })
    }
}

impl SchemaStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        if self.in_memory { "SqliteMem" } else { "Sqlite" }
    }

    fn execute_statement(&mut self, sql: &str) -> Result<(), StoreError> {
        let tx = self.conn.transaction().map_err(classify)?;
        tx.execute(sql, []).map_err(classify)?;
        tx.commit().map_err(classify)
    }

    fn execute_script(&mut self, script: &str) -> Result<(), StoreError> {
        let tx = self.conn.transaction().map_err(classify)?;
        tx.execute_batch(script).map_err(classify)?;
        tx.commit().map_err(classify)
    }

    fn table_names(&mut self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT name FROM sqlite_master \
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
                 ORDER BY name",
            )
            .map_err(classify)?;

        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(classify)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(classify)?;

        Ok(names)
    }

    fn foreign_keys(&mut self, table: &str) -> Result<Vec<ForeignKey>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(r#"SELECT "from", "table", "to" FROM pragma_foreign_key_list(?1) ORDER BY id, seq"#)
            .map_err(classify)?;

        let keys = stmt
            .query_map([table], |row| {
                Ok(ForeignKey {
                    column: row.get(0)?,
                    remote_table: row.get(1)?,
                    remote_column: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                })
            })
            .map_err(classify)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(classify)?;

        Ok(keys)
    }
}

/// Sort a rusqlite error into a statement failure or a lost connection.
fn classify(err: rusqlite::Error) -> StoreError {
    match err.sqlite_error_code() {
        Some(
            ErrorCode::CannotOpen
            | ErrorCode::NotADatabase
            | ErrorCode::DatabaseCorrupt
            | ErrorCode::SystemIoFailure,
        ) => StoreError::Connection {
            message: err.to_string(),
        },
        _ => StoreError::Statement {
            message: err.to_string(),
        },
    }
}
