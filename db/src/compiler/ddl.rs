//! SQL DDL emitter.
//!
//! Generates `CREATE TABLE IF NOT EXISTS` statements from mapped column clauses
//! and resolved references. Output is deterministic: columns in declaration
//! order, then foreign keys in declaration order.

use serde::Serialize;

use crate::dialect::ReferenceSpec;

/// One compiled `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DdlStatement {
    pub table: String,
    pub sql: String,
}

/// Compiler for generating table DDL.
pub struct DdlEmitter;

impl DdlEmitter {
    /// Generate the statement for a single table.
    ///
    /// Produces output in the format:
    /// ```sql
    /// CREATE TABLE IF NOT EXISTS orders(id INT PRIMARY KEY, user_id INT, FOREIGN KEY (user_id) REFERENCES users(id))
    /// ```
    ///
    /// Returns `None` when there is nothing to put between the parentheses.
    pub fn emit_table(
        table: &str,
        columns: &[String],
        references: &[ReferenceSpec],
    ) -> Option<DdlStatement> {
        if columns.is_empty() && references.is_empty() {
            return None;
        }

        let clauses = columns
            .iter()
            .cloned()
            .chain(references.iter().map(ReferenceSpec::foreign_key_clause))
            .collect::<Vec<_>>()
            .join(", ");

        Some(DdlStatement {
            table: table.to_string(),
            sql: format!("CREATE TABLE IF NOT EXISTS {}({})", table, clauses),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Direction;

    fn reference(local: &str, table: &str, column: &str) -> ReferenceSpec {
        ReferenceSpec {
            local_column: local.to_string(),
            direction: Direction::ManyToOne,
            remote_table: table.to_string(),
            remote_column: column.to_string(),
        }
    }

    #[test]
    fn test_emit_columns_only() {
        let columns = vec!["id INT PRIMARY KEY".to_string(), "name TEXT".to_string()];
        let statement = DdlEmitter::emit_table("users", &columns, &[]).unwrap();

        assert_eq!(statement.table, "users");
        assert_eq!(
            statement.sql,
            "CREATE TABLE IF NOT EXISTS users(id INT PRIMARY KEY, name TEXT)"
        );
    }

    #[test]
    fn test_foreign_keys_follow_columns_in_order() {
        let columns = vec![
            "id INT".to_string(),
            "user_id INT".to_string(),
            "item_id INT".to_string(),
        ];
        let references = vec![
            reference("user_id", "users", "id"),
            reference("item_id", "items", "id"),
        ];
        let statement = DdlEmitter::emit_table("orders", &columns, &references).unwrap();

        assert_eq!(
            statement.sql,
            "CREATE TABLE IF NOT EXISTS orders(id INT, user_id INT, item_id INT, \
             FOREIGN KEY (user_id) REFERENCES users(id), \
             FOREIGN KEY (item_id) REFERENCES items(id))"
        );
    }

    #[test]
    fn test_empty_table_emits_nothing() {
        assert_eq!(DdlEmitter::emit_table("empty", &[], &[]), None);
    }
}
