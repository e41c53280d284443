//! Schema compiler.
//!
//! Runs schema text through the dialect parser, the constraint mapper and the
//! reference resolver, then hands each table to the DDL emitter. Compilation is
//! best-effort: input that cannot be understood is collected as skipped spans
//! and the rest of the schema still compiles.

mod ddl;

pub use ddl::{DdlEmitter, DdlStatement};

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::dialect::{
    map_column, parse_entries, parse_tables, BodyEntry, SkipKind, SkippedSpan,
};

/// Output of [`compile`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompiledSchema {
    /// One statement per non-empty table block, in input order
    pub statements: Vec<DdlStatement>,

    /// Everything left out, ordered by line
    pub skipped: Vec<SkippedSpan>,
}

/// Compile schema text into `CREATE TABLE` statements.
pub fn compile(schema_text: &str) -> CompiledSchema {
    let (blocks, mut skipped) = parse_tables(schema_text);
    let mut statements = Vec::new();
    let mut seen = HashSet::new();

    for block in &blocks {
        if !seen.insert(block.name.as_str()) {
            warn!(table = %block.name, line = block.line, "duplicate table block; only the first definition takes effect");
        }

        let (entries, entry_skips) = parse_entries(block);
        skipped.extend(entry_skips);

        let mut columns = Vec::new();
        let mut references = Vec::new();

        for entry in entries {
            match entry {
                BodyEntry::Column(column) => {
                    let mapped = map_column(&column);
                    skipped.extend(mapped.unknown.into_iter().map(|token| SkippedSpan {
                        kind: SkipKind::UnknownConstraint,
                        line: column.line,
                        text: token,
                        table: Some(block.name.clone()),
                    }));
                    columns.push(mapped.clause);
                }
                BodyEntry::Reference(reference) => references.push(reference),
            }
        }

        match DdlEmitter::emit_table(&block.name, &columns, &references) {
            Some(statement) => {
                debug!(table = %statement.table, sql = %statement.sql, "compiled table");
                statements.push(statement);
            }
            None => skipped.push(SkippedSpan {
                kind: SkipKind::EmptyTable,
                line: block.line,
                text: format!("Table {}", block.name),
                table: Some(block.name.clone()),
            }),
        }
    }

    skipped.sort_by_key(|span| span.line);
    for span in &skipped {
        warn!("skipped {}", span);
    }

    CompiledSchema { statements, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const USERS_AND_ORDERS: &str = r#"
Table users {
  id int [primary key, auto_increment]
  name varchar [not null, unique, default: "x"]
  age int [default: 0]
}

Table orders {
  id int [primary key]
  user_id int [ref: > users.id]
}
"#;

    #[rstest]
    fn test_compile_two_tables() {
        let compiled = compile(USERS_AND_ORDERS);

        assert!(compiled.skipped.is_empty(), "unexpected skips: {:?}", compiled.skipped);
        assert_eq!(compiled.statements.len(), 2);
        assert_eq!(
            compiled.statements[0].sql,
            "CREATE TABLE IF NOT EXISTS users(id INTEGER PRIMARY KEY AUTOINCREMENT, \
             name VARCHAR NOT NULL UNIQUE DEFAULT 'x', age INT DEFAULT 0)"
        );
        assert_eq!(
            compiled.statements[1].sql,
            "CREATE TABLE IF NOT EXISTS orders(id INT PRIMARY KEY, user_id INT, \
             FOREIGN KEY (user_id) REFERENCES users(id))"
        );
    }

    #[rstest]
    fn test_compile_n_blocks_yields_n_statements() {
        let schema: String = (0..5)
            .map(|i| format!("Table t{} {{\n  id int\n}}\n", i))
            .collect();
        let compiled = compile(&schema);

        let tables: Vec<_> = compiled.statements.iter().map(|s| s.table.as_str()).collect();
        assert_eq!(tables, vec!["t0", "t1", "t2", "t3", "t4"]);
    }

    #[rstest]
    fn test_compile_empty_input() {
        let compiled = compile("");
        assert!(compiled.statements.is_empty());
        assert!(compiled.skipped.is_empty());
    }

    #[rstest]
    fn test_compile_ignores_trailing_comments() {
        let compiled = compile("Table users {\n  id int [pk] // primary key\n  name text\n}");

        assert!(compiled.skipped.is_empty());
        assert_eq!(
            compiled.statements[0].sql,
            "CREATE TABLE IF NOT EXISTS users(id INT PRIMARY KEY, name TEXT)"
        );
    }

    #[rstest]
    fn test_compile_empty_table_is_skipped() {
        let compiled = compile("Table a { id int }\nTable b {\n}\n");

        assert_eq!(compiled.statements.len(), 1);
        assert_eq!(compiled.skipped.len(), 1);
        assert_eq!(compiled.skipped[0].kind, SkipKind::EmptyTable);
        assert_eq!(compiled.skipped[0].table.as_deref(), Some("b"));
        assert_eq!(compiled.skipped[0].line, 2);
    }

    #[rstest]
    fn test_compile_keeps_duplicate_tables() {
        let compiled = compile("Table a { id int }\nTable a { id int, name text }");
        assert_eq!(compiled.statements.len(), 2);
    }

    #[rstest]
    fn test_compile_collects_skips_in_line_order() {
        let schema = "Table a {\n  id int [check: id > 0]\n  stray\n}\nProject demo { }\n";
        let compiled = compile(schema);

        let kinds: Vec<_> = compiled.skipped.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SkipKind::UnknownConstraint, SkipKind::MalformedColumn, SkipKind::UnrecognizedBlock]
        );
        assert_eq!(compiled.statements[0].sql, "CREATE TABLE IF NOT EXISTS a(id INT)");
    }
}
