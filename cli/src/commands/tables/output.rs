//! Output formatting for tables command results.

use super::execute::TablesResult;
use crate::output::Outputable;

impl Outputable for TablesResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("Tables ({})", self.backend), String::new()];

        if self.tables.is_empty() {
            lines.push("No tables found.".to_string());
            return lines.join("\n");
        }

        for table in &self.tables {
            lines.push(table.name.clone());
            for fk in &table.foreign_keys {
                lines.push(format!("  {} → {}.{}", fk.column, fk.remote_table, fk.remote_column));
            }
        }

        lines.join("\n")
    }
}
