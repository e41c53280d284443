//! Output formatting for compile command results.

use super::execute::CompileResult;
use crate::output::{format_skipped, Outputable};

impl Outputable for CompileResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("Compiled: {}", self.file), String::new()];

        if self.statements.is_empty() {
            lines.push("No tables found.".to_string());
        } else {
            lines.extend(self.statements.iter().map(|s| format!("{};", s.sql)));
        }

        let skipped = format_skipped(&self.skipped);
        if !skipped.is_empty() {
            lines.push(String::new());
            lines.extend(skipped);
        }

        lines.join("\n")
    }
}
