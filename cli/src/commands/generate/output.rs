//! Output formatting for generate command results.

use super::execute::GenerateResult;
use crate::output::Outputable;

impl Outputable for GenerateResult {
    fn to_table(&self) -> String {
        let mut lines = vec![
            format!("Generated by {} ({})", self.generator, self.route),
            String::new(),
            self.text.clone(),
        ];

        match &self.report {
            Some(report) => {
                lines.push(String::new());
                lines.push(report.to_table());
            }
            None if self.dry_run => {
                lines.push(String::new());
                lines.push("No changes made (dry-run mode).".to_string());
            }
            None => {}
        }

        lines.join("\n")
    }
}
