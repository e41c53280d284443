//! Output formatting for apply results.

use super::execute::ApplyReport;
use crate::output::{format_event, Outputable};

impl Outputable for ApplyReport {
    fn to_table(&self) -> String {
        let mut lines = vec![
            format!("Applied: {} ({}, {})", self.source, self.mode, self.backend),
            String::new(),
        ];

        if self.events.is_empty() {
            lines.push("Nothing to apply.".to_string());
        } else {
            lines.extend(self.events.iter().map(format_event));
        }

        lines.push(String::new());
        lines.push(format!(
            "{} applied, {} failed, {} skipped",
            self.applied(),
            self.failed(),
            self.skipped()
        ));

        lines.join("\n")
    }
}
