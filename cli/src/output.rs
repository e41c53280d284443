//! Output formatting for command results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use db::{ApplyEvent, SkippedSpan};
use serde::Serialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

/// One line per skipped span, indented, under a `Skipped (n):` header.
pub fn format_skipped(skipped: &[SkippedSpan]) -> Vec<String> {
    if skipped.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![format!("Skipped ({}):", skipped.len())];
    lines.extend(skipped.iter().map(|span| format!("  ! {}", span)));
    lines
}

/// One line per materializer event.
pub fn format_event(event: &ApplyEvent) -> String {
    match event {
        ApplyEvent::Skipped(span) => format!("  ! skipped {}", span),
        ApplyEvent::TableApplied { table } => format!("  ✓ {}", table),
        ApplyEvent::TableFailed { table, error } => format!("  ✗ {} ({})", table, error),
        ApplyEvent::ScriptApplied { statements } => {
            format!("  ✓ script applied ({} statements)", statements)
        }
        ApplyEvent::ScriptFailed { error } => format!("  ✗ script rolled back ({})", error),
    }
}
