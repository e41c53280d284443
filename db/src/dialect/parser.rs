//! Table block and column extraction.
//!
//! The dialect is matched structurally with regular expressions rather than a
//! full tokenizer. Anything that does not fit the patterns is returned as a
//! [`SkippedSpan`] so callers can report it; parsing itself never fails.

use std::sync::LazyLock;

use regex::Regex;

use super::constraints::split_tokens;
use super::reference::{is_reference_token, resolve_reference};
use super::types::{BodyEntry, ColumnSpec, SkipKind, SkippedSpan, TableBlock};

/// `Table <name> { <body> }`. The body ends at the first closing brace, so
/// nested braces are not supported.
static TABLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bTable\s+(\w+)\s*\{([^}]*)\}").expect("table block pattern is valid")
});

/// `<name> <type>[(size)] [<constraints>]`. The constraint list ends at the
/// first closing bracket, so a `]` inside a quoted default is not supported.
static COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)\s+(\w+(?:\([^)]*\))?)(?:\s*\[([^\]]*)\])?")
        .expect("column pattern is valid")
});

/// Extract every table block from the schema text, in input order.
///
/// Non-blank text between blocks (enums, project notes, stray lines) is
/// reported as [`SkipKind::UnrecognizedBlock`].
pub fn parse_tables(schema_text: &str) -> (Vec<TableBlock>, Vec<SkippedSpan>) {
    let mut blocks = Vec::new();
    let mut skipped = Vec::new();
    let mut last_end = 0;

    for caps in TABLE_BLOCK.captures_iter(schema_text) {
        let (Some(whole), Some(name), Some(body)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };

        if let Some(span) = unrecognized_span(schema_text, last_end, whole.start()) {
            skipped.push(span);
        }
        last_end = whole.end();

        blocks.push(TableBlock {
            name: name.as_str().to_string(),
            body: body.as_str().to_string(),
            line: line_at(schema_text, whole.start()),
            body_line: line_at(schema_text, body.start()),
        });
    }

    if let Some(span) = unrecognized_span(schema_text, last_end, schema_text.len()) {
        skipped.push(span);
    }

    (blocks, skipped)
}

/// Tokenize a table body in a single pass.
///
/// Every `<name> <type> [...]` run becomes a [`BodyEntry::Column`]; when its
/// constraint list carries a `ref:` token, a [`BodyEntry::Reference`] follows
/// for the same column. Several runs may share one line.
pub fn parse_entries(block: &TableBlock) -> (Vec<BodyEntry>, Vec<SkippedSpan>) {
    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for (offset, line) in block.body.lines().enumerate() {
        let line = strip_comment(line);
        if line.trim().is_empty() {
            continue;
        }

        let line_no = block.body_line + offset;
        let mut last_end = 0;

        for caps in COLUMN.captures_iter(line) {
            let (Some(whole), Some(name), Some(declared_type)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            let leftover = line[last_end..whole.start()].trim();
            if !leftover.is_empty() {
                skipped.push(malformed(block, line_no, leftover));
            }
            last_end = whole.end();

            let column = ColumnSpec {
                name: name.as_str().to_string(),
                declared_type: declared_type.as_str().to_string(),
                constraints: caps.get(3).map(|m| m.as_str().trim().to_string()),
                line: line_no,
            };

            let references: Vec<_> = column
                .constraints
                .as_deref()
                .map(split_tokens)
                .unwrap_or_default()
                .into_iter()
                .filter(|token| is_reference_token(token))
                .map(|token| (token.to_string(), resolve_reference(&column.name, token)))
                .collect();

            entries.push(BodyEntry::Column(column));

            for (token, reference) in references {
                match reference {
                    Some(reference) => entries.push(BodyEntry::Reference(reference)),
                    None => skipped.push(SkippedSpan {
                        kind: SkipKind::MalformedReference,
                        line: line_no,
                        text: token,
                        table: Some(block.name.clone()),
                    }),
                }
            }
        }

        let leftover = line[last_end..].trim();
        if !leftover.is_empty() {
            skipped.push(malformed(block, line_no, leftover));
        }
    }

    (entries, skipped)
}

fn malformed(block: &TableBlock, line: usize, text: &str) -> SkippedSpan {
    SkippedSpan {
        kind: SkipKind::MalformedColumn,
        line,
        text: text.to_string(),
        table: Some(block.name.clone()),
    }
}

/// The part of a line before a `//` comment. Constraint lists are passed over,
/// so `//` inside a bracketed default is kept.
fn strip_comment(line: &str) -> &str {
    let mut in_brackets = false;
    for (idx, c) in line.char_indices() {
        match c {
            '[' => in_brackets = true,
            ']' => in_brackets = false,
            '/' if !in_brackets && line[idx + 1..].starts_with('/') => return &line[..idx],
            _ => {}
        }
    }
    line
}

fn is_comment(text: &str) -> bool {
    text.starts_with("//")
}

/// Build a skip record for `text[start..end]` if it holds anything besides
/// whitespace and comments.
fn unrecognized_span(text: &str, start: usize, end: usize) -> Option<SkippedSpan> {
    let gap = &text[start..end];
    let mut line_offset = 0;
    let mut first_line = None;

    for (idx, line) in gap.split('\n').enumerate() {
        let trimmed = line.trim();
        if !trimmed.is_empty() && !is_comment(trimmed) {
            first_line = Some(idx);
            break;
        }
        line_offset += line.len() + 1;
    }

    let first_line = first_line?;
    let content_start = start + line_offset;

    Some(SkippedSpan {
        kind: SkipKind::UnrecognizedBlock,
        line: line_at(text, start) + first_line,
        text: text[content_start..end].trim().to_string(),
        table: None,
    })
}

/// 1-based line number of a byte offset.
fn line_at(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
