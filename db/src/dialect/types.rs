//! Parsed schema structures.
//!
//! These types sit between the raw schema text and the emitted DDL. They keep
//! the declared names and types exactly as written; mapping to SQL happens later.

use std::fmt;

use serde::Serialize;

/// One `Table <name> { ... }` block as it appeared in the schema text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    /// Table name (case preserved)
    pub name: String,

    /// Raw text between the braces
    pub body: String,

    /// 1-based line of the `Table` keyword
    pub line: usize,

    /// 1-based line the body text starts on
    pub body_line: usize,
}

/// A column declaration inside a table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,

    /// Declared type token, e.g. `int` or `varchar(255)`
    pub declared_type: String,

    /// Text inside the `[...]` group, if the column had one
    pub constraints: Option<String>,

    /// 1-based line in the schema text
    pub line: usize,
}

/// Cardinality marker of a reference annotation.
///
/// The store has no notion of reference direction, so the marker is kept only
/// for callers that want to inspect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `>`
    ManyToOne,
    /// `<`
    OneToMany,
    /// `-`
    OneToOne,
    /// `<>`
    ManyToMany,
}

impl Direction {
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            ">" => Some(Direction::ManyToOne),
            "<" => Some(Direction::OneToMany),
            "-" => Some(Direction::OneToOne),
            "<>" => Some(Direction::ManyToMany),
            _ => None,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Direction::ManyToOne => ">",
            Direction::OneToMany => "<",
            Direction::OneToOne => "-",
            Direction::ManyToMany => "<>",
        }
    }
}

/// A `ref:` annotation attached to a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSpec {
    pub local_column: String,
    pub direction: Direction,
    pub remote_table: String,
    pub remote_column: String,
}

/// One item produced by the body tokenizer.
///
/// A column carrying a `ref:` annotation produces a `Column` entry followed by
/// a `Reference` entry for the same line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyEntry {
    Column(ColumnSpec),
    Reference(ReferenceSpec),
}

/// Why a piece of input was left out of the compiled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipKind {
    /// Text outside any `Table` block
    UnrecognizedBlock,
    /// Body text that is not a `<name> <type> [...]` run
    MalformedColumn,
    /// A constraint token with no mapping
    UnknownConstraint,
    /// A `ref:` token that is not `<dir> <table>.<column>`
    MalformedReference,
    /// A table block with neither columns nor references
    EmptyTable,
}

impl fmt::Display for SkipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkipKind::UnrecognizedBlock => "unrecognized block",
            SkipKind::MalformedColumn => "malformed column",
            SkipKind::UnknownConstraint => "unknown constraint",
            SkipKind::MalformedReference => "malformed reference",
            SkipKind::EmptyTable => "empty table",
        };
        f.write_str(label)
    }
}

/// A span of input the compiler skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSpan {
    pub kind: SkipKind,

    /// 1-based line in the schema text
    pub line: usize,

    /// The offending text, trimmed
    pub text: String,

    /// Enclosing table, when the span sits inside a block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

impl fmt::Display for SkippedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "line {} ({}): {} `{}`", self.line, table, self.kind, self.text),
            None => write!(f, "line {}: {} `{}`", self.line, self.kind, self.text),
        }
    }
}
