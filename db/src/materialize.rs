//! Applies schemas to a store.
//!
//! Two ingestion paths share one entry point. Structured schema text is
//! compiled and applied table by table, each statement in its own transaction,
//! so one rejected table does not stop the others. A raw SQL script is applied
//! as a single batch that either fully commits or leaves the store untouched.

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::backend::{SchemaStore, StoreError};
use crate::compiler::compile;
use crate::dialect::{parse_tables, SkippedSpan};

/// Input to [`materialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// Dialect schema text, compiled then applied per table.
    Structured(String),

    /// SQL script, applied as one transaction.
    RawScript(String),
}

impl SchemaSource {
    /// Route generated text to the matching path.
    ///
    /// Text holding dialect `Table` blocks and no `CREATE TABLE` statement is
    /// structured; anything else is treated as SQL.
    pub fn from_generated(text: &str) -> Self {
        let (blocks, _) = parse_tables(text);
        let has_create = text.to_ascii_uppercase().contains("CREATE TABLE");

        if !blocks.is_empty() && !has_create {
            Self::Structured(text.to_string())
        } else {
            Self::RawScript(text.to_string())
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Structured(_) => "structured",
            Self::RawScript(_) => "raw_script",
        }
    }
}

/// Something that happened while materializing, reported as it happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ApplyEvent {
    Skipped(SkippedSpan),
    TableApplied { table: String },
    TableFailed { table: String, error: String },
    /// `statements` counts `;` terminators outside quoted text. Semicolons in
    /// trigger or function bodies are counted too, so the figure is approximate.
    ScriptApplied { statements: usize },
    ScriptFailed { error: String },
}

impl ApplyEvent {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::TableFailed { .. } | Self::ScriptFailed { .. })
    }
}

/// Receives [`ApplyEvent`]s.
pub trait OutcomeSink {
    fn record(&mut self, event: ApplyEvent);
}

impl<F> OutcomeSink for F
where
    F: FnMut(ApplyEvent),
{
    fn record(&mut self, event: ApplyEvent) {
        self(event)
    }
}

/// Errors that abort materialization.
#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Apply a schema to the store, reporting every outcome to `sink`.
///
/// Statement failures are reported and never returned. Only a lost or
/// unopenable connection ends the run early with an error.
pub fn materialize(
    store: &mut dyn SchemaStore,
    source: &SchemaSource,
    sink: &mut dyn OutcomeSink,
) -> Result<(), MaterializeError> {
    match source {
        SchemaSource::Structured(text) => apply_structured(store, text, sink),
        SchemaSource::RawScript(script) => apply_script(store, script, sink),
    }
}

fn apply_structured(
    store: &mut dyn SchemaStore,
    text: &str,
    sink: &mut dyn OutcomeSink,
) -> Result<(), MaterializeError> {
    let compiled = compile(text);

    for span in compiled.skipped {
        sink.record(ApplyEvent::Skipped(span));
    }

    for statement in compiled.statements {
        match store.execute_statement(&statement.sql) {
            Ok(()) => {
                info!(table = %statement.table, backend = store.backend_name(), "table applied");
                sink.record(ApplyEvent::TableApplied {
                    table: statement.table,
                });
            }
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => {
                error!(table = %statement.table, error = %e, "table failed");
                sink.record(ApplyEvent::TableFailed {
                    table: statement.table,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(())
}

fn apply_script(
    store: &mut dyn SchemaStore,
    script: &str,
    sink: &mut dyn OutcomeSink,
) -> Result<(), MaterializeError> {
    match store.execute_script(script) {
        Ok(()) => {
            let statements = count_statements(script);
            info!(statements, backend = store.backend_name(), "script applied");
            sink.record(ApplyEvent::ScriptApplied { statements });
            Ok(())
        }
        Err(e) if e.is_fatal() => Err(e.into()),
        Err(e) => {
            error!(error = %e, "script failed; rolled back");
            sink.record(ApplyEvent::ScriptFailed {
                error: e.to_string(),
            });
            Ok(())
        }
    }
}

fn count_statements(script: &str) -> usize {
    let mut count = 0;
    let mut pending = false;
    let mut quote: Option<char> = None;

    for c in script.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => {
                quote = Some(c);
                pending = true;
            }
            (None, ';') => {
                count += usize::from(pending);
                pending = false;
            }
            (None, c) if c.is_whitespace() => {}
            (None, _) => pending = true,
        }
    }

    count + usize::from(pending)
}
