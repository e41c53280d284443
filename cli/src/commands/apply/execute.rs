use std::error::Error;

use db::{materialize, ApplyEvent, SchemaSource, SchemaStore};
use serde::Serialize;

use super::ApplyCmd;
use crate::cli::Context;
use crate::commands::{read_input, Execute};

/// Outcome of applying one schema source
#[derive(Debug, Serialize)]
pub struct ApplyReport {
    /// Where the schema came from (file path or "generated")
    pub source: String,
    pub mode: &'static str,
    pub backend: &'static str,
    pub events: Vec<ApplyEvent>,
}

impl ApplyReport {
    /// Materialize `schema` into `store`, collecting every event.
    pub fn collect(
        store: &mut dyn SchemaStore,
        source: impl Into<String>,
        schema: &SchemaSource,
    ) -> Result<Self, Box<dyn Error>> {
        let mut events: Vec<ApplyEvent> = Vec::new();
        materialize(store, schema, &mut |event: ApplyEvent| events.push(event))?;

        Ok(Self {
            source: source.into(),
            mode: schema.kind(),
            backend: store.backend_name(),
            events,
        })
    }

    /// Tables or scripts that were committed
    pub fn applied(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ApplyEvent::TableApplied { .. } | ApplyEvent::ScriptApplied { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.events.iter().filter(|e| e.is_failure()).count()
    }

    pub fn skipped(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ApplyEvent::Skipped(_)))
            .count()
    }
}

impl Execute for ApplyCmd {
    type Output = ApplyReport;

    fn execute(self, ctx: &Context) -> Result<Self::Output, Box<dyn Error>> {
        let text = read_input(&self.file)?;
        let mut store = ctx.database.connect()?;

        ApplyReport::collect(
            &mut *store,
            self.file.display().to_string(),
            &SchemaSource::Structured(text),
        )
    }
}
