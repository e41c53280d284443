use std::error::Error;

use db::{CommandGenerator, GeneratorError, SchemaSource, TextGenerator};
use serde::Serialize;
use tracing::info;

use super::GenerateCmd;
use crate::cli::Context;
use crate::commands::apply::ApplyReport;
use crate::commands::Execute;

/// Result of the generate command execution
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    pub description: String,
    pub generator: String,
    /// `structured` or `raw_script`
    pub route: &'static str,
    pub text: String,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ApplyReport>,
}

impl GenerateCmd {
    fn generator(&self, ctx: &Context) -> Result<CommandGenerator, GeneratorError> {
        self.generator_cmd
            .as_deref()
            .and_then(CommandGenerator::from_command_line)
            .or_else(|| ctx.generator.clone())
            .ok_or(GeneratorError::NotConfigured)
    }
}

impl Execute for GenerateCmd {
    type Output = GenerateResult;

    fn execute(self, ctx: &Context) -> Result<Self::Output, Box<dyn Error>> {
        let generator = self.generator(ctx)?;
        let text = generator.describe_text(&self.description)?;
        let source = SchemaSource::from_generated(&text);
        info!(generator = %generator.name(), route = source.kind(), "schema generated");

        let report = if self.dry_run {
            None
        } else {
            let mut store = ctx.database.connect()?;
            Some(ApplyReport::collect(&mut *store, "generated", &source)?)
        };

        Ok(GenerateResult {
            description: self.description,
            generator: generator.name(),
            route: source.kind(),
            text,
            dry_run: self.dry_run,
            report,
        })
    }
}
