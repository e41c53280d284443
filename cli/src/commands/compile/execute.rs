use std::error::Error;

use db::{compile, DdlStatement, SkippedSpan};
use serde::Serialize;

use super::CompileCmd;
use crate::cli::Context;
use crate::commands::{read_input, Execute};

/// Result of the compile command execution
#[derive(Debug, Serialize)]
pub struct CompileResult {
    pub file: String,
    pub statements: Vec<DdlStatement>,
    pub skipped: Vec<SkippedSpan>,
}

impl Execute for CompileCmd {
    type Output = CompileResult;

    fn execute(self, _ctx: &Context) -> Result<Self::Output, Box<dyn Error>> {
        let text = read_input(&self.file)?;
        let compiled = compile(&text);

        Ok(CompileResult {
            file: self.file.display().to_string(),
            statements: compiled.statements,
            skipped: compiled.skipped,
        })
    }
}
