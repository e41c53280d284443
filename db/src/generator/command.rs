//! Text generation through an external command.
//!
//! The prompt is written to the command's stdin and the completion is read
//! from its stdout, which fits CLI model runners such as `llm` or `ollama run`.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GeneratorError, TextGenerator};

/// Runs `program args...` once per prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGenerator {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandGenerator {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// Parse a whitespace-separated command line such as `llm -m gpt-4o-mini`.
    ///
    /// Returns `None` for a blank line. Quoting is not supported.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let command = parts.next()?;
        Some(Self::new(command, parts.collect()))
    }
}

impl TextGenerator for CommandGenerator {
    fn name(&self) -> String {
        self.command.clone()
    }

    fn complete(&self, prompt: &str) -> Result<String, GeneratorError> {
        debug!(command = %self.command, args = ?self.args, "running generator");

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| GeneratorError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // a child that exits without reading its input is judged by its status
            match stdin.write_all(prompt.as_bytes()) {
                Err(e) if e.kind() != ErrorKind::BrokenPipe => return Err(GeneratorError::Io(e)),
                _ => {}
            }
        }

        let output = child.wait_with_output().map_err(GeneratorError::Io)?;

        if !output.status.success() {
            return Err(GeneratorError::Failed {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
