//! Natural-language schema generation.
//!
//! A [`TextGenerator`] turns a prompt into text. [`TextGenerator::describe_text`]
//! wraps a description in the fixed schema prompt, runs the generator and
//! cleans its output so it can be routed with
//! [`SchemaSource::from_generated`](crate::materialize::SchemaSource::from_generated).

mod command;
mod prompt;

pub use command::CommandGenerator;
pub use prompt::{build_schema_prompt, SCHEMA_INSTRUCTIONS};

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```[A-Za-z0-9_-]*[ \t]*\r?\n(.*?)```").expect("fence pattern is valid")
});

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to start generator '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Generator I/O failed: {0}")]
    Io(#[source] std::io::Error),

    #[error("Generator '{command}' exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Generator '{command}' returned empty output")]
    EmptyOutput { command: String },

    #[error("No generator configured (use --generator-cmd, the config file, or TABLEWRIGHT_GENERATOR)")]
    NotConfigured,
}

/// Produces text for a prompt.
pub trait TextGenerator {
    /// Short name used in messages.
    fn name(&self) -> String {
        "generator".to_string()
    }

    /// Raw completion for `prompt`.
    fn complete(&self, prompt: &str) -> Result<String, GeneratorError>;

    /// Generate a schema for a natural-language description.
    ///
    /// Code fences are removed and blank output is an error.
    #[tracing::instrument(skip(self, description), fields(description_len = description.len()))]
    fn describe_text(&self, description: &str) -> Result<String, GeneratorError> {
        let output = self.complete(&build_schema_prompt(description))?;
        let text = strip_fences(&output);

        if text.is_empty() {
            return Err(GeneratorError::EmptyOutput {
                command: self.name(),
            });
        }
        Ok(text)
    }
}

/// Remove markdown code fences, keeping the fenced contents.
///
/// Several fenced blocks are joined with a blank line. Text without fences is
/// returned trimmed.
pub fn strip_fences(output: &str) -> String {
    if !FENCE.is_match(output) {
        return output.trim().to_string();
    }

    FENCE
        .captures_iter(output)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Canned(&'static str);

    impl TextGenerator for Canned {
        fn complete(&self, _prompt: &str) -> Result<String, GeneratorError> {
            Ok(self.0.to_string())
        }
    }

    #[rstest]
    #[case("CREATE TABLE a(id INT);", "CREATE TABLE a(id INT);")]
    #[case("```sql\nCREATE TABLE a(id INT);\n```", "CREATE TABLE a(id INT);")]
    #[case("```\nTable a {\n  id int\n}\n```", "Table a {\n  id int\n}")]
    #[case("Here you go:\n```sql\nCREATE TABLE a(id INT);\n```\nEnjoy.", "CREATE TABLE a(id INT);")]
    #[case("```sql\nCREATE TABLE a(id INT);\n```\n```sql\nCREATE TABLE b(id INT);\n```", "CREATE TABLE a(id INT);\n\nCREATE TABLE b(id INT);")]
    #[case("  \n  ", "")]
    fn test_strip_fences(#[case] output: &str, #[case] expected: &str) {
        assert_eq!(strip_fences(output), expected);
    }

    #[rstest]
    fn test_describe_text_cleans_output() {
        let generator = Canned("```sql\nCREATE TABLE a(id INT);\n```\n");
        assert_eq!(generator.describe_text("x").unwrap(), "CREATE TABLE a(id INT);");
    }

    #[rstest]
    #[case("")]
    #[case("```sql\n```")]
    fn test_describe_text_empty_is_error(#[case] output: &'static str) {
        let err = Canned(output).describe_text("x").unwrap_err();
        assert_eq!(err.to_string(), "Generator 'generator' returned empty output");
    }
}
