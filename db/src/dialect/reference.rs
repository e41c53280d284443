//! Reference annotations (`ref: > users.id`).

use std::sync::LazyLock;

use regex::Regex;

use super::types::{Direction, ReferenceSpec};

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^ref\s*:\s*(<>|<|>|-)\s*(\w+)\.(\w+)$").expect("reference pattern is valid")
});

/// Whether a constraint token is a `ref:` annotation, well-formed or not.
pub fn is_reference_token(token: &str) -> bool {
    token
        .split_once(':')
        .is_some_and(|(key, _)| key.trim().eq_ignore_ascii_case("ref"))
}

/// Parse a `ref: <dir> <table>.<column>` token declared on `local_column`.
pub fn resolve_reference(local_column: &str, token: &str) -> Option<ReferenceSpec> {
    let caps = REFERENCE.captures(token.trim())?;
    let direction = Direction::from_marker(caps.get(1)?.as_str())?;

    Some(ReferenceSpec {
        local_column: local_column.to_string(),
        direction,
        remote_table: caps.get(2)?.as_str().to_string(),
        remote_column: caps.get(3)?.as_str().to_string(),
    })
}

impl ReferenceSpec {
    /// `FOREIGN KEY (<local>) REFERENCES <table>(<column>)`.
    ///
    /// Every direction compiles to the same clause.
    pub fn foreign_key_clause(&self) -> String {
        format!(
            "FOREIGN KEY ({}) REFERENCES {}({})",
            self.local_column, self.remote_table, self.remote_column
        )
    }
}
