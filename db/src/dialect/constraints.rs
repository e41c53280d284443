//! Column constraint mapping.
//!
//! A bracketed constraint list is split on commas (outside quotes) and every
//! token is matched as a whole keyword or as a `key: value` pair. Tokens are
//! never searched for substrings, so a default value that happens to contain
//! `unique` does not add a `UNIQUE` clause.

use super::reference::is_reference_token;
use super::types::ColumnSpec;

/// Base types whose bare default values are rendered as string literals.
const TEXT_TYPES: &[&str] = &[
    "varchar",
    "char",
    "character",
    "nvarchar",
    "nchar",
    "text",
    "tinytext",
    "mediumtext",
    "longtext",
    "string",
    "clob",
];

/// Base types eligible for the `INTEGER PRIMARY KEY AUTOINCREMENT` form.
const INTEGER_TYPES: &[&str] = &["int", "integer", "bigint", "smallint", "tinyint", "mediumint"];

/// A `default:` value as written in the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// `"x"` or `'x'`, quotes removed
    Quoted(String),
    /// `` `now()` ``, backticks removed
    Expression(String),
    /// Anything else, trimmed
    Bare(String),
}

impl DefaultValue {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let mut chars = raw.chars();
        match (chars.next(), chars.next_back()) {
            (Some(open @ ('"' | '\'')), Some(close)) if raw.len() >= 2 && open == close => {
                DefaultValue::Quoted(raw[1..raw.len() - 1].to_string())
            }
            (Some('`'), Some('`')) if raw.len() >= 2 => {
                DefaultValue::Expression(raw[1..raw.len() - 1].trim().to_string())
            }
            _ => DefaultValue::Bare(raw.to_string()),
        }
    }

    /// Render the value for a `DEFAULT` clause on a column of the given kind.
    pub fn render(&self, text_like: bool) -> String {
        match self {
            DefaultValue::Quoted(value) => sql_literal(value),
            DefaultValue::Expression(value) => value.clone(),
            DefaultValue::Bare(value) if text_like => sql_literal(value),
            DefaultValue::Bare(value) => value.clone(),
        }
    }
}

/// One classified token from a constraint list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintToken<'a> {
    PrimaryKey,
    NotNull,
    Unique,
    Default(DefaultValue),
    AutoIncrement,
    /// `ref: ...`; resolved by the body tokenizer
    Reference(&'a str),
    /// `null`, accepted and ignored
    Null,
    /// `note: ...`, accepted and ignored
    Note,
    Unknown(&'a str),
}

impl<'a> ConstraintToken<'a> {
    pub fn classify(token: &'a str) -> Self {
        let normalized = token
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();

        match normalized.as_str() {
            "primary key" | "pk" => return ConstraintToken::PrimaryKey,
            "not null" => return ConstraintToken::NotNull,
            "unique" => return ConstraintToken::Unique,
            "null" => return ConstraintToken::Null,
            "increment" | "auto_increment" | "autoincrement" => return ConstraintToken::AutoIncrement,
            _ => {}
        }

        if is_reference_token(token) {
            return ConstraintToken::Reference(token);
        }

        let Some((key, value)) = token.split_once(':') else {
            return ConstraintToken::Unknown(token);
        };

        match key.trim().to_ascii_lowercase().as_str() {
            "default" if !value.trim().is_empty() => ConstraintToken::Default(DefaultValue::parse(value)),
            "note" => ConstraintToken::Note,
            _ => ConstraintToken::Unknown(token),
        }
    }
}

/// The constraints of one column, each present at most once.
///
/// Clauses are always emitted in the order primary key, not null, unique,
/// default, auto-increment, whatever order they were declared in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    pub primary_key: bool,
    pub not_null: bool,
    pub unique: bool,
    pub default: Option<DefaultValue>,
    pub auto_increment: bool,
}

impl ConstraintSet {
    /// Parse a raw constraint list.
    ///
    /// Returns the set together with the tokens that have no mapping.
    pub fn parse(list: &str) -> (Self, Vec<String>) {
        let mut set = ConstraintSet::default();
        let mut unknown = Vec::new();

        for token in split_tokens(list) {
            match ConstraintToken::classify(token) {
                ConstraintToken::PrimaryKey => set.primary_key = true,
                ConstraintToken::NotNull => set.not_null = true,
                ConstraintToken::Unique => set.unique = true,
                ConstraintToken::Default(value) => {
                    // first declaration wins
                    if set.default.is_none() {
                        set.default = Some(value);
                    }
                }
                ConstraintToken::AutoIncrement => set.auto_increment = true,
                ConstraintToken::Reference(_) | ConstraintToken::Null | ConstraintToken::Note => {}
                ConstraintToken::Unknown(token) => unknown.push(token.to_string()),
            }
        }

        (set, unknown)
    }

    /// SQL clauses in emission order.
    pub fn clauses(&self, text_like: bool) -> Vec<String> {
        let mut clauses = Vec::new();
        if self.primary_key {
            clauses.push("PRIMARY KEY".to_string());
        }
        if self.not_null {
            clauses.push("NOT NULL".to_string());
        }
        if self.unique {
            clauses.push("UNIQUE".to_string());
        }
        if let Some(default) = &self.default {
            clauses.push(format!("DEFAULT {}", default.render(text_like)));
        }
        if self.auto_increment {
            clauses.push("AUTOINCREMENT".to_string());
        }
        clauses
    }
}

/// A column clause ready for the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedColumn {
    /// `"<name> <TYPE> <CONSTRAINTS>"`
    pub clause: String,

    /// Constraint tokens that were not understood
    pub unknown: Vec<String>,
}

/// Map a column declaration to its DDL clause.
pub fn map_column(column: &ColumnSpec) -> MappedColumn {
    let (set, unknown) = column
        .constraints
        .as_deref()
        .map(ConstraintSet::parse)
        .unwrap_or_default();

    let base = base_type(&column.declared_type);
    let sql_type = if set.primary_key && set.auto_increment && INTEGER_TYPES.contains(&base.as_str()) {
        // the store only honours AUTOINCREMENT on INTEGER PRIMARY KEY
        "INTEGER".to_string()
    } else {
        column.declared_type.to_uppercase()
    };

    let mut parts = vec![column.name.clone(), sql_type];
    parts.extend(set.clauses(is_text_type(&column.declared_type)));

    MappedColumn {
        clause: parts.join(" "),
        unknown,
    }
}

/// Whether a declared type belongs to the text family (case-insensitive,
/// size suffix ignored).
pub fn is_text_type(declared_type: &str) -> bool {
    TEXT_TYPES.contains(&base_type(declared_type).as_str())
}

/// Split a constraint list on commas that are not inside a quoted value.
///
/// A quote or backtick only opens a quoted value when it is the first
/// character of a token or of the value after `key:`, so `O'Brien` stays a
/// bare value. If a quoted value is never closed the list is split on every
/// comma instead. Tokens are trimmed; empty tokens are dropped.
pub fn split_tokens(list: &str) -> Vec<&str> {
    quoted_split(list)
        .unwrap_or_else(|| list.split(',').collect())
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

fn quoted_split(list: &str) -> Option<Vec<&str>> {
    let mut tokens = Vec::new();
    let mut quote: Option<char> = None;
    let mut value_start = true;
    let mut start = 0;

    for (idx, c) in list.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' if value_start => quote = Some(c),
            ',' => {
                tokens.push(&list[start..idx]);
                start = idx + 1;
                value_start = true;
                continue;
            }
            ':' => {
                value_start = true;
                continue;
            }
            c if c.is_whitespace() => continue,
            _ => {}
        }
        value_start = false;
    }

    if quote.is_some() {
        return None;
    }
    tokens.push(&list[start..]);
    Some(tokens)
}

fn base_type(declared_type: &str) -> String {
    declared_type
        .split('(')
        .next()
        .unwrap_or(declared_type)
        .trim()
        .to_ascii_lowercase()
}

fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn column(name: &str, declared_type: &str, constraints: Option<&str>) -> ColumnSpec {
        ColumnSpec {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
            constraints: constraints.map(str::to_string),
            line: 1,
        }
    }

    #[rstest]
    fn test_text_column_with_quoted_default() {
        let mapped = map_column(&column("name", "varchar", Some(r#"not null, unique, default: "x""#)));
        assert_eq!(mapped.clause, "name VARCHAR NOT NULL UNIQUE DEFAULT 'x'");
        assert!(mapped.unknown.is_empty());
    }

    #[rstest]
    fn test_numeric_default_is_unquoted() {
        let mapped = map_column(&column("age", "int", Some("default: 0")));
        assert_eq!(mapped.clause, "age INT DEFAULT 0");
    }

    #[rstest]
    fn test_no_constraints_yields_bare_clause() {
        let mapped = map_column(&column("bio", "text", None));
        assert_eq!(mapped.clause, "bio TEXT");
    }

    #[rstest]
    fn test_fixed_clause_order() {
        let mapped = map_column(&column("code", "text", Some("default: abc, unique, not null, pk")));
        assert_eq!(mapped.clause, "code TEXT PRIMARY KEY NOT NULL UNIQUE DEFAULT 'abc'");
    }

    #[rstest]
    fn test_repeated_constraints_emitted_once() {
        let mapped = map_column(&column("id", "int", Some("unique, unique, default: 1, default: 2")));
        assert_eq!(mapped.clause, "id INT UNIQUE DEFAULT 1");
    }

    #[rstest]
    fn test_keywords_are_case_insensitive() {
        let mapped = map_column(&column("id", "int", Some("Primary  Key, NOT NULL")));
        assert_eq!(mapped.clause, "id INT PRIMARY KEY NOT NULL");
    }

    #[rstest]
    fn test_integer_primary_key_with_autoincrement() {
        let mapped = map_column(&column("id", "int", Some("primary key, auto_increment")));
        assert_eq!(mapped.clause, "id INTEGER PRIMARY KEY AUTOINCREMENT");
    }

    #[rstest]
    fn test_autoincrement_without_primary_key_keeps_type() {
        let mapped = map_column(&column("seq", "int", Some("increment")));
        assert_eq!(mapped.clause, "seq INT AUTOINCREMENT");
    }

    #[rstest]
    fn test_default_containing_keyword_does_not_trigger_it() {
        let mapped = map_column(&column("label", "varchar", Some("default: 'unique not null'")));
        assert_eq!(mapped.clause, "label VARCHAR DEFAULT 'unique not null'");
    }

    #[rstest]
    fn test_default_with_comma_inside_quotes() {
        let mapped = map_column(&column("place", "text", Some("default: 'Paris, France', not null")));
        assert_eq!(mapped.clause, "place TEXT NOT NULL DEFAULT 'Paris, France'");
    }

    #[rstest]
    fn test_default_expression_is_verbatim() {
        let mapped = map_column(&column("created_at", "timestamp", Some("default: `CURRENT_TIMESTAMP`")));
        assert_eq!(mapped.clause, "created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP");
    }

    #[rstest]
    fn test_default_escapes_single_quotes() {
        let mapped = map_column(&column("greeting", "text", Some(r#"default: "it's""#)));
        assert_eq!(mapped.clause, "greeting TEXT DEFAULT 'it''s'");
    }

    #[rstest]
    fn test_sized_type_upper_cased() {
        let mapped = map_column(&column("title", "varchar(255)", Some("default: untitled")));
        assert_eq!(mapped.clause, "title VARCHAR(255) DEFAULT 'untitled'");
    }

    #[rstest]
    fn test_reference_note_and_null_tokens_emit_nothing() {
        let mapped = map_column(&column("user_id", "int", Some("null, note: 'owner', ref: > users.id")));
        assert_eq!(mapped.clause, "user_id INT");
        assert!(mapped.unknown.is_empty());
    }

    #[rstest]
    fn test_unknown_tokens_are_reported() {
        let mapped = map_column(&column("age", "int", Some("not null, check: age > 0")));
        assert_eq!(mapped.clause, "age INT NOT NULL");
        assert_eq!(mapped.unknown, vec!["check: age > 0".to_string()]);
    }

    #[rstest]
    #[case("varchar", true)]
    #[case("VARCHAR(64)", true)]
    #[case("text", true)]
    #[case("int", false)]
    #[case("boolean", false)]
    fn test_is_text_type(#[case] declared: &str, #[case] expected: bool) {
        assert_eq!(is_text_type(declared), expected);
    }

    #[rstest]
    #[case("a, b", vec!["a", "b"])]
    #[case(" a ,, b ", vec!["a", "b"])]
    #[case("default: 'x, y', pk", vec!["default: 'x, y'", "pk"])]
    #[case("default: `f(a, b)`", vec!["default: `f(a, b)`"])]
    #[case("", vec![])]
    fn test_split_tokens(#[case] list: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_tokens(list), expected);
    }

    #[rstest]
    #[case(r#""x""#, DefaultValue::Quoted("x".to_string()))]
    #[case("'x'", DefaultValue::Quoted("x".to_string()))]
    #[case("`now()`", DefaultValue::Expression("now()".to_string()))]
    #[case("42", DefaultValue::Bare("42".to_string()))]
    #[case("'", DefaultValue::Bare("'".to_string()))]
    fn test_default_value_parse(#[case] raw: &str, #[case] expected: DefaultValue) {
        assert_eq!(DefaultValue::parse(raw), expected);
    }

    #[rstest]
    fn test_classify_empty_default_is_unknown() {
        assert_eq!(ConstraintToken::classify("default:"), ConstraintToken::Unknown("default:"));
    }

    #[rstest]
    fn test_note_adds_no_clause() {
        let (set, unknown) = ConstraintSet::parse("note: 'x'");
        assert_eq!(set, ConstraintSet::default());
        assert!(unknown.is_empty());
    }

    #[rstest]
    fn test_map_column_apostrophe_in_bare_default() {
        let mapped = map_column(&column("owner", "varchar", Some("default: O'Brien, unique, not null")));
        assert_eq!(mapped.clause, "owner VARCHAR NOT NULL UNIQUE DEFAULT 'O''Brien'");
        assert!(mapped.unknown.is_empty());
    }

    #[rstest]
    #[case("default: 'a, b', unique", vec!["default: 'a, b'", "unique"])]
    #[case("default: O'Brien, unique", vec!["default: O'Brien", "unique"])]
    #[case("note: it's, not null", vec!["note: it's", "not null"])]
    #[case("default: 'open, unique", vec!["default: 'open", "unique"])]
    fn test_split_tokens_quotes(#[case] list: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_tokens(list), expected);
    }
}
