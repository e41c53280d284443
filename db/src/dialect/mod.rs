//! The table-block schema dialect.
//!
//! A deliberately small, DBML-like language:
//!
//! ```text
//! Table users {
//!   id int [primary key, auto_increment]
//!   name varchar [not null, unique, default: "anon"]
//! }
//!
//! Table orders {
//!   id int [pk]
//!   user_id int [ref: > users.id]
//! }
//! ```
//!
//! # Components
//!
//! - `parser` - table block extraction and the single-pass body tokenizer
//! - `constraints` - constraint token classification and column mapping
//! - `reference` - `ref:` annotations and their foreign-key clauses
//! - `types` - the parsed structures shared by all of the above
//!
//! # Constraint Mapping
//!
//! | Token | Clause |
//! |-------|--------|
//! | `primary key`, `pk` | `PRIMARY KEY` |
//! | `not null` | `NOT NULL` |
//! | `unique` | `UNIQUE` |
//! | `default: v` | `DEFAULT v` (quoted for text types) |
//! | `auto_increment`, `increment` | `AUTOINCREMENT` |
//! | `ref: > t.c` | `FOREIGN KEY (col) REFERENCES t(c)` |

mod constraints;
mod parser;
mod reference;
mod types;

pub use constraints::{
    is_text_type, map_column, split_tokens, ConstraintSet, ConstraintToken, DefaultValue,
    MappedColumn,
};
pub use parser::{parse_entries, parse_tables};
pub use reference::{is_reference_token, resolve_reference};
pub use types::{
    BodyEntry, ColumnSpec, Direction, ReferenceSpec, SkipKind, SkippedSpan, TableBlock,
};
