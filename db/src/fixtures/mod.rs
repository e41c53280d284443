//! Schema fixtures for tests.
//!
//! Loaded at compile time using `include_str!`.
//!
//! ## Available Fixtures
//!
//! - [`SHOP`] - users and orders linked by one foreign key
//! - [`PARTIAL_FAILURE`] - three tables, the middle one rejected by the store
//! - [`MESSY`] - every kind of skipped input
//! - [`LIBRARY_SQL`] - a valid two-statement SQL script
//! - [`BROKEN_SQL`] - a SQL script whose second statement fails

/// Users and orders.
///
/// Compiles to two statements with no skips. Applying it yields the foreign key
/// `orders.user_id -> users.id`.
pub const SHOP: &str = include_str!("shop.dbml");

/// Tables `alpha`, `order` and `gamma`; `order` fails on SQLite.
pub const PARTIAL_FAILURE: &str = include_str!("partial_failure.dbml");

/// A project block, unknown constraints, a malformed reference, a stray line
/// and an empty table.
pub const MESSY: &str = include_str!("messy.dbml");

pub const LIBRARY_SQL: &str = include_str!("library.sql");

pub const BROKEN_SQL: &str = include_str!("broken.sql");
