//! Integration tests for the PostgreSQL store.
//!
//! These tests require a local PostgreSQL instance.
//! Run with: cargo test -p db --features postgres-tests
//!
//! Prerequisites:
//! 1. PostgreSQL running on localhost
//! 2. Create test database: `createdb -U postgres tablewright_test`
//!
//! Each test works in its own schema so runs do not interfere.

#![cfg(feature = "postgres-tests")]

use db::backend::PostgresStore;
use db::{materialize, ApplyEvent, ForeignKey, SchemaSource, SchemaStore};

/// Test connection string for PostgreSQL (local instance)
const PG_CONNECTION: &str = "host=localhost user=postgres dbname=tablewright_test";

fn store_in_schema(schema: &str) -> PostgresStore {
    let mut store = PostgresStore::connect(PG_CONNECTION).expect("Failed to connect to PostgreSQL");
    store
        .execute_script(&format!(
            "DROP SCHEMA IF EXISTS {schema} CASCADE; CREATE SCHEMA {schema}; SET search_path TO {schema};"
        ))
        .expect("Failed to prepare schema");
    store
}

fn apply(store: &mut dyn SchemaStore, source: SchemaSource) -> Vec<ApplyEvent> {
    let mut events: Vec<ApplyEvent> = Vec::new();
    materialize(store, &source, &mut |event: ApplyEvent| events.push(event))
        .expect("Materialize should succeed");
    events
}

#[test]
fn test_round_trip_with_foreign_key() {
    let mut store = store_in_schema("tw_round_trip");
    let schema = "Table users {\n  id int [primary key]\n}\n\
                  Table orders {\n  id int [primary key]\n  user_id int [ref: > users.id]\n}\n";

    let events = apply(&mut store, SchemaSource::Structured(schema.to_string()));

    assert!(events.iter().all(|e| !e.is_failure()), "{:?}", events);
    assert_eq!(store.table_names().unwrap(), vec!["orders", "users"]);
    assert_eq!(
        store.foreign_keys("orders").unwrap(),
        vec![ForeignKey {
            column: "user_id".to_string(),
            remote_table: "users".to_string(),
            remote_column: "id".to_string(),
        }]
    );
}

#[test]
fn test_autoincrement_is_rejected_per_table() {
    let mut store = store_in_schema("tw_autoincrement");
    let schema = "Table a {\n  id int [pk]\n}\n\
                  Table b {\n  id int [pk, increment]\n}\n\
                  Table c {\n  id int [pk]\n}\n";

    let events = apply(&mut store, SchemaSource::Structured(schema.to_string()));

    let failed: Vec<_> = events.iter().filter(|e| e.is_failure()).collect();
    assert_eq!(failed.len(), 1);
    assert!(matches!(failed[0], ApplyEvent::TableFailed { table, .. } if table == "b"));
    assert_eq!(store.table_names().unwrap(), vec!["a", "c"]);
}

#[test]
fn test_failed_script_rolls_back() {
    let mut store = store_in_schema("tw_script");
    let script = "CREATE TABLE IF NOT EXISTS kept(id INT);\nCREATE TABLE broken(id INT;\n";

    let events = apply(&mut store, SchemaSource::RawScript(script.to_string()));

    assert!(matches!(events.as_slice(), [ApplyEvent::ScriptFailed { .. }]));
    assert!(store.table_names().unwrap().is_empty());
}
