use std::error::Error;

use db::ForeignKey;
use serde::Serialize;

use super::TablesCmd;
use crate::cli::Context;
use crate::commands::Execute;

/// A table and the foreign keys it declares
#[derive(Debug, Clone, Serialize)]
pub struct TableEntry {
    pub name: String,
    pub foreign_keys: Vec<ForeignKey>,
}

/// Result of the tables command execution
#[derive(Debug, Serialize)]
pub struct TablesResult {
    pub backend: &'static str,
    pub tables: Vec<TableEntry>,
}

impl Execute for TablesCmd {
    type Output = TablesResult;

    fn execute(self, ctx: &Context) -> Result<Self::Output, Box<dyn Error>> {
        let mut store = ctx.database.connect()?;

        let mut tables = Vec::new();
        for name in store.table_names()? {
            let foreign_keys = store.foreign_keys(&name)?;
            tables.push(TableEntry { name, foreign_keys });
        }

        Ok(TablesResult {
            backend: store.backend_name(),
            tables,
        })
    }
}
