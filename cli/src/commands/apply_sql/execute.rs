use std::error::Error;

use db::SchemaSource;

use super::ApplySqlCmd;
use crate::cli::Context;
use crate::commands::apply::ApplyReport;
use crate::commands::{read_input, Execute};

impl Execute for ApplySqlCmd {
    type Output = ApplyReport;

    fn execute(self, ctx: &Context) -> Result<Self::Output, Box<dyn Error>> {
        let script = read_input(&self.file)?;
        let mut store = ctx.database.connect()?;

        ApplyReport::collect(
            &mut *store,
            self.file.display().to_string(),
            &SchemaSource::RawScript(script),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::file_context;
    use db::fixtures;
    use db::test_utils::create_temp_file;
    use db::ApplyEvent;
    use rstest::rstest;

    fn apply_sql(ctx: &Context, script: &str) -> ApplyReport {
        let file = create_temp_file(script, ".sql");
        ApplySqlCmd {
            file: file.path().to_path_buf(),
        }
        .execute(ctx)
        .expect("Apply should succeed")
    }

    #[rstest]
    fn test_apply_sql_library() {
        let (_db, ctx) = file_context();
        let report = apply_sql(&ctx, fixtures::LIBRARY_SQL);

        assert_eq!(report.mode, "raw_script");
        assert_eq!(report.events, vec![ApplyEvent::ScriptApplied { statements: 2 }]);

        let mut store = ctx.database.connect().unwrap();
        assert_eq!(store.table_names().unwrap(), vec!["authors", "books"]);
    }

    #[rstest]
    fn test_apply_sql_broken_rolls_back() {
        let (_db, ctx) = file_context();
        let report = apply_sql(&ctx, fixtures::BROKEN_SQL);

        assert_eq!(report.failed(), 1);
        assert_eq!(report.applied(), 0);

        let mut store = ctx.database.connect().unwrap();
        assert!(store.table_names().unwrap().is_empty());
    }
}
