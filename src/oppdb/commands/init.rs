use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, SchemaReport};

pub fn run<S: RecordStore>(store: &mut S) -> Result<CmdResult> {
    let report = store.initialize()?;
    Ok(describe(report))
}

/// Turn a schema report into user-facing messages.
pub fn describe(report: SchemaReport) -> CmdResult {
    let mut result = CmdResult::default();

    if report.created_table {
        result.add_message(CmdMessage::success("Created opportunities table"));
    }
    for column in &report.added_columns {
        result.add_message(CmdMessage::success(format!("Added column: {}", column)));
    }
    if !report.changed() {
        result.add_message(CmdMessage::info(format!(
            "Store is up to date (schema v{})",
            report.version
        )));
    }

    result.with_schema(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::store::sqlite::SqliteStore;

    #[test]
    fn reports_up_to_date_on_second_run() {
        let mut store = InMemoryStore::new();
        let first = run(&mut store).unwrap();
        assert!(first.schema.unwrap().created_table);

        let second = run(&mut store).unwrap();
        assert!(!second.schema.unwrap().changed());
        assert!(second.messages[0].content.contains("up to date"));
    }

    #[test]
    fn describes_added_columns() {
        let report = SchemaReport {
            created_table: false,
            added_columns: vec!["tldr".into()],
            version: 2,
        };
        let result = describe(report);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Added column: tldr");
    }

    #[test]
    fn sqlite_store_is_ready_after_open() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let result = run(&mut store).unwrap();
        assert_eq!(result.schema.unwrap().version, crate::store::SCHEMA_VERSION);
    }
}
