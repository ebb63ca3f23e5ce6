//! # Storage Layer
//!
//! The [`RecordStore`] trait is the only stateful seam in oppdb. Everything above it
//! (commands, API, CLI) holds disconnected copies of [`Opportunity`] values and must
//! go through `save` to change anything.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production storage, one `opportunities` table in a
//!   local SQLite file. Owns its connection; schema setup and the `tldr` column
//!   migration run on open.
//! - [`memory::InMemoryStore`]: Vec-backed storage for tests. Same id assignment and
//!   update semantics, no persistence.
//!
//! ## Save Semantics
//!
//! `save` is create-or-update keyed on `id`:
//! - `id == None`: validate, insert, return the record with its new id.
//! - `id == Some(n)`: validate, overwrite every column of row `n`. A missing row is
//!   a silent no-op, not an error. Last write wins.
//!
//! Validation lives in the provided `save` method so both backends share one gate;
//! backends only implement the raw `insert`/`overwrite` writes.

use crate::error::Result;
use crate::model::Opportunity;

pub mod memory;
pub mod sqlite;

/// Current schema version, recorded in `PRAGMA user_version`.
/// 1 = baseline columns, 2 = `tldr` column.
pub const SCHEMA_VERSION: u32 = 2;

/// Report from the `initialize` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    pub created_table: bool,
    pub added_columns: Vec<String>,
    pub version: u32,
}

impl SchemaReport {
    pub fn changed(&self) -> bool {
        self.created_table || !self.added_columns.is_empty()
    }
}

pub trait RecordStore {
    /// Ensure the table and all current columns exist. Safe to call repeatedly.
    fn initialize(&mut self) -> Result<SchemaReport>;

    /// Insert a new row and return its assigned id.
    fn insert(&mut self, record: &Opportunity) -> Result<i64>;

    /// Overwrite every column of row `id`. Returns the number of rows touched (0 or 1).
    fn overwrite(&mut self, id: i64, record: &Opportunity) -> Result<usize>;

    /// All records in insertion order (ascending id).
    fn load_all(&self) -> Result<Vec<Opportunity>>;

    fn find_by_id(&self, id: i64) -> Result<Option<Opportunity>> {
        Ok(self.load_all()?.into_iter().find(|r| r.id == Some(id)))
    }

    /// Create (no id) or full-overwrite update (with id).
    fn save(&mut self, record: Opportunity) -> Result<Opportunity> {
        record.validate()?;
        match record.id {
            Some(id) => {
                let touched = self.overwrite(id, &record)?;
                if touched == 0 {
                    log::debug!("save: no row with id {}, nothing updated", id);
                } else {
                    log::debug!("save: updated opportunity {}", id);
                }
                Ok(record)
            }
            None => {
                let id = self.insert(&record)?;
                log::debug!("save: inserted opportunity {}", id);
                Ok(Opportunity {
                    id: Some(id),
                    ..record
                })
            }
        }
    }
}
