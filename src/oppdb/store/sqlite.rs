//! SQLite storage for opportunity listings.

use super::{RecordStore, SchemaReport, SCHEMA_VERSION};
use crate::error::{OppError, Result};
use crate::model::{Opportunity, OpportunityType};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::fs;
use std::path::Path;

const TABLE: &str = "opportunities";

const CREATE_BASELINE: &str = "CREATE TABLE IF NOT EXISTS opportunities (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT,
    organization TEXT,
    opportunity TEXT,
    address TEXT,
    price TEXT,
    salary TEXT,
    duration TEXT,
    deadline TEXT,
    contact TEXT,
    email TEXT
)";

/// Columns added after the baseline, in the order they were introduced.
const ADDED_COLUMNS: &[(&str, &str)] = &[("tldr", "TEXT")];

const SELECT_COLUMNS: &str = "SELECT id, type, organization, opportunity, address, price,
        salary, duration, deadline, contact, email, tldr
 FROM opportunities";

pub struct SqliteStore {
    conn: Connection,
    opened: SchemaReport,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    OppError::Schema(format!("Cannot create {}: {}", parent.display(), e))
                })?;
            }
        }
        log::info!("Opening database at: {}", path.display());
        let conn = Connection::open(path)
            .map_err(|e| OppError::Schema(format!("Cannot open {}: {}", path.display(), e)))?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| OppError::Schema(format!("Cannot open in-memory database: {}", e)))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let mut store = Self {
            conn,
            opened: SchemaReport::default(),
        };
        store.opened = store.initialize()?;
        Ok(store)
    }

    /// What schema setup did when this store was opened.
    pub fn schema_on_open(&self) -> &SchemaReport {
        &self.opened
    }

    /// Explicitly release the connection, surfacing any close error.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| OppError::Storage(e))
    }

    /// Raw `type` text of row `id`, if the row exists and the column is not NULL.
    fn stored_type_text(&self, id: i64) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT type FROM opportunities WHERE id = ?1",
                params![id],
                |r| r.get::<_, Option<String>>(0),
            )
            .optional()
            .map(Option::flatten)
    }

    fn table_exists(&self) -> rusqlite::Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![TABLE],
            |r| r.get(0),
        )?;
        Ok(count > 0)
    }

    fn column_names(&self) -> rusqlite::Result<Vec<String>> {
        let mut stmt = self.conn.prepare("PRAGMA table_info(opportunities)")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>("name"))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(names)
    }

    fn migrate(&mut self) -> rusqlite::Result<SchemaReport> {
        let created_table = !self.table_exists()?;
        self.conn.execute(CREATE_BASELINE, [])?;
        if created_table {
            log::info!("Created table {}", TABLE);
        }

        let existing = self.column_names()?;
        let mut added_columns = Vec::new();
        for (name, decl) in ADDED_COLUMNS {
            if existing.iter().any(|c| c.eq_ignore_ascii_case(name)) {
                continue;
            }
            self.conn.execute(
                &format!("ALTER TABLE {} ADD COLUMN {} {}", TABLE, name, decl),
                [],
            )?;
            log::info!("Added column {}.{}", TABLE, name);
            added_columns.push(name.to_string());
        }

        let version: u32 = self
            .conn
            .query_row("PRAGMA user_version", [], |r| r.get(0))?;
        if version < SCHEMA_VERSION {
            self.conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        }

        Ok(SchemaReport {
            created_table,
            added_columns,
            version: version.max(SCHEMA_VERSION),
        })
    }
}

impl RecordStore for SqliteStore {
    fn initialize(&mut self) -> Result<SchemaReport> {
        self.migrate()
            .map_err(|e| OppError::Schema(format!("Failed to initialize schema: {}", e)))
    }

    fn insert(&mut self, record: &Opportunity) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO opportunities (type, organization, opportunity, address, price,
                    salary, duration, deadline, contact, email, tldr)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                record.kind,
                record.organization,
                record.opportunity,
                record.address,
                record.price,
                record.salary,
                record.duration,
                record.deadline,
                record.contact,
                record.email,
                record.tldr,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn overwrite(&mut self, id: i64, record: &Opportunity) -> Result<usize> {
        if record.kind == OpportunityType::Others {
            if let Some(raw) = self.stored_type_text(id)? {
                if raw.parse::<OpportunityType>().is_err() {
                    log::warn!(
                        "Entry {}: unrecognized type {:?} is rewritten as Others",
                        id,
                        raw
                    );
                }
            }
        }

        let touched = self.conn.execute(
            "UPDATE opportunities SET
                type = ?1, organization = ?2, opportunity = ?3, address = ?4, price = ?5,
                salary = ?6, duration = ?7, deadline = ?8, contact = ?9, email = ?10, tldr = ?11
             WHERE id = ?12",
            params![
                record.kind,
                record.organization,
                record.opportunity,
                record.address,
                record.price,
                record.salary,
                record.duration,
                record.deadline,
                record.contact,
                record.email,
                record.tldr,
                id,
            ],
        )?;
        Ok(touched)
    }

    fn load_all(&self) -> Result<Vec<Opportunity>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))?;
        let records = stmt
            .query_map([], row_to_opportunity)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Opportunity>> {
        let result = self.conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            params![id],
            row_to_opportunity,
        );
        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(OppError::Storage(e)),
        }
    }
}

/// Legacy rows may hold NULL in any text column; those read back as empty strings.
fn text(row: &Row, column: &str) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
}

fn row_to_opportunity(row: &Row) -> rusqlite::Result<Opportunity> {
    Ok(Opportunity {
        id: Some(row.get("id")?),
        kind: row.get("type")?,
        organization: text(row, "organization")?,
        opportunity: text(row, "opportunity")?,
        address: text(row, "address")?,
        price: text(row, "price")?,
        salary: text(row, "salary")?,
        duration: text(row, "duration")?,
        deadline: text(row, "deadline")?,
        contact: text(row, "contact")?,
        email: text(row, "email")?,
        tldr: row.get("tldr")?,
    })
}

impl ToSql for OpportunityType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for OpportunityType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(OpportunityType::Others),
            other => {
                let raw = other.as_str()?;
                Ok(raw.parse().unwrap_or_else(|_| {
                    log::warn!("Unrecognized opportunity type {:?}, reading as Others", raw);
                    OpportunityType::Others
                }))
            }
        }
    }
}
