//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every UI client (the
//! bundled CLI today, a form front end tomorrow) goes through [`OppApi`].
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Gates entry points** by [`Access`]: a `Public` board only gets the read
//!   operations, an `Admin` editor gets everything
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! The access split decides which operations a front end exposes. It is not an
//! authorization layer: anyone with the database file can open it as `Admin`.
//! Schema setup belongs to opening the store, so it has already run by the time
//! a `Public` facade exists; only an explicit `init` is refused.
//!
//! ## Generic Over RecordStore
//!
//! `OppApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `OppApi<SqliteStore>`
//! - Testing: `OppApi<InMemoryStore>`

use crate::commands;
use crate::error::{OppError, Result};
use crate::model::{Opportunity, OpportunityPatch};
use crate::store::RecordStore;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    #[default]
    Admin,
    Public,
}

/// The main API facade for oppdb operations.
pub struct OppApi<S: RecordStore> {
    store: S,
    data_dir: PathBuf,
    access: Access,
}

impl<S: RecordStore> OppApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self {
            store,
            data_dir,
            access: Access::Admin,
        }
    }

    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    pub fn access(&self) -> Access {
        self.access
    }

    fn require_admin(&self, operation: &str) -> Result<()> {
        match self.access {
            Access::Admin => Ok(()),
            Access::Public => Err(OppError::Api(format!(
                "{} is not available on the read-only board",
                operation
            ))),
        }
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        self.require_admin("init")?;
        commands::init::run(&mut self.store)
    }

    pub fn create(&mut self, draft: Opportunity) -> Result<commands::CmdResult> {
        self.require_admin("add")?;
        commands::create::run(&mut self.store, draft)
    }

    pub fn update(&mut self, id: i64, patch: OpportunityPatch) -> Result<commands::CmdResult> {
        self.require_admin("edit")?;
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn save(&mut self, record: Opportunity) -> Result<commands::CmdResult> {
        self.require_admin("save")?;
        commands::save::run(&mut self.store, record)
    }

    pub fn list(&self, filter: ListFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn view(&self, ids: &[i64]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn find(&self, id: i64) -> Result<Option<Opportunity>> {
        self.store.find_by_id(id)
    }

    pub fn tldr(&self, ids: &[i64], style: TldrStyle) -> Result<commands::CmdResult> {
        commands::tldr::run(&self.store, ids, style)
    }

    pub fn export(
        &self,
        format: ExportFormat,
        output: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, format, output)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        if matches!(action, ConfigAction::Set(..)) {
            self.require_admin("config set")?;
        }
        commands::config::run(&self.data_dir, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Hand back the store, e.g. to close it explicitly.
    pub fn into_store(self) -> S {
        self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::export::ExportFormat;
pub use commands::list::ListFilter;
pub use commands::tldr::TldrStyle;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OpportunityType;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api(access: Access) -> (TempDir, OppApi<InMemoryStore>) {
        let dir = TempDir::new().unwrap();
        let store = StoreFixture::new().with_records(2).store;
        let api = OppApi::new(store, dir.path().to_path_buf()).with_access(access);
        (dir, api)
    }

    #[test]
    fn admin_create_dispatches_to_store() {
        let (_dir, mut api) = api(Access::Admin);
        let draft = Opportunity::draft(OpportunityType::Ojt, "Acme", "Intern");
        let result = api.create(draft).unwrap();
        assert_eq!(result.affected[0].id, Some(3));
        assert_eq!(api.list(ListFilter::default()).unwrap().listed.len(), 3);
    }

    #[test]
    fn public_board_is_read_only() {
        let (_dir, mut api) = api(Access::Public);
        let draft = Opportunity::draft(OpportunityType::Ojt, "Acme", "Intern");
        assert!(matches!(api.create(draft), Err(OppError::Api(_))));
        assert!(matches!(
            api.update(1, OpportunityPatch::default()),
            Err(OppError::Api(_))
        ));
        assert!(matches!(
            api.config(ConfigAction::Set("database".into(), "x.db".into())),
            Err(OppError::Api(_))
        ));
        assert!(api.init().is_err());

        assert_eq!(api.list(ListFilter::default()).unwrap().listed.len(), 2);
        assert!(api.tldr(&[1], TldrStyle::Card).unwrap().text.is_some());
        assert!(api.config(ConfigAction::ShowAll).unwrap().config.is_some());
    }

    #[test]
    fn find_returns_none_for_missing() {
        let (_dir, api) = api(Access::Public);
        assert!(api.find(1).unwrap().is_some());
        assert!(api.find(10).unwrap().is_none());
    }

    #[test]
    fn update_goes_through_patch() {
        let (_dir, mut api) = api(Access::Admin);
        let patch = OpportunityPatch {
            deadline: Some("Friday".into()),
            ..Default::default()
        };
        api.update(2, patch).unwrap();
        assert_eq!(api.find(2).unwrap().unwrap().deadline, "Friday");
    }
}
