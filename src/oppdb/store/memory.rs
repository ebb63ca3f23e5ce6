use super::{RecordStore, SchemaReport, SCHEMA_VERSION};
use crate::error::Result;
use crate::model::Opportunity;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    rows: Vec<Opportunity>,
    last_id: i64,
    initialized: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn initialize(&mut self) -> Result<SchemaReport> {
        let created_table = !self.initialized;
        self.initialized = true;
        Ok(SchemaReport {
            created_table,
            added_columns: Vec::new(),
            version: SCHEMA_VERSION,
        })
    }

    fn insert(&mut self, record: &Opportunity) -> Result<i64> {
        self.last_id += 1;
        self.rows.push(Opportunity {
            id: Some(self.last_id),
            ..record.clone()
        });
        Ok(self.last_id)
    }

    fn overwrite(&mut self, id: i64, record: &Opportunity) -> Result<usize> {
        match self.rows.iter_mut().find(|r| r.id == Some(id)) {
            Some(row) => {
                *row = Opportunity {
                    id: Some(id),
                    ..record.clone()
                };
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn load_all(&self) -> Result<Vec<Opportunity>> {
        Ok(self.rows.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::OpportunityType;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = Opportunity::draft(
                    OpportunityType::Competition,
                    &format!("Org {}", i + 1),
                    &format!("Opportunity {}", i + 1),
                );
                self.store.save(record).unwrap();
            }
            self
        }

        pub fn with_record(mut self, kind: OpportunityType, organization: &str, title: &str) -> Self {
            self.store
                .save(Opportunity::draft(kind, organization, title))
                .unwrap();
            self
        }

        pub fn with_full_record(mut self, record: Opportunity) -> Self {
            self.store.save(record).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OppError;
    use crate::model::OpportunityType;

    #[test]
    fn assigns_increasing_ids() {
        let mut store = InMemoryStore::new();
        let a = store
            .save(Opportunity::draft(OpportunityType::Ojt, "A", "One"))
            .unwrap();
        let b = store
            .save(Opportunity::draft(OpportunityType::Ojt, "B", "Two"))
            .unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[test]
    fn update_of_unknown_id_is_silent() {
        let mut store = InMemoryStore::new();
        let mut ghost = Opportunity::draft(OpportunityType::Ojt, "A", "One");
        ghost.id = Some(42);
        let returned = store.save(ghost.clone()).unwrap();
        assert_eq!(returned, ghost);
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn invalid_draft_is_not_stored() {
        let mut store = InMemoryStore::new();
        let err = store
            .save(Opportunity::draft(OpportunityType::Ojt, "", "One"))
            .unwrap_err();
        assert!(matches!(err, OppError::Validation(_)));
        assert!(store.load_all().unwrap().is_empty());
    }
}
