use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Opportunity, OpportunityType};
use crate::store::RecordStore;

#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub kind: Option<OpportunityType>,
    pub search_term: Option<String>,
}

impl ListFilter {
    fn matches(&self, record: &Opportunity, term: Option<&str>) -> bool {
        if let Some(kind) = self.kind {
            if record.kind != kind {
                return false;
            }
        }
        match term {
            None => true,
            Some(term) => [&record.opportunity, &record.organization, &record.address]
                .iter()
                .any(|field| field.to_lowercase().contains(term)),
        }
    }
}

/// The store only answers "all"; filtering happens here, in memory.
pub fn run<S: RecordStore>(store: &S, filter: ListFilter) -> Result<CmdResult> {
    let term = filter
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    let listed: Vec<_> = store
        .load_all()?
        .into_iter()
        .filter(|r| filter.matches(r, term.as_deref()))
        .collect();

    Ok(CmdResult::default().with_listed(listed))
}
