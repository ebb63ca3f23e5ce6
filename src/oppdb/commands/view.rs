use crate::commands::CmdResult;
use crate::error::{OppError, Result};
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, ids: &[i64]) -> Result<CmdResult> {
    let listed = ids
        .iter()
        .map(|&id| store.find_by_id(id)?.ok_or(OppError::NotFound(id)))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed(listed))
}
