use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OppError, Result};
use crate::model::OpportunityPatch;
use crate::store::RecordStore;

/// Load the saved entry, apply the edited fields and write the whole record back.
///
/// Every column is rewritten. A stored type the model does not recognize was
/// loaded as `Others`, so an edit persists `Others` in its place (the store logs
/// a warning when that happens).
pub fn run<S: RecordStore>(store: &mut S, id: i64, patch: OpportunityPatch) -> Result<CmdResult> {
    let mut record = store.find_by_id(id)?.ok_or(OppError::NotFound(id))?;

    if patch.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!("Nothing to change for entry {}", id)));
        return Ok(result.with_affected(vec![record]));
    }

    patch.apply(&mut record);
    let saved = store.save(record)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Entry updated ({}): {}",
        id, saved.opportunity
    )));
    Ok(result.with_affected(vec![saved]))
}
