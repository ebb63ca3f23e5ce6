use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OppError, Result};
use crate::model::Opportunity;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &mut S, draft: Opportunity) -> Result<CmdResult> {
    if let Some(id) = draft.id {
        return Err(OppError::Api(format!(
            "Draft already has id {}; use edit to change a saved entry",
            id
        )));
    }

    let saved = store.save(draft)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Entry saved ({}): {}",
        saved.id.unwrap_or_default(),
        saved.opportunity
    )));
    Ok(result.with_affected(vec![saved]))
}
