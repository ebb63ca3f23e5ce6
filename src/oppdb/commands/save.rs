use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Opportunity;
use crate::store::RecordStore;

/// Raw create-or-update. An id that matches no row is accepted silently.
pub fn run<S: RecordStore>(store: &mut S, record: Opportunity) -> Result<CmdResult> {
    let was_draft = record.id.is_none();
    let saved = store.save(record)?;

    let mut result = CmdResult::default();
    let verb = if was_draft { "saved" } else { "updated" };
    result.add_message(CmdMessage::success(format!(
        "Entry {} ({}): {}",
        verb,
        saved.id.unwrap_or_default(),
        saved.opportunity
    )));
    Ok(result.with_affected(vec![saved]))
}
