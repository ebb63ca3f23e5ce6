use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Opportunity;
use crate::store::RecordStore;
use crate::summary::{effective_tldr, format_digest, join_blocks};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TldrStyle {
    /// Stored override, or the generated seven-line card
    #[default]
    Card,
    Digest,
}

impl TldrStyle {
    pub fn render(&self, record: &Opportunity) -> String {
        match self {
            TldrStyle::Card => effective_tldr(record),
            TldrStyle::Digest => format_digest(record),
        }
    }
}

/// Summaries for the given ids, or for every entry when `ids` is empty.
pub fn run<S: RecordStore>(store: &S, ids: &[i64], style: TldrStyle) -> Result<CmdResult> {
    let records = if ids.is_empty() {
        store.load_all()?
    } else {
        super::view::run(store, ids)?.listed
    };

    if records.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No entries to summarize."));
        return Ok(result);
    }

    let text = join_blocks(records.iter().map(|r| style.render(r)));
    Ok(CmdResult::default().with_listed(records).with_text(text))
}
