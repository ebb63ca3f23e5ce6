//! # Summaries
//!
//! Pure record → text functions. Nothing here touches storage or the terminal, and
//! every function is total for any [`Opportunity`] value.
//!
//! Two layouts exist:
//!
//! - **Card** ([`format_tldr`]): the seven-line TLDR used for single-record and
//!   batch exports.
//! - **Digest** ([`format_digest`]): the compact four-line block used for printed
//!   overviews.
//!
//! A record may carry a manual `tldr` override; [`effective_tldr`] prefers it over
//! the generated card. `format_tldr` itself never looks at the override.

use crate::model::Opportunity;

const NOT_AVAILABLE: &str = "N/A";

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}

pub fn format_tldr(record: &Opportunity) -> String {
    [
        format!("{} ({})", record.opportunity, record.kind),
        record.organization.clone(),
        record.address.clone(),
        format!(
            "Price: {} | Salary: {}",
            or_na(&record.price),
            or_na(&record.salary)
        ),
        format!("Duration: {}", record.duration),
        format!("Deadline: {}", record.deadline),
        format!("{} | {}", record.contact, record.email),
    ]
    .join("\n")
}

pub fn format_digest(record: &Opportunity) -> String {
    [
        format!(
            "[{}] {} by {}",
            record.kind, record.opportunity, record.organization
        ),
        format!(
            "{} | {} | Reg Deadline: {}",
            record.address, record.duration, record.deadline
        ),
        format!("Price: {} | Salary: {}", record.price, record.salary),
        format!("{} | {}", record.contact, record.email),
    ]
    .join("\n")
}

/// The stored override when it has content, the generated card otherwise.
pub fn effective_tldr(record: &Opportunity) -> String {
    match record.tldr.as_deref() {
        Some(manual) if !manual.trim().is_empty() => manual.to_string(),
        _ => format_tldr(record),
    }
}

/// Join per-record summaries with a blank line, keeping input order.
pub fn join_blocks<I>(blocks: I) -> String
where
    I: IntoIterator<Item = String>,
{
    blocks.into_iter().collect::<Vec<_>>().join("\n\n")
}

pub fn format_batch(records: &[Opportunity]) -> String {
    join_blocks(records.iter().map(format_tldr))
}
