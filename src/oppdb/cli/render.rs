//! # Rendering
//!
//! Turns command results into terminal text. Every `render_*` function returns a
//! `String` so layout can be tested without capturing stdout; `print_messages` is
//! the one helper that writes directly.
//!
//! Layout math (column widths, truncation) is unicode-aware; colors come from
//! `colored`, which honors `NO_COLOR` and `CLICOLOR`.

use colored::*;
use oppdb::api::{CmdMessage, MessageLevel};
use oppdb::config::OppConfig;
use oppdb::model::Opportunity;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 5;
const TYPE_WIDTH: usize = 16;
const DEADLINE_WIDTH: usize = 16;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// One line per record: id, type, "title @ organization", deadline.
pub fn render_list(records: &[Opportunity]) -> String {
    if records.is_empty() {
        return "No opportunities yet.\n".to_string();
    }

    let available = LINE_WIDTH.saturating_sub(ID_WIDTH + TYPE_WIDTH + DEADLINE_WIDTH);
    let mut out = String::new();

    for record in records {
        let id = record
            .id
            .map(|id| format!("{}.", id))
            .unwrap_or_else(|| "-".to_string());
        let kind = pad_to_width(&truncate_to_width(record.kind.as_str(), TYPE_WIDTH), TYPE_WIDTH);

        let headline = if record.organization.is_empty() {
            record.opportunity.clone()
        } else {
            format!("{} @ {}", record.opportunity, record.organization)
        };
        let headline = pad_to_width(&truncate_to_width(&headline, available), available);

        let deadline = truncate_to_width(&record.deadline, DEADLINE_WIDTH);

        let id = format!("{:>width$} ", id, width = ID_WIDTH - 1);

        out.push_str(&format!(
            "{}{}{}{}\n",
            id.yellow(),
            kind.cyan(),
            headline,
            deadline.dimmed()
        ));
    }

    out
}

/// Every field of each record, separated by a rule.
pub fn render_full(records: &[Opportunity]) -> String {
    let mut out = String::new();

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        let id = record.id.map(|id| id.to_string()).unwrap_or_default();
        out.push_str(&format!("{} {}\n", id.yellow(), record.opportunity.bold()));
        out.push_str("--------------------------------\n");

        let fields: [(&str, &str); 10] = [
            ("Type", record.kind.as_str()),
            ("Organization", &record.organization),
            ("Address", &record.address),
            ("Price", &record.price),
            ("Salary", &record.salary),
            ("Duration", &record.duration),
            ("Deadline", &record.deadline),
            ("Contact", &record.contact),
            ("Email", &record.email),
            ("TLDR", record.tldr.as_deref().unwrap_or("")),
        ];
        for (label, value) in fields {
            if value.is_empty() {
                continue;
            }
            let label = format!("{:<14}", format!("{}:", label));
            out.push_str(&format!("{}{}\n", label.dimmed(), value));
        }
    }

    out
}

pub fn render_config(config: &OppConfig) -> String {
    config
        .list_all()
        .into_iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() < max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(2) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use oppdb::model::OpportunityType;

    fn record(id: i64, org: &str, title: &str) -> Opportunity {
        let mut r = Opportunity::draft(OpportunityType::JobOpportunity, org, title);
        r.id = Some(id);
        r.deadline = "March 1".into();
        r
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(render_list(&[]), "No opportunities yet.\n");
    }

    #[test]
    fn list_shows_one_line_per_record() {
        let out = render_list(&[record(1, "Acme", "Engineer"), record(2, "Globex", "Intern")]);
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("Engineer @ Acme"));
        assert!(out.contains("Intern @ Globex"));
        assert!(out.contains("Job Opportunity"));
        assert!(out.contains("March 1"));
    }

    #[test]
    fn long_titles_are_truncated() {
        let long = "x".repeat(200);
        let out = render_list(&[record(1, "Acme", &long)]);
        assert!(out.contains('…'));
        assert!(!out.contains(&long));
    }

    #[test]
    fn truncate_respects_wide_chars() {
        let s = truncate_to_width("日本語のタイトルです", 8);
        assert!(s.width() <= 8);
        assert!(s.ends_with('…'));
    }

    #[test]
    fn full_view_skips_empty_fields() {
        let mut r = record(3, "Acme", "Engineer");
        r.email = "jobs@acme.test".into();
        let out = render_full(&[r]);
        assert!(out.contains("Engineer"));
        assert!(out.contains("jobs@acme.test"));
        assert!(!out.contains("Salary"));
    }

    #[test]
    fn full_view_separates_records() {
        let out = render_full(&[record(1, "A", "One"), record(2, "B", "Two")]);
        assert!(out.contains("================================"));
    }

    #[test]
    fn config_lists_every_key() {
        let out = render_config(&OppConfig::default());
        assert!(out.contains("database = opportunities.db"));
        assert!(out.contains("default-type = Competition"));
    }
}
