use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OppError, Result};
use crate::model::Opportunity;
use crate::store::RecordStore;
use crate::summary::{effective_tldr, join_blocks};
use chrono::Local;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Column headers of tabular exports. `id` is not exported.
pub const HEADERS: [&str; 11] = [
    "Type",
    "Organization",
    "Opportunity",
    "Address",
    "Price",
    "Salary",
    "Duration",
    "Deadline",
    "Contact",
    "Email",
    "TLDR",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Csv,
    Json,
    Archive,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Archive => "tar.gz",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = OppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "tldr" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "archive" | "tar" | "tar.gz" => Ok(ExportFormat::Archive),
            other => Err(OppError::Api(format!("Unknown export format: {}", other))),
        }
    }
}

pub fn run<S: RecordStore>(
    store: &S,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<CmdResult> {
    let records = store.load_all()?;

    if records.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No entries to export."));
        return Ok(res);
    }

    let path = output.map(Path::to_path_buf).unwrap_or_else(|| default_filename(format));
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, format, &records)?;
    writer.flush()?;

    let mut result = CmdResult::default().with_export_path(path.clone());
    result.add_message(CmdMessage::success(format!(
        "Exported {} entries to {}",
        records.len(),
        path.display()
    )));
    Ok(result)
}

fn default_filename(format: ExportFormat) -> PathBuf {
    let now = Local::now();
    PathBuf::from(format!(
        "opportunities-{}.{}",
        now.format("%Y-%m-%d_%H-%M-%S"),
        format.extension()
    ))
}

pub fn write_records<W: Write>(
    writer: W,
    format: ExportFormat,
    records: &[Opportunity],
) -> Result<()> {
    match format {
        ExportFormat::Text => write_text(writer, records),
        ExportFormat::Csv => write_csv(writer, records),
        ExportFormat::Json => write_json(writer, records),
        ExportFormat::Archive => write_archive(writer, records),
    }
}

fn write_text<W: Write>(mut writer: W, records: &[Opportunity]) -> Result<()> {
    let text = join_blocks(records.iter().map(effective_tldr));
    writeln!(writer, "{}", text)?;
    Ok(())
}

fn write_json<W: Write>(mut writer: W, records: &[Opportunity]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    Ok(())
}

fn write_csv<W: Write>(mut writer: W, records: &[Opportunity]) -> Result<()> {
    writeln!(writer, "{}", HEADERS.join(","))?;
    for r in records {
        let row: [&str; 11] = [
            r.kind.as_str(),
            &r.organization,
            &r.opportunity,
            &r.address,
            &r.price,
            &r.salary,
            &r.duration,
            &r.deadline,
            &r.contact,
            &r.email,
            r.tldr.as_deref().unwrap_or(""),
        ];
        let line: Vec<_> = row.iter().map(|field| csv_field(field)).collect();
        writeln!(writer, "{}", line.join(","))?;
    }
    Ok(())
}

/// RFC 4180 quoting: wrap in quotes when needed, double embedded quotes.
fn csv_field(value: &str) -> String {
    if value.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn write_archive<W: Write>(writer: W, records: &[Opportunity]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for r in records {
        let entry_name = format!(
            "tldr/tldr_{}-{}.txt",
            sanitize_filename(&r.opportunity),
            r.id.unwrap_or_default()
        );
        let content = format!("{}\n", effective_tldr(r));

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, content.as_bytes())?;
    }

    tar.into_inner()?.finish()?;
    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
