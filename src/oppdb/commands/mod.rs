use crate::config::OppConfig;
use crate::model::Opportunity;
use crate::store::SchemaReport;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod export;
pub mod init;
pub mod list;
pub mod save;
pub mod tldr;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Opportunity>,
    pub listed: Vec<Opportunity>,
    pub text: Option<String>,
    pub export_path: Option<PathBuf>,
    pub schema: Option<SchemaReport>,
    pub config: Option<OppConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<Opportunity>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<Opportunity>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_schema(mut self, report: SchemaReport) -> Self {
        self.schema = Some(report);
        self
    }

    pub fn with_config(mut self, config: OppConfig) -> Self {
        self.config = Some(config);
        self
    }
}
