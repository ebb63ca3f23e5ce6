use clap::{Args, Parser, Subcommand};
use oppdb::api::ExportFormat;
use oppdb::model::{Opportunity, OpportunityPatch, OpportunityType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "oppdb", bin_name = "oppdb", version)]
#[command(about = "Keep a local board of competitions, OJT placements and job openings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Database file (overrides config; also read from OPPDB_DB)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Read-only board: listing, viewing and exporting only
    #[arg(long, global = true)]
    pub public: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the table or add missing columns
    Init,

    /// Add a new opportunity
    #[command(alias = "n")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit a saved opportunity (only the given fields change)
    #[command(alias = "e")]
    Edit {
        /// Id of the entry
        id: i64,

        #[command(flatten)]
        fields: FieldArgs,

        /// Remove the manual TLDR so the generated one is used
        #[arg(long, conflicts_with = "tldr")]
        clear_tldr: bool,
    },

    /// List stored opportunities
    #[command(alias = "ls")]
    List {
        /// Only entries of this type
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<OpportunityType>,

        /// Search title, organization and address
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show every field of one or more entries
    #[command(alias = "v")]
    View {
        /// Ids of the entries
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },

    /// Print TLDR summaries (all entries when no id is given)
    Tldr {
        ids: Vec<i64>,

        /// Compact four-line digest instead of the full card
        #[arg(long)]
        digest: bool,
    },

    /// Export all entries to a file
    Export {
        /// text, csv, json or archive
        #[arg(short, long, default_value = "text")]
        format: ExportFormat,

        /// Output file (defaults to opportunities-<timestamp>.<ext>)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (database, default-type)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// The entry form, as flags.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Competition, OJT, Job Opportunity (job) or Others
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<OpportunityType>,

    /// Organization
    #[arg(short, long)]
    pub org: Option<String>,

    /// Opportunity title
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Price (if any)
    #[arg(long)]
    pub price: Option<String>,

    /// Salary expectation
    #[arg(long)]
    pub salary: Option<String>,

    #[arg(long)]
    pub duration: Option<String>,

    /// Registration deadline
    #[arg(long)]
    pub deadline: Option<String>,

    /// Contact number
    #[arg(long)]
    pub contact: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Manual TLDR text, used instead of the generated summary
    #[arg(long)]
    pub tldr: Option<String>,
}

impl FieldArgs {
    pub fn into_draft(self, default_kind: OpportunityType) -> Opportunity {
        Opportunity {
            id: None,
            kind: self.kind.unwrap_or(default_kind),
            organization: self.org.unwrap_or_default(),
            opportunity: self.title.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            salary: self.salary.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            deadline: self.deadline.unwrap_or_default(),
            contact: self.contact.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            tldr: self.tldr,
        }
    }

    pub fn into_patch(self, clear_tldr: bool) -> OpportunityPatch {
        let tldr = if clear_tldr {
            Some(None)
        } else {
            self.tldr.map(Some)
        };
        OpportunityPatch {
            kind: self.kind,
            organization: self.org,
            opportunity: self.title,
            address: self.address,
            price: self.price,
            salary: self.salary,
            duration: self.duration,
            deadline: self.deadline,
            contact: self.contact,
            email: self.email,
            tldr,
        }
    }
}
