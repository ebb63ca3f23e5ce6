use crate::error::{OppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OpportunityType {
    #[default]
    Competition,
    #[serde(rename = "OJT")]
    Ojt,
    #[serde(rename = "Job Opportunity")]
    JobOpportunity,
    Others,
}

impl OpportunityType {
    pub const ALL: [OpportunityType; 4] = [
        OpportunityType::Competition,
        OpportunityType::Ojt,
        OpportunityType::JobOpportunity,
        OpportunityType::Others,
    ];

    /// The text stored in the `type` column and shown in summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityType::Competition => "Competition",
            OpportunityType::Ojt => "OJT",
            OpportunityType::JobOpportunity => "Job Opportunity",
            OpportunityType::Others => "Others",
        }
    }
}

impl fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpportunityType {
    type Err = OppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "competition" => Ok(OpportunityType::Competition),
            "ojt" => Ok(OpportunityType::Ojt),
            "job opportunity" | "job" | "job-opportunity" => Ok(OpportunityType::JobOpportunity),
            "others" | "other" => Ok(OpportunityType::Others),
            other => Err(OppError::Api(format!(
                "Unknown opportunity type: {} (expected Competition, OJT, Job Opportunity or Others)",
                other
            ))),
        }
    }
}

/// A single listing. `id` is `None` until the record has been saved once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: OpportunityType,
    pub organization: String,
    pub opportunity: String,
    pub address: String,
    pub price: String,
    pub salary: String,
    pub duration: String,
    pub deadline: String,
    pub contact: String,
    pub email: String,
    pub tldr: Option<String>,
}

impl Opportunity {
    pub fn draft(kind: OpportunityType, organization: &str, opportunity: &str) -> Self {
        Self {
            kind,
            organization: organization.to_string(),
            opportunity: opportunity.to_string(),
            ..Self::default()
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks the two required fields are not empty. Whitespace is a value.
    pub fn validate(&self) -> Result<()> {
        if self.organization.is_empty() {
            return Err(OppError::Validation("organization is required".to_string()));
        }
        if self.opportunity.is_empty() {
            return Err(OppError::Validation("opportunity is required".to_string()));
        }
        Ok(())
    }
}

/// Field changes collected by an edit form. `None` leaves the field as loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpportunityPatch {
    pub kind: Option<OpportunityType>,
    pub organization: Option<String>,
    pub opportunity: Option<String>,
    pub address: Option<String>,
    pub price: Option<String>,
    pub salary: Option<String>,
    pub duration: Option<String>,
    pub deadline: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    /// `Some(None)` clears a stored summary override.
    pub tldr: Option<Option<String>>,
}

impl OpportunityPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, record: &mut Opportunity) {
        if let Some(kind) = self.kind {
            record.kind = kind;
        }
        let fields = [
            (self.organization, &mut record.organization),
            (self.opportunity, &mut record.opportunity),
            (self.address, &mut record.address),
            (self.price, &mut record.price),
            (self.salary, &mut record.salary),
            (self.duration, &mut record.duration),
            (self.deadline, &mut record.deadline),
            (self.contact, &mut record.contact),
            (self.email, &mut record.email),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(tldr) = self.tldr {
            record.tldr = tldr;
        }
    }
}
