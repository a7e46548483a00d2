use serde::{Deserialize, Serialize};

use crate::domain::common::{NamedRef, UserRef};
use crate::shared::table::BadgeTone;

/// Pipeline stage of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Proposal,
    Won,
    Lost,
    /// Stage added on the server that this client does not know yet
    #[serde(other)]
    Unknown,
}

impl LeadStatus {
    pub fn code(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Proposal => "proposal",
            LeadStatus::Won => "won",
            LeadStatus::Lost => "lost",
            LeadStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Proposal => "Proposal",
            LeadStatus::Won => "Won",
            LeadStatus::Lost => "Lost",
            LeadStatus::Unknown => "Unknown",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            LeadStatus::New => BadgeTone::Primary,
            LeadStatus::Contacted | LeadStatus::Qualified | LeadStatus::Proposal => {
                BadgeTone::Warning
            }
            LeadStatus::Won => BadgeTone::Success,
            LeadStatus::Lost => BadgeTone::Error,
            LeadStatus::Unknown => BadgeTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub status: LeadStatus,
    #[serde(default)]
    pub source: Option<NamedRef>,
    #[serde(default)]
    pub assigned_to: Option<UserRef>,
    pub created_at: String,
}
