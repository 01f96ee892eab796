//! Core type definitions for the corporate graph

use crate::error::CorpGraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier for a company node (`c_<index>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    /// Identifier assigned to the `index`-th synthesized node
    pub fn sequential(index: usize) -> Self {
        NodeId(format!("c_{}", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

/// GICS sector a company is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum Sector {
    #[serde(rename = "Information Technology")]
    InformationTechnology,
    #[serde(rename = "Communication Services")]
    CommunicationServices,
    #[serde(rename = "Consumer Discretionary")]
    ConsumerDiscretionary,
    #[serde(rename = "Consumer Staples")]
    ConsumerStaples,
    #[serde(rename = "Health Care")]
    HealthCare,
    Financials,
    Industrials,
    Energy,
    Utilities,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Materials,
}

impl Sector {
    pub const ALL: [Sector; 11] = [
        Sector::InformationTechnology,
        Sector::CommunicationServices,
        Sector::ConsumerDiscretionary,
        Sector::ConsumerStaples,
        Sector::HealthCare,
        Sector::Financials,
        Sector::Industrials,
        Sector::Energy,
        Sector::Utilities,
        Sector::RealEstate,
        Sector::Materials,
    ];

    /// Display name, also the on-disk value
    pub fn name(&self) -> &'static str {
        match self {
            Sector::InformationTechnology => "Information Technology",
            Sector::CommunicationServices => "Communication Services",
            Sector::ConsumerDiscretionary => "Consumer Discretionary",
            Sector::ConsumerStaples => "Consumer Staples",
            Sector::HealthCare => "Health Care",
            Sector::Financials => "Financials",
            Sector::Industrials => "Industrials",
            Sector::Energy => "Energy",
            Sector::Utilities => "Utilities",
            Sector::RealEstate => "Real Estate",
            Sector::Materials => "Materials",
        }
    }

    /// Sentence prefixed to every company description in this sector
    pub fn description(&self) -> &'static str {
        match self {
            Sector::InformationTechnology => "A leading technology company focused on software, hardware, semiconductors, or IT services.",
            Sector::CommunicationServices => "A company providing telecommunications, media, or entertainment services.",
            Sector::ConsumerDiscretionary => "A consumer-focused company in retail, automotive, hospitality, or leisure sectors.",
            Sector::ConsumerStaples => "A company providing essential consumer products including food, beverages, and household goods.",
            Sector::HealthCare => "A healthcare company involved in pharmaceuticals, biotechnology, medical devices, or healthcare services.",
            Sector::Financials => "A financial services company providing banking, insurance, investment, or asset management solutions.",
            Sector::Industrials => "An industrial company in aerospace, defense, machinery, transportation, or business services.",
            Sector::Energy => "An energy company involved in oil, gas, or energy infrastructure.",
            Sector::Utilities => "A utility company providing electric, gas, or water services.",
            Sector::RealEstate => "A real estate investment trust (REIT) or real estate services company.",
            Sector::Materials => "A materials company in chemicals, metals, mining, or packaging.",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Sector {
    type Err = CorpGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Sector::ALL
            .iter()
            .copied()
            .find(|sector| sector.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CorpGraphError::UnknownSector(s.to_string()))
    }
}

/// Relationship vocabulary shared by the generator and the augmenter
///
/// Displayed upper-case (`JOINT_VENTURE`), stored lower-case (`joint_venture`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Ownership,
    Partnership,
    Investment,
    Supplier,
    Competitor,
    Client,
    Creditor,
    Debtor,
    JointVenture,
    Licensing,
    Swaps,
    BoardInterlock,
}

impl RelationKind {
    pub const ALL: [RelationKind; 12] = [
        RelationKind::Ownership,
        RelationKind::Partnership,
        RelationKind::Investment,
        RelationKind::Supplier,
        RelationKind::Competitor,
        RelationKind::Client,
        RelationKind::Creditor,
        RelationKind::Debtor,
        RelationKind::JointVenture,
        RelationKind::Licensing,
        RelationKind::Swaps,
        RelationKind::BoardInterlock,
    ];

    /// Upper-case name used when comparing against existing documents
    pub fn as_upper(&self) -> &'static str {
        match self {
            RelationKind::Ownership => "OWNERSHIP",
            RelationKind::Partnership => "PARTNERSHIP",
            RelationKind::Investment => "INVESTMENT",
            RelationKind::Supplier => "SUPPLIER",
            RelationKind::Competitor => "COMPETITOR",
            RelationKind::Client => "CLIENT",
            RelationKind::Creditor => "CREDITOR",
            RelationKind::Debtor => "DEBTOR",
            RelationKind::JointVenture => "JOINT_VENTURE",
            RelationKind::Licensing => "LICENSING",
            RelationKind::Swaps => "SWAPS",
            RelationKind::BoardInterlock => "BOARD_INTERLOCK",
        }
    }

    /// Lower-case tag written to the `type` field on disk
    pub fn as_tag(&self) -> String {
        self.as_upper().to_ascii_lowercase()
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_upper())
    }
}

impl FromStr for RelationKind {
    type Err = CorpGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', ' '], "_");
        RelationKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_upper().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| CorpGraphError::UnknownRelationKind(s.to_string()))
    }
}
