//! Relationship (edge) record
//!
//! Edges are directed: `(A, B)` and `(B, A)` are distinct relationships.

use super::types::{NodeId, RelationKind};
use serde::{Deserialize, Serialize};

/// Type-specific structured data attached to some relationships
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgePayload {
    /// Creditor/debtor principal
    Debt { amount: u64, currency: String },
    /// Joint-venture ownership split, e.g. `"55/40"`
    JointVenture { ownership_split: String },
    /// Plain ownership stake in percent
    Ownership { pct: u64 },
}

/// A directed, typed relationship between two companies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub source: NodeId,

    pub target: NodeId,

    #[serde(rename = "type")]
    pub kind: RelationKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EdgePayload>,
}

impl Relationship {
    /// Bare relationship without description or payload
    pub fn new(source: NodeId, target: NodeId, kind: RelationKind) -> Self {
        Relationship {
            source,
            target,
            kind,
            description: None,
            data: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_data(mut self, data: EdgePayload) -> Self {
        self.data = Some(data);
        self
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
