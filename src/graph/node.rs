//! Company node record

use super::types::{NodeId, Sector};
use serde::{Deserialize, Serialize};

/// Entity kind carried in the node's `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Company,
}

/// A company node as written to the graph document
///
/// Field order here is the on-disk field order. Market attributes are
/// sampled once by the node synthesizer and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: NodeId,

    /// Display name; not required to be unique
    pub name: String,

    #[serde(rename = "type")]
    pub kind: NodeKind,

    pub sector: Sector,

    /// Visual size weight
    #[serde(rename = "val")]
    pub valuation_weight: f64,

    pub description: String,

    pub price: f64,

    /// Day change in percent
    pub change: f64,

    /// Total value locked; written as `null` when absent
    #[serde(rename = "tvl")]
    pub locked_value: Option<f64>,

    pub volume: f64,
}

impl Company {
    /// Description text for a company in a sector
    pub fn describe(sector: Sector, name: &str) -> String {
        format!(
            "{} {} is a constituent of the S&P 500 index.",
            sector.description(),
            name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Company {
        Company {
            id: NodeId::sequential(3),
            name: "Acme Corp".to_string(),
            kind: NodeKind::Company,
            sector: Sector::Energy,
            valuation_weight: 12.5,
            description: Company::describe(Sector::Energy, "Acme Corp"),
            price: 101.25,
            change: -1.5,
            locked_value: None,
            volume: 2_000_000.0,
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Company::describe(Sector::Utilities, "Grid Co"),
            "A utility company providing electric, gas, or water services. Grid Co is a constituent of the S&P 500 index."
        );
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["id", "name", "type", "sector", "val", "description", "price", "change", "tvl", "volume"]
        );
        assert_eq!(value["type"], "company");
        assert_eq!(value["sector"], "Energy");
        assert!(value["tvl"].is_null());
    }
}
