//! Generation and augmentation parameters
//!
//! Every knob has a default matching the built-in dataset, so an empty YAML
//! file (or none at all) reproduces the stock behaviour.

use crate::augment::catalog;
use crate::error::{CorpGraphError, CorpGraphResult};
use crate::graph::{RelationKind, Sector};
use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Closed interval of floats sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl FloatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }

    fn validate(&self, field: &str) -> CorpGraphResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(CorpGraphError::InvalidConfig(format!(
                "{}: range [{}, {}] is empty or not finite",
                field, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Closed interval of integers sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u64,
    pub max: u64,
}

impl IntRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.gen_range(self.min..=self.max)
    }

    fn validate(&self, field: &str) -> CorpGraphResult<()> {
        if self.min > self.max {
            return Err(CorpGraphError::InvalidConfig(format!(
                "{}: range [{}, {}] is empty",
                field, self.min, self.max
            )));
        }
        Ok(())
    }
}

fn validate_probability(field: &str, p: f64) -> CorpGraphResult<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(CorpGraphError::InvalidConfig(format!(
            "{}: probability {} is outside [0, 1]",
            field, p
        )));
    }
    Ok(())
}

/// Parameters of the node and edge synthesizers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Share-price range per sector
    pub price_ranges: IndexMap<Sector, FloatRange>,
    /// Used for sectors missing from `price_ranges`
    pub fallback_price_range: FloatRange,
    /// Visual weight (`val`)
    pub valuation_range: FloatRange,
    /// Day change, in percent
    pub change_range: FloatRange,
    pub volume_range: FloatRange,
    /// Chance that a company carries a total-value-locked figure
    pub tvl_probability: f64,
    pub tvl_range: FloatRange,
    /// Outgoing edge attempts per source node
    pub out_degree: IntRange,
    /// Chance an attempt is rerouted to a same-sector peer
    pub same_sector_bias: f64,
    /// Generic relationship vocabulary used by the edge synthesizer
    pub relation_kinds: Vec<RelationKind>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        let price_ranges = IndexMap::from([
            (Sector::InformationTechnology, FloatRange::new(100.0, 800.0)),
            (Sector::Financials, FloatRange::new(50.0, 500.0)),
            (Sector::HealthCare, FloatRange::new(80.0, 600.0)),
            (Sector::Energy, FloatRange::new(40.0, 200.0)),
            (Sector::Utilities, FloatRange::new(30.0, 120.0)),
            (Sector::RealEstate, FloatRange::new(50.0, 300.0)),
            (Sector::Materials, FloatRange::new(40.0, 250.0)),
            (Sector::ConsumerStaples, FloatRange::new(50.0, 300.0)),
            (Sector::ConsumerDiscretionary, FloatRange::new(50.0, 500.0)),
            (Sector::CommunicationServices, FloatRange::new(50.0, 400.0)),
        ]);

        Self {
            price_ranges,
            fallback_price_range: FloatRange::new(50.0, 300.0),
            valuation_range: FloatRange::new(5.0, 25.0),
            change_range: FloatRange::new(-8.0, 8.0),
            volume_range: FloatRange::new(1_000_000.0, 50_000_000.0),
            tvl_probability: 0.05,
            tvl_range: FloatRange::new(100_000_000.0, 5_000_000_000.0),
            out_degree: IntRange::new(1, 5),
            same_sector_bias: 0.4,
            relation_kinds: vec![
                RelationKind::Partnership,
                RelationKind::Ownership,
                RelationKind::Investment,
                RelationKind::Supplier,
                RelationKind::Competitor,
            ],
        }
    }
}

impl SynthConfig {
    /// Price range for a sector, falling back when the sector is unmapped
    pub fn price_range(&self, sector: Sector) -> FloatRange {
        self.price_ranges
            .get(&sector)
            .copied()
            .unwrap_or(self.fallback_price_range)
    }

    pub fn validate(&self) -> CorpGraphResult<()> {
        for (sector, range) in &self.price_ranges {
            range.validate(&format!("price_ranges.{}", sector))?;
        }
        self.fallback_price_range.validate("fallback_price_range")?;
        self.valuation_range.validate("valuation_range")?;
        self.change_range.validate("change_range")?;
        self.volume_range.validate("volume_range")?;
        self.tvl_range.validate("tvl_range")?;
        self.out_degree.validate("out_degree")?;
        validate_probability("tvl_probability", self.tvl_probability)?;
        validate_probability("same_sector_bias", self.same_sector_bias)?;
        if self.relation_kinds.is_empty() {
            return Err(CorpGraphError::InvalidConfig(
                "relation_kinds must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters of the relationship-type augmenter and its driver
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    /// Types the driver adds when they are missing from the document
    pub kinds: Vec<RelationKind>,
    /// Target number of new edges per missing type
    pub count_per_kind: usize,
    /// Attempt budget is `attempts_per_edge * count`
    pub attempts_per_edge: usize,
    /// Fixed attempt budget per type; replaces `attempts_per_edge * count`
    pub attempt_limit: Option<usize>,
    /// Creditor/debtor principal, whole currency units
    pub debt_amount: IntRange,
    pub currency: String,
    /// Each side of a joint-venture split, sampled independently
    pub joint_venture_share: IntRange,
    pub ownership_pct: IntRange,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            kinds: vec![
                RelationKind::Client,
                RelationKind::Supplier,
                RelationKind::Creditor,
                RelationKind::Debtor,
                RelationKind::JointVenture,
                RelationKind::Licensing,
                RelationKind::Swaps,
                RelationKind::BoardInterlock,
            ],
            count_per_kind: 60,
            attempts_per_edge: 10,
            attempt_limit: None,
            debt_amount: IntRange::new(1_000_000, 1_000_000_000),
            currency: "USD".to_string(),
            joint_venture_share: IntRange::new(30, 70),
            ownership_pct: IntRange::new(5, 95),
        }
    }
}

impl AugmentConfig {
    /// Default attempt budget for a request of `count` edges
    pub fn max_attempts(&self, count: usize) -> usize {
        self.attempt_limit
            .unwrap_or_else(|| count.saturating_mul(self.attempts_per_edge))
    }

    pub fn validate(&self) -> CorpGraphResult<()> {
        for kind in &self.kinds {
            if catalog::template_for(*kind).is_none() {
                return Err(CorpGraphError::NotAugmentable(kind.to_string()));
            }
        }
        if self.debt_amount.min == 0 {
            return Err(CorpGraphError::InvalidConfig(
                "debt_amount must be positive".to_string(),
            ));
        }
        self.debt_amount.validate("debt_amount")?;
        self.joint_venture_share.validate("joint_venture_share")?;
        self.ownership_pct.validate("ownership_pct")?;
        Ok(())
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpGraphConfig {
    pub synth: SynthConfig,
    pub augment: AugmentConfig,
}

impl CorpGraphConfig {
    pub fn from_yaml_str(yaml: &str) -> CorpGraphResult<Self> {
        let config: CorpGraphConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> CorpGraphResult<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| CorpGraphError::io(path, e))?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> CorpGraphResult<()> {
        self.synth.validate()?;
        self.augment.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        CorpGraphConfig::default().validate().unwrap();
    }

    #[test]
    fn test_price_range_fallback() {
        let mut config = SynthConfig::default();
        assert_eq!(config.price_range(Sector::Utilities), FloatRange::new(30.0, 120.0));
        // Industrials has no dedicated range in the stock table
        assert_eq!(config.price_range(Sector::Industrials), config.fallback_price_range);

        config.price_ranges.shift_remove(&Sector::Energy);
        assert_eq!(config.price_range(Sector::Energy), FloatRange::new(50.0, 300.0));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
synth:
  same_sector_bias: 0.9
  price_ranges:
    Energy: { min: 10.0, max: 20.0 }
augment:
  count_per_kind: 5
  kinds: [client, joint_venture]
"#;
        let config = CorpGraphConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.synth.same_sector_bias, 0.9);
        assert_eq!(config.synth.price_range(Sector::Energy), FloatRange::new(10.0, 20.0));
        assert_eq!(config.synth.out_degree, IntRange::new(1, 5));
        assert_eq!(config.augment.count_per_kind, 5);
        assert_eq!(config.augment.kinds, vec![RelationKind::Client, RelationKind::JointVenture]);
        assert_eq!(config.augment.max_attempts(5), 50);
        assert_eq!(config.augment.currency, "USD");
    }

    #[test]
    fn test_attempt_limit_overrides_per_edge_budget() {
        let config = CorpGraphConfig::from_yaml_str("augment:\n  attempt_limit: 7\n").unwrap();
        assert_eq!(config.augment.max_attempts(5), 7);
        assert_eq!(config.augment.max_attempts(100), 7);
    }

    #[test]
    fn test_rejects_bad_values() {
        let inverted = "synth:\n  out_degree: { min: 5, max: 1 }\n";
        assert!(matches!(
            CorpGraphConfig::from_yaml_str(inverted),
            Err(CorpGraphError::InvalidConfig(_))
        ));

        let probability = "synth:\n  tvl_probability: 1.5\n";
        assert!(CorpGraphConfig::from_yaml_str(probability).is_err());

        let not_augmentable = "augment:\n  kinds: [competitor]\n";
        assert!(matches!(
            CorpGraphConfig::from_yaml_str(not_augmentable),
            Err(CorpGraphError::NotAugmentable(_))
        ));
    }
}
