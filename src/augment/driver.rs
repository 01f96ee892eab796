//! "Add missing types" driver
//!
//! Types already present in the document (compared case-insensitively) are
//! skipped entirely, so running the driver again adds nothing for them.

use super::augmenter::{augment_relationships, AugmentOutcome};
use super::catalog::{template_for, RelationTemplate};
use crate::config::AugmentConfig;
use crate::error::{CorpGraphError, CorpGraphResult};
use crate::graph::{GraphDocument, RelationKind};
use rand::Rng;
use serde::Serialize;
use tracing::info;

/// Summary of one driver run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AugmentReport {
    /// Types found in the document before the run, upper-cased and sorted
    pub existing_types: Vec<String>,
    pub skipped: Vec<RelationKind>,
    pub outcomes: Vec<AugmentOutcome>,
}

impl AugmentReport {
    pub fn total_added(&self) -> usize {
        self.outcomes.iter().map(|o| o.added).sum()
    }

    pub fn partial(&self) -> impl Iterator<Item = &AugmentOutcome> {
        self.outcomes.iter().filter(|o| o.is_partial())
    }
}

/// Add `count` edges for every kind in `kinds` that the document lacks
///
/// Every kind must have a catalog entry and `config` must be valid; both are
/// checked before the document is touched.
pub fn add_missing_types<R: Rng + ?Sized>(
    doc: &mut GraphDocument,
    kinds: &[RelationKind],
    count: usize,
    config: &AugmentConfig,
    rng: &mut R,
) -> CorpGraphResult<AugmentReport> {
    config.validate()?;
    let templates = kinds
        .iter()
        .map(|&kind| template_for(kind).ok_or_else(|| CorpGraphError::NotAugmentable(kind.to_string())))
        .collect::<CorpGraphResult<Vec<&RelationTemplate>>>()?;

    let mut present = doc.relation_types();
    let mut existing_types: Vec<String> = present.iter().cloned().collect();
    existing_types.sort();
    info!("Existing relationship types: {:?}", existing_types);

    let mut report = AugmentReport {
        existing_types,
        ..AugmentReport::default()
    };

    for template in templates {
        let kind = template.kind;
        if present.contains(kind.as_upper()) {
            info!("{} already exists, skipping...", kind);
            report.skipped.push(kind);
            continue;
        }

        let outcome = augment_relationships(doc, template, count, None, config, rng)?;
        if outcome.added > 0 {
            present.insert(kind.as_upper().to_string());
        }
        report.outcomes.push(outcome);
    }

    info!("Total new relationships added: {}", report.total_added());
    Ok(report)
}
