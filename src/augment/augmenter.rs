//! Relationship-type augmenter: append new edges of one type to a document

use super::catalog::RelationTemplate;
use crate::config::AugmentConfig;
use crate::error::CorpGraphResult;
use crate::graph::{GraphDocument, RelationKind, Relationship};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

/// How one augmentation request went
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AugmentOutcome {
    pub kind: RelationKind,
    pub requested: usize,
    pub added: usize,
    pub attempts: usize,
}

impl AugmentOutcome {
    /// Fewer edges were added than requested
    pub fn is_partial(&self) -> bool {
        self.added < self.requested
    }
}

/// Add up to `count` edges of `template.kind` between node pairs that are
/// not linked yet
///
/// A pair is taken if any edge, of any type, already runs from its source to
/// its target. Sampling stops after `count` edges or `max_attempts` draws
/// (default `attempts_per_edge * count`), whichever comes first; a draw of
/// the same node twice uses up an attempt. Documents with fewer than two
/// nodes are left untouched. An invalid `config` is rejected before any
/// sampling.
pub fn augment_relationships<R: Rng + ?Sized>(
    doc: &mut GraphDocument,
    template: &RelationTemplate,
    count: usize,
    max_attempts: Option<usize>,
    config: &AugmentConfig,
    rng: &mut R,
) -> CorpGraphResult<AugmentOutcome> {
    config.validate()?;

    let kind = template.kind;
    let nodes = doc.node_refs();
    if nodes.len() < 2 {
        warn!("Not enough nodes to create {} relationships", kind);
        return Ok(AugmentOutcome {
            kind,
            requested: count,
            added: 0,
            attempts: 0,
        });
    }

    let max_attempts = max_attempts.unwrap_or_else(|| config.max_attempts(count));
    let mut taken = doc.edge_pairs();
    let mut added: Vec<Relationship> = Vec::new();
    let mut attempts = 0;

    while added.len() < count && attempts < max_attempts {
        attempts += 1;
        let source = &nodes[rng.gen_range(0..nodes.len())];
        let target = &nodes[rng.gen_range(0..nodes.len())];

        if source.id == target.id {
            continue;
        }
        let pair = (source.id.clone(), target.id.clone());
        if taken.contains(&pair) {
            continue;
        }

        let description = template.describe(rng, &source.name, &target.name);
        let mut relationship =
            Relationship::new(pair.0.clone(), pair.1.clone(), kind).with_description(description);
        if let Some(data) = template.payload(rng, config) {
            relationship = relationship.with_data(data);
        }

        added.push(relationship);
        taken.insert(pair);
    }

    doc.append_links(&added)?;

    let outcome = AugmentOutcome {
        kind,
        requested: count,
        added: added.len(),
        attempts,
    };
    if outcome.is_partial() {
        warn!(
            "Added only {} of {} {} relationships after {} attempts",
            outcome.added, outcome.requested, kind, attempts
        );
    } else {
        info!("Added {} {} relationships", outcome.added, kind);
    }
    debug!("{} augmentation used {} of {} attempts", kind, attempts, max_attempts);
    Ok(outcome)
}
