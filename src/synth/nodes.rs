//! Node synthesizer: taxonomy → company nodes with market-style attributes

use super::taxonomy::Taxonomy;
use crate::config::SynthConfig;
use crate::graph::{Company, NodeId, NodeKind, Sector};
use rand::Rng;
use tracing::{debug, warn};

/// Round to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One node per distinct taxonomy member, ids `c_0..` in traversal order
///
/// `config` must pass [`SynthConfig::validate`]; out-of-range probabilities
/// or inverted ranges panic while sampling.
pub fn synthesize_nodes<R: Rng + ?Sized>(
    taxonomy: &Taxonomy,
    config: &SynthConfig,
    rng: &mut R,
) -> Vec<Company> {
    let flat = taxonomy.flatten();
    for duplicate in &flat.duplicates {
        warn!(
            "{} is listed under both {} and {}; keeping {}",
            duplicate.name, duplicate.kept, duplicate.dropped, duplicate.kept
        );
    }

    let companies: Vec<Company> = flat
        .members
        .into_iter()
        .enumerate()
        .map(|(index, (name, sector))| synthesize_company(index, name, sector, config, rng))
        .collect();

    debug!("Synthesized {} company nodes", companies.len());
    companies
}

fn synthesize_company<R: Rng + ?Sized>(
    index: usize,
    name: String,
    sector: Sector,
    config: &SynthConfig,
    rng: &mut R,
) -> Company {
    let has_locked_value = rng.gen_bool(config.tvl_probability);
    let price = config.price_range(sector).sample(rng);
    let valuation_weight = config.valuation_range.sample(rng);
    let change = config.change_range.sample(rng);
    let locked_value = has_locked_value.then(|| round2(config.tvl_range.sample(rng)));
    let volume = config.volume_range.sample(rng);

    Company {
        id: NodeId::sequential(index),
        description: Company::describe(sector, &name),
        name,
        kind: NodeKind::Company,
        sector,
        valuation_weight,
        price: round2(price),
        change: round2(change),
        locked_value,
        volume: round2(volume),
    }
}
