//! Edge synthesizer: random relationships with a same-sector bias

use crate::config::SynthConfig;
use crate::graph::{Company, NodeId, RelationKind, Relationship, Sector};
use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Generate relationships between `companies`
///
/// Each source draws an out-degree, then makes that many attempts. An
/// attempt whose candidate is the source itself yields no edge and is not
/// retried. The output is deduplicated on `(source, target, type)` keeping
/// the first occurrence.
///
/// # Panics
///
/// Panics if `config` fails [`SynthConfig::validate`]; [`crate::synth::generate`]
/// checks it first.
pub fn synthesize_edges<R: Rng + ?Sized>(
    companies: &[Company],
    config: &SynthConfig,
    rng: &mut R,
) -> Vec<Relationship> {
    let n = companies.len();
    if n == 0 || config.relation_kinds.is_empty() {
        return Vec::new();
    }

    let mut by_sector: IndexMap<Sector, Vec<usize>> = IndexMap::new();
    for (index, company) in companies.iter().enumerate() {
        by_sector.entry(company.sector).or_default().push(index);
    }

    let mut edges = Vec::new();
    for (source_idx, source) in companies.iter().enumerate() {
        let peers: Vec<usize> = by_sector
            .get(&source.sector)
            .map(|members| members.iter().copied().filter(|&j| j != source_idx).collect())
            .unwrap_or_default();

        let degree = config.out_degree.sample(rng);
        for _ in 0..degree {
            let mut target_idx = rng.gen_range(0..n);
            if target_idx == source_idx {
                continue;
            }

            if rng.gen_bool(config.same_sector_bias) {
                if let Some(&peer) = peers.choose(rng) {
                    target_idx = peer;
                }
            }

            let Some(&kind) = config.relation_kinds.choose(rng) else {
                continue;
            };
            edges.push(Relationship::new(
                source.id.clone(),
                companies[target_idx].id.clone(),
                kind,
            ));
        }
    }

    let generated = edges.len();
    let mut seen: FxHashSet<(NodeId, NodeId, RelationKind)> = FxHashSet::default();
    edges.retain(|edge| seen.insert((edge.source.clone(), edge.target.clone(), edge.kind)));

    debug!(
        "Synthesized {} relationships ({} duplicates dropped)",
        edges.len(),
        generated - edges.len()
    );
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IntRange;
    use crate::synth::{synthesize_nodes, Taxonomy};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn companies(seed: u64) -> Vec<Company> {
        let mut rng = StdRng::seed_from_u64(seed);
        synthesize_nodes(&Taxonomy::sp500(), &SynthConfig::default(), &mut rng)
    }

    #[test]
    fn test_no_self_loops_and_unique_triples() {
        let nodes = companies(1);
        let mut rng = StdRng::seed_from_u64(2);
        let edges = synthesize_edges(&nodes, &SynthConfig::default(), &mut rng);

        assert!(!edges.is_empty());
        assert!(edges.iter().all(|e| !e.is_self_loop()));

        let mut keys = FxHashSet::default();
        for edge in &edges {
            assert!(keys.insert((edge.source.clone(), edge.target.clone(), edge.kind)));
        }
    }

    #[test]
    fn test_uses_generic_vocabulary_and_degree_bound() {
        let nodes = companies(4);
        let config = SynthConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let edges = synthesize_edges(&nodes, &config, &mut rng);

        assert!(edges.iter().all(|e| config.relation_kinds.contains(&e.kind)));
        assert!(edges.iter().all(|e| e.description.is_none() && e.data.is_none()));
        assert!(edges.len() <= nodes.len() * 5);

        for node in &nodes {
            let out = edges.iter().filter(|e| e.source == node.id).count();
            assert!(out <= 5);
        }
    }

    #[test]
    fn test_full_bias_keeps_edges_in_sector() {
        let nodes = companies(6);
        let mut config = SynthConfig::default();
        config.same_sector_bias = 1.0;
        let mut rng = StdRng::seed_from_u64(7);
        let edges = synthesize_edges(&nodes, &config, &mut rng);

        let sector_of = |id: &NodeId| nodes.iter().find(|n| &n.id == id).map(|n| n.sector);
        for edge in &edges {
            assert_eq!(sector_of(&edge.source), sector_of(&edge.target));
        }
    }

    #[test]
    fn test_lone_sector_member_keeps_unbiased_target() {
        let taxonomy = Taxonomy::from_sectors([
            (Sector::Energy, vec!["Solo"]),
            (Sector::Materials, vec!["M1", "M2", "M3"]),
        ]);
        let mut rng = StdRng::seed_from_u64(8);
        let nodes = synthesize_nodes(&taxonomy, &SynthConfig::default(), &mut rng);

        let mut config = SynthConfig::default();
        config.same_sector_bias = 1.0;
        config.out_degree = IntRange::new(20, 20);
        let edges = synthesize_edges(&nodes, &config, &mut rng);

        let from_solo: Vec<_> = edges.iter().filter(|e| e.source.as_str() == "c_0").collect();
        assert!(!from_solo.is_empty());
        assert!(from_solo.iter().all(|e| e.target.as_str() != "c_0"));
    }

    #[test]
    fn test_degenerate_inputs() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(synthesize_edges(&[], &SynthConfig::default(), &mut rng).is_empty());

        let single = Taxonomy::from_sectors([(Sector::Energy, vec!["Only"])]);
        let nodes = synthesize_nodes(&single, &SynthConfig::default(), &mut rng);
        assert!(synthesize_edges(&nodes, &SynthConfig::default(), &mut rng).is_empty());
    }
}
