use corpgraph::synth::{generate, rng_from_seed, synthesize_edges, synthesize_nodes, Taxonomy};
use corpgraph::{load_document, save_document, Sector, SynthConfig};
use std::collections::HashSet;
use tempfile::TempDir;

fn three_sectors() -> Taxonomy {
    Taxonomy::from_sectors([
        (Sector::InformationTechnology, ["Chip Co", "Soft Co"]),
        (Sector::HealthCare, ["Pharma Co", "Device Co"]),
        (Sector::Energy, ["Oil Co", "Gas Co"]),
    ])
}

#[test]
fn test_node_ids_in_taxonomy_order() {
    let mut rng = rng_from_seed(Some(100));
    let nodes = synthesize_nodes(&three_sectors(), &SynthConfig::default(), &mut rng);

    let ids: Vec<String> = nodes.iter().map(|n| n.id.to_string()).collect();
    assert_eq!(ids, vec!["c_0", "c_1", "c_2", "c_3", "c_4", "c_5"]);

    let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Chip Co", "Soft Co", "Pharma Co", "Device Co", "Oil Co", "Gas Co"]);
    assert_eq!(nodes[3].sector, Sector::HealthCare);
}

#[test]
fn test_synthesizers_are_deterministic_under_seed() {
    let config = SynthConfig::default();
    let run = |seed| {
        let mut rng = rng_from_seed(Some(seed));
        let nodes = synthesize_nodes(&Taxonomy::sp500(), &config, &mut rng);
        let edges = synthesize_edges(&nodes, &config, &mut rng);
        (
            serde_json::to_string(&nodes).unwrap(),
            serde_json::to_string(&edges).unwrap(),
        )
    };

    assert_eq!(run(31337), run(31337));
}

#[test]
fn test_generated_document_invariants() {
    let mut rng = rng_from_seed(Some(8));
    let doc = generate(&Taxonomy::sp500(), &SynthConfig::default(), &mut rng).unwrap();

    let ids: HashSet<&str> = doc.nodes.iter().map(|n| n["id"].as_str().unwrap()).collect();
    assert_eq!(ids.len(), doc.node_count());

    let mut triples = HashSet::new();
    for link in &doc.links {
        let source = link["source"].as_str().unwrap();
        let target = link["target"].as_str().unwrap();
        assert_ne!(source, target);
        assert!(ids.contains(source) && ids.contains(target));
        assert!(triples.insert((source, target, link["type"].as_str().unwrap())));
    }
}

#[test]
fn test_generated_file_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("src").join("data").join("companies.json");

    let mut rng = rng_from_seed(Some(55));
    let doc = generate(&three_sectors(), &SynthConfig::default(), &mut rng).unwrap();
    save_document(&path, &doc).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let first_node = text.find("\"id\": \"c_0\"").unwrap();
    let first_sector = text.find("\"sector\": \"Information Technology\"").unwrap();
    assert!(first_node < first_sector);
    assert!(text.contains("\"tvl\""));

    assert_eq!(load_document(&path).unwrap(), doc);
}
