//! Graph document: the `{nodes, links}` structure read and written as a whole
//!
//! Records are kept as insertion-ordered JSON objects rather than typed
//! structs so that a document produced elsewhere survives augmentation with
//! every field, unknown or not, in its original order.

use super::edge::Relationship;
use super::node::Company;
use super::types::NodeId;
use crate::error::CorpGraphResult;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One node or link entry of a document
pub type Record = Map<String, Value>;

/// Id and display name of a node, as seen by the augmenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub id: NodeId,
    pub name: String,
}

/// Directed `(source, target)` key of a link
pub type EdgePair = (NodeId, NodeId);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nodes: Vec<Record>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub links: Vec<Record>,

    /// Any other top-level keys, passed through untouched
    #[serde(flatten)]
    pub extra: Record,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Record>>::deserialize(deserializer)?.unwrap_or_default())
}

fn to_record<T: Serialize>(value: &T) -> CorpGraphResult<Record> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
            "expected a JSON object record, got {}",
            other
        ))
        .into()),
    }
}

/// Resolve a link endpoint: either a plain id or an object with an `id`
fn endpoint_id(value: Option<&Value>) -> Option<&str> {
    match value? {
        Value::String(id) => Some(id),
        Value::Object(obj) => obj.get("id").and_then(Value::as_str),
        _ => None,
    }
}

fn link_pair(link: &Record) -> Option<EdgePair> {
    let source = endpoint_id(link.get("source"))?;
    let target = endpoint_id(link.get("target"))?;
    Some((NodeId::from(source), NodeId::from(target)))
}

impl GraphDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh document from synthesized nodes and edges
    pub fn assemble(companies: &[Company], relationships: &[Relationship]) -> CorpGraphResult<Self> {
        let nodes = companies.iter().map(to_record).collect::<CorpGraphResult<Vec<_>>>()?;
        let links = relationships.iter().map(to_record).collect::<CorpGraphResult<Vec<_>>>()?;
        Ok(GraphDocument {
            nodes,
            links,
            extra: Record::new(),
        })
    }

    /// Append new links after all existing ones; returns how many were appended
    pub fn append_links<'a, I>(&mut self, relationships: I) -> CorpGraphResult<usize>
    where
        I: IntoIterator<Item = &'a Relationship>,
    {
        let before = self.links.len();
        for relationship in relationships {
            self.links.push(to_record(relationship)?);
        }
        Ok(self.links.len() - before)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Nodes that carry a string id, with display names falling back to the id
    pub fn node_refs(&self) -> Vec<NodeRef> {
        self.nodes
            .iter()
            .filter_map(|node| {
                let id = node.get("id").and_then(Value::as_str)?;
                let name = node.get("name").and_then(Value::as_str).unwrap_or(id);
                Some(NodeRef {
                    id: NodeId::from(id),
                    name: name.to_string(),
                })
            })
            .collect()
    }

    /// Every `(source, target)` pair already linked, regardless of type
    pub fn edge_pairs(&self) -> FxHashSet<EdgePair> {
        self.links.iter().filter_map(link_pair).collect()
    }

    /// Relationship types present in the document, upper-cased
    pub fn relation_types(&self) -> FxHashSet<String> {
        self.links
            .iter()
            .filter_map(|link| link.get("type").and_then(Value::as_str))
            .map(str::to_uppercase)
            .collect()
    }

    /// Link count per type tag, in first-seen order
    pub fn count_by_type(&self) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for link in &self.links {
            let tag = link
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_lowercase();
            *counts.entry(tag).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RelationKind;
    use serde_json::json;

    #[test]
    fn test_missing_collections_default_to_empty() {
        let doc: GraphDocument = serde_json::from_value(json!({})).unwrap();
        assert_eq!(doc.node_count(), 0);
        assert_eq!(doc.link_count(), 0);

        let doc: GraphDocument = serde_json::from_value(json!({"nodes": null, "links": []})).unwrap();
        assert!(doc.nodes.is_empty());
    }

    #[test]
    fn test_existing_records_round_trip_verbatim() {
        let raw = json!({
            "nodes": [{"name": "Beta", "id": "b", "custom": [1, 2]}],
            "links": [{"type": "CLIENT", "target": "a", "source": "b", "weight": 0.5}],
            "meta": {"version": 2}
        });
        let mut doc: GraphDocument = serde_json::from_value(raw.clone()).unwrap();
        let before = serde_json::to_string(&doc.links[0]).unwrap();

        let added = Relationship::new(NodeId::from("a"), NodeId::from("b"), RelationKind::Swaps);
        assert_eq!(doc.append_links([&added]).unwrap(), 1);

        assert_eq!(serde_json::to_string(&doc.links[0]).unwrap(), before);
        assert_eq!(doc.links[1]["type"], "swaps");
        assert_eq!(doc.extra["meta"], json!({"version": 2}));
        let node_keys: Vec<&String> = doc.nodes[0].keys().collect();
        assert_eq!(node_keys, vec!["name", "id", "custom"]);
    }

    #[test]
    fn test_node_refs_fall_back_to_id() {
        let doc: GraphDocument = serde_json::from_value(json!({
            "nodes": [{"id": "c_0", "name": "Alpha"}, {"id": "c_1"}, {"name": "no id"}]
        }))
        .unwrap();
        let refs = doc.node_refs();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].name, "Alpha");
        assert_eq!(refs[1].name, "c_1");
    }

    #[test]
    fn test_edge_pairs_and_types() {
        let doc: GraphDocument = serde_json::from_value(json!({
            "links": [
                {"source": "c_0", "target": "c_1", "type": "client"},
                {"source": {"id": "c_1"}, "target": {"id": "c_0"}, "type": "Supplier"},
                {"source": "c_0", "target": "c_1", "type": "swaps"}
            ]
        }))
        .unwrap();

        let pairs = doc.edge_pairs();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&(NodeId::from("c_1"), NodeId::from("c_0"))));

        let types = doc.relation_types();
        assert!(types.contains("CLIENT"));
        assert!(types.contains("SUPPLIER"));
        assert_eq!(types.len(), 3);

        let counts = doc.count_by_type();
        assert_eq!(counts.get("supplier"), Some(&1));
        assert_eq!(counts.keys().next().map(String::as_str), Some("client"));
    }
}
