//! Corpgraph
//!
//! Synthesizes a labeled corporate-universe graph (companies as nodes,
//! typed relationships as edges) and writes it as a single `{nodes, links}`
//! JSON document for a force-directed graph viewer.
//!
//! # Entry points
//!
//! - **Generation**: taxonomy → node synthesizer → edge synthesizer →
//!   document ([`synth::generate`])
//! - **Augmentation**: existing document → add relationship types that are
//!   missing, without touching existing data ([`augment::add_missing_types`])
//!
//! Both take an explicit random generator, so a seeded [`rand::rngs::StdRng`]
//! makes every run reproducible.
//!
//! ## Example Usage
//!
//! ```rust
//! use corpgraph::augment::add_missing_types;
//! use corpgraph::synth::{generate, rng_from_seed, Taxonomy};
//! use corpgraph::{CorpGraphConfig, RelationKind, Sector};
//!
//! let config = CorpGraphConfig::default();
//! let mut rng = rng_from_seed(Some(7));
//!
//! let taxonomy = Taxonomy::from_sectors([
//!     (Sector::Energy, ["Oil One", "Oil Two"]),
//!     (Sector::Utilities, ["Grid One", "Grid Two"]),
//! ]);
//! let mut doc = generate(&taxonomy, &config.synth, &mut rng).unwrap();
//! assert_eq!(doc.node_count(), 4);
//!
//! let report = add_missing_types(
//!     &mut doc,
//!     &[RelationKind::JointVenture],
//!     2,
//!     &config.augment,
//!     &mut rng,
//! )
//! .unwrap();
//! assert!(report.total_added() <= 2);
//! ```

#![warn(clippy::all)]

pub mod augment;
pub mod config;
pub mod error;
pub mod graph;
pub mod persistence;
pub mod synth;

// Re-export main types for convenience
pub use config::{AugmentConfig, CorpGraphConfig, FloatRange, IntRange, SynthConfig};
pub use error::{CorpGraphError, CorpGraphResult};
pub use graph::{
    Company, EdgePayload, GraphDocument, NodeId, NodeKind, RelationKind, Relationship, Sector,
};
pub use persistence::{load_document, save_document, DEFAULT_DOCUMENT_PATH};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
