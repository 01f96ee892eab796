//! Corporate graph data model
//!
//! - Company nodes with synthetic market attributes
//! - Directed, typed relationships with optional payloads
//! - The `{nodes, links}` document that is read and written as a whole

pub mod document;
pub mod edge;
pub mod node;
pub mod types;

// Re-export main types
pub use document::{EdgePair, GraphDocument, NodeRef, Record};
pub use edge::{EdgePayload, Relationship};
pub use node::{Company, NodeKind};
pub use types::{NodeId, RelationKind, Sector};
