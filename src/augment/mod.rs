//! Augmentation path: add relationship types missing from an existing document
//!
//! New edges are only ever appended. A new edge may not reuse an ordered
//! `(source, target)` pair that is already linked by an edge of any type.

pub mod augmenter;
pub mod catalog;
pub mod driver;

pub use augmenter::{augment_relationships, AugmentOutcome};
pub use catalog::{render_template, template_for, PayloadRule, RelationTemplate, CATALOG};
pub use driver::{add_missing_types, AugmentReport};
