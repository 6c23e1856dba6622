//! Declarative field-path selectors over document trees.
//!
//! A [`FieldSelector`] names one dotted/indexed path (`spec.containers[0].env`,
//! `data.*.value`) and [`for_each_match`] walks a document from its root,
//! invoking a caller-supplied transform on every live node the path matches.
//! Wildcards fan out over mapping values and sequence items; a key segment
//! meeting a sequence is applied to each item.

pub mod ast;
pub mod error;
mod parser;
pub mod traverse;

pub use ast::{FieldSelector, PathSegment};
pub use error::FieldPathError;
pub use parser::parse_selector;
pub use traverse::for_each_match;
