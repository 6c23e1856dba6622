//! Field-scoped `$(NAME)` substitution for structured document trees.
//!
//! Given a YAML/JSON-like document tree and a [`FieldSelector`] naming the
//! fields to examine, a [`Filter`] locates string-tagged scalars at or under
//! those fields and replaces `$(NAME)` references with caller-supplied typed
//! values, retagging each rewritten scalar to match the result (string,
//! integer, boolean, or floating point).
//!
//! ```
//! use std::collections::HashMap;
//! use subvar::{Filter, Node, Value, lookup_from};
//!
//! let vars = HashMap::from([("PORT".to_string(), Value::Int(8080))]);
//! let filter = Filter::new(lookup_from(&vars), "spec.port".parse().unwrap());
//!
//! let mut roots = vec![Node::mapping(vec![(
//!     Node::string("spec"),
//!     Node::mapping(vec![(Node::string("port"), Node::string("$(PORT)"))]),
//! )])];
//! filter.apply(&mut roots).unwrap();
//!
//! let Node::Mapping(root) = &roots[0] else { unreachable!() };
//! let Node::Mapping(spec) = root.value_of("spec").unwrap() else { unreachable!() };
//! let port = spec.value_of("port").unwrap().as_scalar().unwrap();
//! assert_eq!((port.tag.as_str(), port.value.as_str()), ("int", "8080"));
//! ```

pub mod error;
pub mod filter;

pub use error::SubstituteError;
pub use filter::{Filter, write_value};
pub use subvar_expand::{Value, expand, lookup_from};
pub use subvar_fieldpath::{FieldPathError, FieldSelector, PathSegment, for_each_match};
pub use subvar_node::{
    AliasNode, MappingNode, Node, NodeKind, ScalarNode, SequenceNode, Style, tag,
};
