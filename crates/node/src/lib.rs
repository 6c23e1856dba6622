//! A generic YAML-like document node model.
//!
//! Documents are trees of [`Node`]s. Every node is exactly one of four kinds:
//! a scalar (a tagged literal), a mapping (ordered key/value pairs), a
//! sequence (ordered items), or an alias (an unresolved anchor reference).
//! The substitution filter and the field-path traversal are both written
//! against this model; neither ever changes a node's kind, only the
//! `value`/`tag`/`style` of existing scalars.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known scalar type tags.
///
/// A scalar's tag is authoritative: a value is only eligible for substitution
/// when its tag is exactly [`tag::STRING`]. Custom tags are permitted and are
/// simply never substitution targets.
pub mod tag {
    pub const STRING: &str = "string";
    pub const INT: &str = "int";
    pub const BOOL: &str = "bool";
    pub const FLOAT: &str = "float";
    pub const NULL: &str = "null";
}

/// A presentation hint for serializers.
///
/// Rewriting a scalar resets its style to [`Style::Plain`] so quoting from a
/// template string does not leak into a now-numeric or boolean value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Style {
    #[default]
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
    Folded,
    Flow,
}

/// The kind of a node, used for dispatch and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Scalar,
    Mapping,
    Sequence,
    Alias,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Scalar => "scalar",
            NodeKind::Mapping => "mapping",
            NodeKind::Sequence => "sequence",
            NodeKind::Alias => "alias",
        };
        f.write_str(name)
    }
}

/// A tagged literal leaf value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarNode {
    /// Type annotation, one of the [`tag`] constants or a custom tag.
    pub tag: String,
    /// The literal text of the value.
    pub value: String,
    /// Presentation hint for serializers.
    pub style: Style,
}

impl ScalarNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
            style: Style::Plain,
        }
    }

    /// True if this scalar is tagged as a string.
    pub fn is_string(&self) -> bool {
        self.tag == tag::STRING
    }
}

/// Ordered key/value pairs. Keys are expected to be string-tagged scalars;
/// the substitution filter enforces this at run time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MappingNode {
    pub pairs: Vec<(Node, Node)>,
}

impl MappingNode {
    /// The value node stored under a string-scalar key, if present.
    pub fn value_of(&self, key: &str) -> Option<&Node> {
        self.pairs.iter().find_map(|(k, v)| match k {
            Node::Scalar(s) if s.is_string() && s.value == key => Some(v),
            _ => None,
        })
    }

    pub fn value_of_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.pairs.iter_mut().find_map(|(k, v)| match k {
            Node::Scalar(s) if s.is_string() && s.value == key => Some(v),
            _ => None,
        })
    }
}

/// Ordered item nodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SequenceNode {
    pub items: Vec<Node>,
}

/// An unresolved alias/anchor reference. Aliases are opaque to substitution
/// and traversal; encountering one as a substitution target is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasNode {
    pub anchor: String,
}

/// A node in a structured document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Scalar(ScalarNode),
    Mapping(MappingNode),
    Sequence(SequenceNode),
    Alias(AliasNode),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Scalar(_) => NodeKind::Scalar,
            Node::Mapping(_) => NodeKind::Mapping,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Alias(_) => NodeKind::Alias,
        }
    }

    /// A string-tagged scalar.
    pub fn string(value: impl Into<String>) -> Self {
        Node::Scalar(ScalarNode::new(tag::STRING, value))
    }

    pub fn int(value: i64) -> Self {
        Node::Scalar(ScalarNode::new(tag::INT, value.to_string()))
    }

    pub fn bool(value: bool) -> Self {
        Node::Scalar(ScalarNode::new(tag::BOOL, value.to_string()))
    }

    pub fn float(value: f64) -> Self {
        Node::Scalar(ScalarNode::new(tag::FLOAT, value.to_string()))
    }

    /// An explicit null scalar.
    pub fn null() -> Self {
        Node::Scalar(ScalarNode::new(tag::NULL, "null"))
    }

    pub fn mapping(pairs: Vec<(Node, Node)>) -> Self {
        Node::Mapping(MappingNode { pairs })
    }

    pub fn sequence(items: Vec<Node>) -> Self {
        Node::Sequence(SequenceNode { items })
    }

    pub fn alias(anchor: impl Into<String>) -> Self {
        Node::Alias(AliasNode {
            anchor: anchor.into(),
        })
    }

    /// True for an explicit null scalar.
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(s) if s.tag == tag::NULL)
    }

    /// True for a scalar tagged as a string.
    pub fn is_string_scalar(&self) -> bool {
        matches!(self, Node::Scalar(s) if s.is_string())
    }

    pub fn as_scalar(&self) -> Option<&ScalarNode> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_scalar_mut(&mut self) -> Option<&mut ScalarNode> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_matching_tags() {
        assert_eq!(Node::string("x").as_scalar().unwrap().tag, tag::STRING);
        assert_eq!(Node::int(7).as_scalar().unwrap().value, "7");
        assert_eq!(Node::bool(true).as_scalar().unwrap().value, "true");
        assert_eq!(Node::float(1.5).as_scalar().unwrap().tag, tag::FLOAT);
        assert!(Node::null().is_null());
    }

    #[test]
    fn default_style_is_plain() {
        let scalar = ScalarNode::new(tag::STRING, "v");
        assert_eq!(scalar.style, Style::Plain);
    }

    #[test]
    fn mapping_lookup_by_string_key() {
        let mut map = MappingNode {
            pairs: vec![
                (Node::string("a"), Node::int(1)),
                (Node::string("b"), Node::string("two")),
            ],
        };
        assert_eq!(map.value_of("b"), Some(&Node::string("two")));
        assert!(map.value_of("missing").is_none());
        *map.value_of_mut("a").unwrap() = Node::int(9);
        assert_eq!(map.value_of("a"), Some(&Node::int(9)));
    }

    #[test]
    fn non_string_keys_are_not_found_by_lookup() {
        let map = MappingNode {
            pairs: vec![(Node::int(3), Node::string("v"))],
        };
        assert!(map.value_of("3").is_none());
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(Node::alias("a").kind().to_string(), "alias");
        assert_eq!(Node::mapping(vec![]).kind().to_string(), "mapping");
    }
}
