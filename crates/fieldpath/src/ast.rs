//! The parsed representation of a field selector.
use crate::error::FieldPathError;
use crate::parser::parse_selector;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One step in a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A mapping key (e.g. `spec`).
    Key(String),
    /// A sequence index (e.g. `[0]`).
    Index(usize),
    /// Every value of a mapping, or every item of a sequence (`*`).
    Wildcard,
}

/// An immutable descriptor of a dotted/indexed field path.
///
/// Parsed once from its string form (`spec.containers[0].env`,
/// `data.*.value`); the empty string selects the document root. Consumed
/// read-only by [`for_each_match`](crate::for_each_match).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    segments: Vec<PathSegment>,
}

impl FieldSelector {
    /// A selector that matches only the document root.
    pub fn root() -> Self {
        Self { segments: vec![] }
    }

    pub fn parse(input: &str) -> Result<Self, FieldPathError> {
        parse_selector(input)
    }

    pub(crate) fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl FromStr for FieldSelector {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_selector(s)
    }
}

impl fmt::Display for FieldSelector {
    /// Renders the dotted form; round-trips through [`FieldSelector::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) => {
                    if !first {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                PathSegment::Wildcard => {
                    if !first {
                        f.write_str(".")?;
                    }
                    f.write_str("*")?;
                }
                PathSegment::Index(i) => write!(f, "[{i}]")?,
            }
            first = false;
        }
        Ok(())
    }
}

impl Serialize for FieldSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldSelector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
