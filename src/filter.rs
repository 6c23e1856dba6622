//! The field-scoped substitution filter.
//!
//! A [`Filter`] pairs a lookup function with a [`FieldSelector`] and rewrites
//! `$(NAME)` references inside string-tagged scalars reached by the selector.
//! Matched nodes are mutated in place; tree shape is never changed, only the
//! `value`/`tag`/`style` of existing scalars.

use crate::error::SubstituteError;
use log::{debug, trace};
use subvar_expand::{Value, expand};
use subvar_fieldpath::{FieldSelector, for_each_match};
use subvar_node::{MappingNode, Node, ScalarNode, SequenceNode, Style, tag};

/// Rewrites `$(NAME)` references in the fields one selector reaches.
///
/// The lookup function maps a variable name to its replacement value; names
/// it does not know are preserved verbatim. Both configuration fields are
/// immutable for the filter's lifetime and the filter holds no other state,
/// so one filter may be applied to any number of roots.
pub struct Filter<F> {
    lookup: F,
    selector: FieldSelector,
}

impl<F> Filter<F>
where
    F: Fn(&str) -> Option<Value>,
{
    pub fn new(lookup: F, selector: FieldSelector) -> Self {
        Self { lookup, selector }
    }

    /// Applies selector-scoped substitution to every root, strictly in order.
    ///
    /// Roots are mutated in place. The first error aborts the remaining
    /// batch; a caller that wants per-root continuation applies the filter to
    /// single-root slices and decides for itself.
    pub fn apply(&self, roots: &mut [Node]) -> Result<(), SubstituteError> {
        for root in roots.iter_mut() {
            for_each_match(root, &self.selector, &mut |node| self.substitute(node))?;
        }
        Ok(())
    }

    /// The per-match transform: dispatch on the matched node's kind.
    fn substitute(&self, node: &mut Node) -> Result<(), SubstituteError> {
        trace!("substitution target: {} node", node.kind());
        if node.is_null() {
            return Ok(());
        }
        match node {
            Node::Scalar(scalar) => {
                self.substitute_scalar(scalar);
                Ok(())
            }
            Node::Mapping(mapping) => self.substitute_mapping(mapping),
            Node::Sequence(sequence) => self.substitute_sequence(sequence),
            other => Err(SubstituteError::UnsupportedNodeKind { kind: other.kind() }),
        }
    }

    fn substitute_scalar(&self, scalar: &mut ScalarNode) {
        // Only string-tagged scalars are substitution targets; $(NAME) is a
        // plain-text convention.
        if !scalar.is_string() {
            return;
        }
        self.expand_into(scalar);
    }

    /// Substitutes into a mapping's string values, pair by pair in stored
    /// order. Non-string values (including nested collections) are skipped;
    /// deep substitution happens only through the selector's own path
    /// semantics, never by recursing here.
    fn substitute_mapping(&self, mapping: &mut MappingNode) -> Result<(), SubstituteError> {
        for (key, value) in &mut mapping.pairs {
            match key {
                Node::Scalar(k) if k.is_string() => {}
                Node::Scalar(k) => {
                    return Err(SubstituteError::InvalidMapKey {
                        key: k.value.clone(),
                        tag: k.tag.clone(),
                    });
                }
                other => {
                    return Err(SubstituteError::InvalidMapKey {
                        key: String::new(),
                        tag: other.kind().to_string(),
                    });
                }
            }
            if let Node::Scalar(scalar) = value
                && scalar.is_string()
            {
                self.expand_into(scalar);
            }
        }
        Ok(())
    }

    /// Substitutes into a sequence's items in order. Unlike mappings, a
    /// non-string item is a hard failure, not a skip.
    fn substitute_sequence(&self, sequence: &mut SequenceNode) -> Result<(), SubstituteError> {
        for (position, item) in sequence.items.iter_mut().enumerate() {
            match item {
                Node::Scalar(scalar) if scalar.is_string() => self.expand_into(scalar),
                other => {
                    return Err(SubstituteError::InvalidSequenceItem {
                        position,
                        kind: other.kind(),
                    });
                }
            }
        }
        Ok(())
    }

    fn expand_into(&self, scalar: &mut ScalarNode) {
        let resolved = expand(&scalar.value, &self.lookup);
        if !matches!(&resolved, Value::Str(s) if *s == scalar.value) {
            debug!("substituting '{}' -> {resolved}", scalar.value);
        }
        write_value(scalar, resolved);
    }
}

/// Writes an expansion result back into a scalar, retagging it to match the
/// new value. The presentation style is reset so quoting from the template
/// string does not leak into a now-numeric or boolean value.
pub fn write_value(scalar: &mut ScalarNode, value: Value) {
    match value {
        Value::Int(n) => {
            scalar.value = n.to_string();
            scalar.tag = tag::INT.to_string();
        }
        Value::Bool(b) => {
            scalar.value = b.to_string();
            scalar.tag = tag::BOOL.to_string();
        }
        Value::Float(x) => {
            scalar.value = x.to_string();
            scalar.tag = tag::FLOAT.to_string();
        }
        Value::Str(s) => {
            scalar.value = s;
            scalar.tag = tag::STRING.to_string();
        }
    }
    scalar.style = Style::Plain;
}
