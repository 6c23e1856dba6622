//! Depth-first application of a transform to every node a selector matches.
use crate::ast::{FieldSelector, PathSegment};
use subvar_node::Node;

/// Invokes `transform` on every node under `root` that `selector` matches.
///
/// Traversal is depth-first in document order and deterministic. A path that
/// does not match the shape of the tree (missing key, out-of-bounds index,
/// segment applied to a scalar) is silently skipped, not an error. A key
/// segment meeting a sequence fans out: the remaining path is applied to
/// every item, which is how one declarative selector reaches each element of
/// a list of mappings.
///
/// The only errors surfaced are those returned by `transform`; the first one
/// aborts the remaining traversal of this root.
pub fn for_each_match<E, F>(
    root: &mut Node,
    selector: &FieldSelector,
    transform: &mut F,
) -> Result<(), E>
where
    F: FnMut(&mut Node) -> Result<(), E>,
{
    walk(root, selector.segments(), transform)
}

fn walk<E, F>(node: &mut Node, path: &[PathSegment], transform: &mut F) -> Result<(), E>
where
    F: FnMut(&mut Node) -> Result<(), E>,
{
    let Some((segment, rest)) = path.split_first() else {
        return transform(node);
    };
    match (segment, node) {
        (PathSegment::Key(key), Node::Mapping(mapping)) => {
            if let Some(value) = mapping.value_of_mut(key) {
                walk(value, rest, transform)?;
            }
            Ok(())
        }
        // Fan out over sequence items without consuming the segment.
        (PathSegment::Key(_), Node::Sequence(sequence)) => {
            for item in &mut sequence.items {
                walk(item, path, transform)?;
            }
            Ok(())
        }
        (PathSegment::Index(i), Node::Sequence(sequence)) => {
            if let Some(item) = sequence.items.get_mut(*i) {
                walk(item, rest, transform)?;
            }
            Ok(())
        }
        (PathSegment::Wildcard, Node::Mapping(mapping)) => {
            for (_, value) in &mut mapping.pairs {
                walk(value, rest, transform)?;
            }
            Ok(())
        }
        (PathSegment::Wildcard, Node::Sequence(sequence)) => {
            for item in &mut sequence.items {
                walk(item, rest, transform)?;
            }
            Ok(())
        }
        // Scalars and aliases have no fields to descend into.
        _ => Ok(()),
    }
}
