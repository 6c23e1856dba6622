use subvar_node::NodeKind;
use thiserror::Error;

/// Errors raised while substituting into a matched node.
///
/// The first error encountered during a root's traversal aborts the rest of
/// that root's processing; writes already made are retained (best-effort, no
/// rollback).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubstituteError {
    #[error("unsupported node kind encountered: {kind}")]
    UnsupportedNodeKind { kind: NodeKind },

    #[error("invalid map key: {key}, tag: {tag}")]
    InvalidMapKey { key: String, tag: String },

    #[error("invalid sequence item at position {position}: expected a string scalar, found {kind}")]
    InvalidSequenceItem { position: usize, kind: NodeKind },
}
