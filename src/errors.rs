//! Provides the error type used by the tree containers in this crate.

use thiserror::Error;

/// Errors raised when building or querying an [`ArenaTree`](crate::ArenaTree).
///
/// The walkers themselves define no error type: a fault raised by child
/// access, a cull predicate or a visitor propagates to the caller unchanged.
#[derive(Error, Debug)]
pub enum FlatwalkError<NodeId> {
    // Internal errors
    #[error("Node reference {0} is out of bound")]
    ReferenceOutOfBound(usize),
    #[error("Node not in tree: {0}")]
    UnknownNode(NodeId),
    #[error("No root node set")]
    RootNotSet,
    #[error("ID not unique: {0}")]
    NotUnique(NodeId),
}
