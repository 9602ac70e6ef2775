//! ## About
//!
//! This crate contains traversal algorithms for tree-shaped structures. Any
//! type that can expose the ordered children of a node via the
//! [`ChildIterable`] contract gets depth-first and breadth-first visitation
//! orders, with optional pruning of whole subtrees through a cull predicate
//! ([`keep_all`] by default), without implementing any traversal logic
//! itself.
//!
//! The depth-first walker [`DepthFirst`] is *flat*: it reproduces the order
//! of a naive recursive walk while replacing call-stack recursion with one
//! explicit stack of pending siblings. The recursive form stays available in
//! [`traverse::recursive`] as the reference it is checked against.
//! Breadth-first comes in a flat form ([`BreadthFirst`]) and a staged form
//! ([`gather_breadth_levels`]) that buckets nodes by their distance from the
//! root, laid out so a caller can process one level in parallel before
//! moving to the next (see `par_for_each_level` behind the `rayon` feature).
//!
//! [`ArenaTree`] is a batteries-included storage the walkers run on; for
//! node types that own their children directly, [`BorrowedChildren`] adapts
//! them without any storage type.
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories,
//!             which use substantives (i.e., omit a `get_` prefix) much like
//!             the standard library.

pub mod arena;
pub mod errors;
pub mod traverse;

pub use arena::{ArenaIndex, ArenaNode, ArenaTree};
pub use errors::FlatwalkError;
#[cfg(feature = "rayon")]
pub use traverse::par_for_each_level;
pub use traverse::{
    for_each_breadth, for_each_breadth_level, for_each_depth, for_each_depth_recursive,
    gather_breadth, gather_breadth_levels, gather_depth, gather_depth_recursive, keep_all,
    BorrowedChildren, BreadthFirst, ChildIterable, DepthFirst,
};
