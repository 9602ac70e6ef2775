//! Walkers over tree-shaped structures and the contracts they consume.
//!
//! A walker is picked by visitation order: [`DepthFirst`] (flat, the primary
//! depth-first API), [`for_each_depth_recursive`] (the call-stack reference),
//! [`BreadthFirst`], and [`gather_breadth_levels`] for per-level staging.
//! Each comes as a lazy iterator or for-each form plus a `gather_*` form that
//! materializes the order; all accept a cull predicate, with [`keep_all`] as
//! the default.
//!
//! The walkers borrow the tree for the duration of one call, construct only
//! private state, and assume the tree shape does not change while they run.

pub mod breadth;
pub mod children;
pub mod depth;
pub mod recursive;

#[cfg(feature = "rayon")]
pub use breadth::par_for_each_level;
pub use breadth::{
    for_each_breadth, for_each_breadth_level, gather_breadth, gather_breadth_levels, BreadthFirst,
};
pub use children::{keep_all, BorrowedChildren, ChildIterable};
pub use depth::{for_each_depth, gather_depth, DepthFirst};
pub use recursive::{for_each_depth_recursive, gather_depth_recursive};
