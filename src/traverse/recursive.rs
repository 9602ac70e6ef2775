//! Depth-first traversal using call-stack recursion.
//!
//! This is the reference the flat walker in [`depth`](super::depth) is
//! checked against. It grows the call stack with the tree depth; outside of
//! tests, prefer [`DepthFirst`](crate::DepthFirst).

use super::ChildIterable;

/// Visit every node under `root` in depth-first pre-order, by recursing.
///
/// A node is visited before any of its descendants; siblings are visited in
/// child-range order. Nodes for which `cull` returns `true` are skipped
/// together with their entire subtree; a culled `root` means no visits at
/// all. Only a single forward pass over each child range is required.
pub fn for_each_depth_recursive<T, C, F>(tree: &T, root: T::NodeRef, mut cull: C, mut visit: F)
where
    T: ChildIterable,
    C: FnMut(T::NodeRef) -> bool,
    F: FnMut(T::NodeRef),
{
    recurse(tree, root, &mut cull, &mut visit);
}

fn recurse<T, C, F>(tree: &T, node: T::NodeRef, cull: &mut C, visit: &mut F)
where
    T: ChildIterable,
    C: FnMut(T::NodeRef) -> bool,
    F: FnMut(T::NodeRef),
{
    if cull(node) {
        return;
    }

    visit(node);

    for child in tree.children(node) {
        recurse(tree, child, cull, visit);
    }
}

/// Collect every node under `root` in depth-first pre-order, by recursing.
pub fn gather_depth_recursive<T, C>(tree: &T, root: T::NodeRef, cull: C) -> Vec<T::NodeRef>
where
    T: ChildIterable,
    C: FnMut(T::NodeRef) -> bool,
{
    let mut out = Vec::new();
    for_each_depth_recursive(tree, root, cull, |node| out.push(node));
    out
}
