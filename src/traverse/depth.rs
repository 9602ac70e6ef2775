//! Depth-first traversal without call-stack recursion.

use super::{keep_all, ChildIterable};
use itertools::Itertools;

/// Iterator yielding node references in depth-first pre-order.
///
/// Produces exactly the order of
/// [`for_each_depth_recursive`](super::for_each_depth_recursive) while
/// keeping all auxiliary state in one explicit stack. The stack holds
/// pending siblings rather than ancestors, so it grows with the fan-out
/// met along the current path, not with the tree depth.
///
/// Requires child ranges that can be enumerated back to front
/// (`Children<'_>: DoubleEndedIterator`): after descending into the first
/// child of a node, the remaining siblings are pushed in reverse so that
/// popping them later restores left-to-right order.
pub struct DepthFirst<'t, T, C>
where
    T: ChildIterable,
{
    tree: &'t T,
    /// Next node to yield; already cleared against the cull predicate.
    current: Option<T::NodeRef>,
    /// Siblings not yet visited, deepest pending on top.
    waiting: Vec<T::NodeRef>,
    cull: C,
}

impl<'t, T> DepthFirst<'t, T, fn(T::NodeRef) -> bool>
where
    T: ChildIterable,
{
    /// Walk the whole subtree under `root`.
    pub fn new(tree: &'t T, root: T::NodeRef) -> Self {
        Self::with_cull(tree, root, keep_all)
    }
}

impl<'t, T, C> DepthFirst<'t, T, C>
where
    T: ChildIterable,
    C: FnMut(T::NodeRef) -> bool,
{
    /// Walk the subtree under `root`, skipping every node (and its subtree)
    /// for which `cull` returns `true`.
    ///
    /// The predicate is evaluated exactly once per encountered node; it sees
    /// `root` here, before any child range is fetched.
    pub fn with_cull(tree: &'t T, root: T::NodeRef, mut cull: C) -> Self {
        let current = if cull(root) { None } else { Some(root) };
        DepthFirst {
            tree,
            current,
            waiting: Vec::new(),
            cull,
        }
    }
}

impl<'t, T, C> DepthFirst<'t, T, C>
where
    T: ChildIterable,
    T::Children<'t>: DoubleEndedIterator,
    C: FnMut(T::NodeRef) -> bool,
{
    /// One step of the walk: the node visited right after `from`.
    fn advance(&mut self, from: T::NodeRef) -> Option<T::NodeRef> {
        let tree: &'t T = self.tree;
        let mut children = tree.children(from);

        match children.next() {
            // Leaf; backtrack to the nearest pending sibling.
            None => self.waiting.pop(),
            Some(first) => {
                let descend = !(self.cull)(first);

                // The remaining siblings go onto the stack in reverse, so
                // popping the shared stack yields them left to right,
                // interleaved correctly with pushes from deeper descents.
                for child in children.rev() {
                    if !(self.cull)(child) {
                        self.waiting.push(child);
                    }
                }

                if descend {
                    Some(first)
                } else {
                    self.waiting.pop()
                }
            }
        }
    }
}

impl<'t, T, C> Iterator for DepthFirst<'t, T, C>
where
    T: ChildIterable,
    T::Children<'t>: DoubleEndedIterator,
    C: FnMut(T::NodeRef) -> bool,
{
    type Item = T::NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = self.advance(node);
        Some(node)
    }
}

/// Visit every node under `root` in depth-first pre-order.
pub fn for_each_depth<'t, T, C, F>(tree: &'t T, root: T::NodeRef, cull: C, mut visit: F)
where
    T: ChildIterable,
    T::Children<'t>: DoubleEndedIterator,
    C: FnMut(T::NodeRef) -> bool,
    F: FnMut(T::NodeRef),
{
    for node in DepthFirst::with_cull(tree, root, cull) {
        visit(node);
    }
}

/// Collect every node under `root` in depth-first pre-order.
pub fn gather_depth<'t, T, C>(tree: &'t T, root: T::NodeRef, cull: C) -> Vec<T::NodeRef>
where
    T: ChildIterable,
    T::Children<'t>: DoubleEndedIterator,
    C: FnMut(T::NodeRef) -> bool,
{
    DepthFirst::with_cull(tree, root, cull).collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::gather_depth_recursive;
    use crate::{ArenaIndex, ArenaTree};
    use itertools::Itertools;

    fn sample() -> ArenaTree<usize, usize> {
        let mut tree = ArenaTree::new();
        tree.set_root(0, 0);
        tree.add(1, 1, &0).unwrap();
        tree.add(2, 2, &0).unwrap();
        tree.add(3, 3, &1).unwrap();
        tree.add(4, 4, &1).unwrap();
        tree.add(5, 5, &2).unwrap();
        tree.add(6, 6, &2).unwrap();
        tree
    }

    #[test]
    fn matches_the_recursive_order() {
        let tree = sample();
        let root = tree.root().unwrap();

        assert_eq!(
            gather_depth(&tree, root, keep_all),
            gather_depth_recursive(&tree, root, keep_all)
        );

        let culled = |index: ArenaIndex| index.0 == 2;
        assert_eq!(
            gather_depth(&tree, root, culled),
            gather_depth_recursive(&tree, root, culled)
        );
    }

    #[test]
    fn a_single_culled_child_behaves_like_a_leaf() {
        // 0 has only child 1, culled; 0 must fall through to backtracking.
        let mut tree = ArenaTree::new();
        tree.set_root(0, 0);
        tree.add(1, 1, &0).unwrap();
        let root = tree.root().unwrap();

        let order = gather_depth(&tree, root, |index: ArenaIndex| index.0 == 1);
        assert_eq!(order, &[ArenaIndex(0)]);
    }

    #[test]
    fn every_node_is_tested_once() {
        let tree = sample();
        let root = tree.root().unwrap();

        let mut tested = Vec::new();
        let order = gather_depth(&tree, root, |index: ArenaIndex| {
            tested.push(index);
            false
        });
        assert_eq!(order.len(), 7);
        assert_eq!(tested.iter().unique().count(), tested.len());
        assert_eq!(tested.len(), 7);
    }

    #[test]
    fn deep_chains_do_not_grow_the_stack() {
        // A degenerate tree that would overflow the call stack if the walk
        // recursed per level.
        let mut tree = ArenaTree::with_capacity(100_000);
        tree.set_root(0, 0);
        for id in 1..100_000usize {
            tree.add(id, id, &(id - 1)).unwrap();
        }

        let order = gather_depth(&tree, tree.root().unwrap(), keep_all);
        assert_eq!(order.len(), 100_000);
        assert_eq!(
            order.iter().map(|index| index.0).collect_vec(),
            (0..100_000).collect_vec()
        );
    }

    #[test]
    fn for_each_and_gather_agree() {
        let tree = sample();
        let root = tree.root().unwrap();

        let mut visited = Vec::new();
        for_each_depth(&tree, root, keep_all, |node| visited.push(node));
        assert_eq!(visited, gather_depth(&tree, root, keep_all));
        assert_eq!(DepthFirst::new(&tree, root).collect_vec(), visited);
    }
}
