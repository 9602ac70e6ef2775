//! Breadth-first traversal and per-level staging.

use super::{keep_all, ChildIterable};
use tracing::trace;

/// Iterator yielding node references level by level, left to right.
///
/// The visited prefix of one growing vector doubles as the traversal queue:
/// reading proceeds by index from the front while newly discovered children
/// are appended at the tail. All nodes at depth `k` are therefore yielded
/// before any node at depth `k + 1`, and no separate queue structure is
/// needed. A single forward pass over each child range suffices.
pub struct BreadthFirst<'t, T, C>
where
    T: ChildIterable,
{
    tree: &'t T,
    /// Visited nodes before `cursor`, pending nodes from `cursor` on.
    queue: Vec<T::NodeRef>,
    cursor: usize,
    cull: C,
}

impl<'t, T> BreadthFirst<'t, T, fn(T::NodeRef) -> bool>
where
    T: ChildIterable,
{
    /// Walk the whole subtree under `root`.
    pub fn new(tree: &'t T, root: T::NodeRef) -> Self {
        Self::with_cull(tree, root, keep_all)
    }
}

impl<'t, T, C> BreadthFirst<'t, T, C>
where
    T: ChildIterable,
    C: FnMut(T::NodeRef) -> bool,
{
    /// Walk the subtree under `root`, skipping every node (and its subtree)
    /// for which `cull` returns `true`.
    ///
    /// The predicate is evaluated exactly once per encountered node.
    pub fn with_cull(tree: &'t T, root: T::NodeRef, mut cull: C) -> Self {
        let queue = if cull(root) { Vec::new() } else { vec![root] };
        BreadthFirst {
            tree,
            queue,
            cursor: 0,
            cull,
        }
    }

    /// Run the walk to completion and return the visitation order.
    ///
    /// The returned vector is the internal queue itself; nothing is copied.
    /// Prefer this over re-iterating when the same graph is walked more than
    /// once.
    pub fn gather(mut self) -> Vec<T::NodeRef> {
        while self.next().is_some() {}
        self.queue
    }
}

impl<'t, T, C> Iterator for BreadthFirst<'t, T, C>
where
    T: ChildIterable,
    C: FnMut(T::NodeRef) -> bool,
{
    type Item = T::NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        let node = *self.queue.get(self.cursor)?;
        self.cursor += 1;

        for child in self.tree.children(node) {
            if !(self.cull)(child) {
                self.queue.push(child);
            }
        }

        Some(node)
    }
}

/// Visit every node under `root` in breadth-first order.
pub fn for_each_breadth<T, C, F>(tree: &T, root: T::NodeRef, cull: C, mut visit: F)
where
    T: ChildIterable,
    C: FnMut(T::NodeRef) -> bool,
    F: FnMut(T::NodeRef),
{
    for node in BreadthFirst::with_cull(tree, root, cull) {
        visit(node);
    }
}

/// Collect every node under `root` in breadth-first order.
pub fn gather_breadth<T, C>(tree: &T, root: T::NodeRef, cull: C) -> Vec<T::NodeRef>
where
    T: ChildIterable,
    C: FnMut(T::NodeRef) -> bool,
{
    BreadthFirst::with_cull(tree, root, cull).gather()
}

/// Collect the nodes under `root` bucketed by their distance from it.
///
/// `levels[i]` holds exactly the nodes at depth `i`, left to right, with
/// `root` alone at depth `0`; concatenating the levels in order yields
/// [`gather_breadth`]. Nodes within one level have no data dependency on
/// each other, so a caller may process a level in parallel before moving on
/// to the next one.
///
/// The same growing-sequence technique as in [`BreadthFirst`] drives the
/// walk; both loop bounds below keep growing while new levels and nodes are
/// discovered.
pub fn gather_breadth_levels<T, C>(tree: &T, root: T::NodeRef, mut cull: C) -> Vec<Vec<T::NodeRef>>
where
    T: ChildIterable,
    C: FnMut(T::NodeRef) -> bool,
{
    let mut levels: Vec<Vec<T::NodeRef>> = Vec::new();
    if cull(root) {
        return levels;
    }

    levels.push(vec![root]);

    let mut depth = 0;
    while depth < levels.len() {
        let mut index = 0;
        while index < levels[depth].len() {
            let node = levels[depth][index];
            index += 1;

            for child in tree.children(node) {
                if cull(child) {
                    continue;
                }
                // The next level is opened when its first node arrives.
                if levels.len() == depth + 1 {
                    levels.push(Vec::new());
                }
                levels[depth + 1].push(child);
            }
        }
        depth += 1;
    }

    trace!(levels = levels.len(), "staged breadth walk complete");
    levels
}

/// Visit the nodes of each depth level as one slice, shallowest level first.
pub fn for_each_breadth_level<T, C, F>(tree: &T, root: T::NodeRef, cull: C, mut visit: F)
where
    T: ChildIterable,
    C: FnMut(T::NodeRef) -> bool,
    F: FnMut(usize, &[T::NodeRef]),
{
    for (depth, level) in gather_breadth_levels(tree, root, cull).iter().enumerate() {
        visit(depth, level);
    }
}

/// Visit each depth level with a parallel iterator, levels in order.
///
/// Nodes within a level are independent of each other, so the visitor runs
/// on worker threads per level while levels themselves stay sequential.
#[cfg(feature = "rayon")]
pub fn par_for_each_level<T, C, F>(tree: &T, root: T::NodeRef, cull: C, visit: F)
where
    T: ChildIterable,
    T::NodeRef: Send + Sync,
    C: FnMut(T::NodeRef) -> bool,
    F: Fn(usize, T::NodeRef) + Send + Sync,
{
    use rayon::prelude::*;

    for (depth, level) in gather_breadth_levels(tree, root, cull).iter().enumerate() {
        level.par_iter().for_each(|&node| visit(depth, node));
    }
}
