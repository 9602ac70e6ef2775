//! An [arena allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! tree the walkers in [`traverse`](crate::traverse) can run on out of the box.
//!
//! Nodes live in one flat vector and refer to each other by [`ArenaIndex`];
//! the tree hands those indices to the walkers as its node references. Parent
//! links are stored for lookups only and are never consulted by a walk.

use crate::{ChildIterable, FlatwalkError};
use std::{collections::HashMap, fmt::Debug, hash::Hash};
use tracing::{instrument, trace};

/// Reference into the arena allocation. Copyable and cheap; the walkers copy
/// it freely into their own stacks and queues.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct ArenaIndex(pub usize);

/// A node stored in an [`ArenaTree`], owning a user-defined load.
#[derive(Debug)]
pub struct ArenaNode<Load, NodeId> {
    /// The user-defined load that the node owns
    load: Load,
    /// Identifier for lookups
    id: NodeId,
    /// Index in the arena allocation
    index: ArenaIndex,
    /// References to the children, in insertion order
    children: Vec<ArenaIndex>,
    /// Distance to the root node
    depth: usize,
    /// Advisory only; not consulted during traversal
    parent: Option<ArenaIndex>,
}

impl<Load, NodeId> ArenaNode<Load, NodeId> {
    pub fn load(&self) -> &Load {
        &self.load
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn index(&self) -> ArenaIndex {
        self.index
    }

    /// Distance to the root node; the root itself is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<ArenaIndex> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Tree with arena allocation and cheap, copyable node references.
///
/// Nodes are appended in insertion order and identified by a caller-supplied
/// unique id. The tree stays mutable while it is built; once walkers borrow
/// it, the borrow checker keeps the shape fixed for the duration of the walk.
pub struct ArenaTree<Load, NodeId> {
    /// Memory allocated area for nodes
    nodes: Vec<ArenaNode<Load, NodeId>>,
    /// Lookup of arena indices by node id
    lookup: HashMap<NodeId, ArenaIndex>,
}

impl<Load, NodeId> ArenaTree<Load, NodeId>
where
    NodeId: Eq + Clone + Hash + Debug,
{
    pub fn new() -> Self {
        ArenaTree {
            nodes: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ArenaTree {
            nodes: Vec::with_capacity(capacity),
            lookup: HashMap::with_capacity(capacity),
        }
    }

    /// Deletes all nodes and sets a new root.
    pub fn set_root(&mut self, load: Load, id: NodeId) -> NodeId {
        self.nodes.clear();
        self.lookup.clear();
        self.lookup.insert(id.clone(), ArenaIndex(0));
        self.nodes.push(ArenaNode {
            load,
            id: id.clone(),
            index: ArenaIndex(0),
            children: Vec::new(),
            depth: 0,
            parent: None,
        });
        trace!("tree cleared, new root set");
        id
    }

    /// Add a new node under `parent`. Fails if `parent` is unknown or `id`
    /// is already taken.
    #[instrument(level = "trace", skip(self, load))]
    pub fn add(&mut self, load: Load, id: NodeId, parent: &NodeId) -> Result<NodeId, FlatwalkError<NodeId>> {
        let parent_index = *self
            .lookup
            .get(parent)
            .ok_or_else(|| FlatwalkError::UnknownNode(parent.clone()))?;

        if self.lookup.contains_key(&id) {
            return Err(FlatwalkError::NotUnique(id));
        }

        let index = ArenaIndex(self.nodes.len());
        let parent_node = self
            .nodes
            .get_mut(parent_index.0)
            .ok_or(FlatwalkError::ReferenceOutOfBound(parent_index.0))?;

        parent_node.children.push(index);
        let depth = parent_node.depth + 1;

        self.lookup.insert(id.clone(), index);
        self.nodes.push(ArenaNode {
            load,
            id: id.clone(),
            index,
            children: Vec::new(),
            depth,
            parent: Some(parent_index),
        });

        Ok(id)
    }

    /// The reference of the root node, if one has been set.
    pub fn root(&self) -> Result<ArenaIndex, FlatwalkError<NodeId>> {
        self.nodes
            .first()
            .map(|node| node.index)
            .ok_or(FlatwalkError::RootNotSet)
    }

    pub fn node(&self, index: ArenaIndex) -> Option<&ArenaNode<Load, NodeId>> {
        self.nodes.get(index.0)
    }

    pub fn node_by_id(&self, id: &NodeId) -> Option<&ArenaNode<Load, NodeId>> {
        let index = self.lookup.get(id)?;
        self.nodes.get(index.0)
    }

    pub fn nodes(&self) -> &[ArenaNode<Load, NodeId>] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<Load, NodeId> Default for ArenaTree<Load, NodeId>
where
    NodeId: Eq + Clone + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Load, NodeId> ChildIterable for ArenaTree<Load, NodeId> {
    type NodeRef = ArenaIndex;
    type Children<'a>
        = std::iter::Copied<std::slice::Iter<'a, ArenaIndex>>
    where
        Self: 'a;

    /// Child references in insertion order. Double-ended, so the flat
    /// depth-first walker applies as well.
    ///
    /// Panics if `node` is not a reference into this tree.
    fn children(&self, node: ArenaIndex) -> Self::Children<'_> {
        self.nodes[node.0].children.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::{gather_breadth, gather_depth, keep_all};
    use itertools::Itertools;

    type DirectedTestTree = ArenaTree<usize, String>;

    #[test_log::test]
    fn adding_and_walking() {
        // Loads are integers chosen such that a depth-first walk yields them
        // in increasing order; ids reflect the order of insertion.
        //
        // Layout of the tree:
        //     0
        //    / \
        //  1    5
        // | \   |
        // 2  4  6
        // |
        // 3
        let mut tree = DirectedTestTree::new();

        let root = tree.set_root(0, "root".to_string());
        let first = tree.add(1, "first".to_string(), &root).unwrap();
        let second = tree.add(5, "second".to_string(), &root).unwrap();
        let third = tree.add(2, "third".to_string(), &first).unwrap();

        tree.add(4, "fourth".to_string(), &first).unwrap();
        tree.add(3, "fifth".to_string(), &third).unwrap();
        tree.add(6, "sixth".to_string(), &second).unwrap();

        // Storage keeps insertion order
        assert_eq!(tree.nodes().iter().map(|n| *n.load()).collect_vec(), &[0, 1, 5, 2, 4, 3, 6]);

        // The depth-first walk is ordered by load because of the chosen layout
        let result = gather_depth(&tree, tree.root().unwrap(), keep_all)
            .iter()
            .map(|&index| *tree.node(index).unwrap().load())
            .collect_vec();
        assert_eq!(result, &[0, 1, 2, 3, 4, 5, 6]);

        // A breadth-first walk groups loads by depth instead
        let result = gather_breadth(&tree, tree.root().unwrap(), keep_all)
            .iter()
            .map(|&index| *tree.node(index).unwrap().load())
            .collect_vec();
        assert_eq!(result, &[0, 1, 5, 2, 4, 6, 3]);

        // Depths and parent links are maintained on insertion
        let deep = tree.node_by_id(&"fifth".to_string()).unwrap();
        assert_eq!(deep.depth(), 3);
        assert_eq!(
            deep.parent(),
            Some(tree.node_by_id(&"third".to_string()).unwrap().index())
        );
    }

    #[test]
    fn ids_must_be_unique_and_parents_known() {
        let mut tree = DirectedTestTree::new();
        tree.set_root(0, "root".to_string());

        assert!(matches!(
            tree.add(1, "root".to_string(), &"root".to_string()),
            Err(FlatwalkError::NotUnique(_))
        ));
        assert!(matches!(
            tree.add(1, "first".to_string(), &"nope".to_string()),
            Err(FlatwalkError::UnknownNode(_))
        ));
    }

    #[test]
    fn an_empty_tree_has_no_root() {
        let tree = DirectedTestTree::new();
        assert!(matches!(tree.root(), Err(FlatwalkError::RootNotSet)));
    }

    #[test]
    fn leaves_have_empty_child_ranges() {
        let mut tree = DirectedTestTree::new();
        let root = tree.set_root(0, "root".to_string());
        tree.add(1, "first".to_string(), &root).unwrap();

        let leaf = tree.node_by_id(&"first".to_string()).unwrap();
        assert!(leaf.is_leaf());
        assert_eq!(tree.children(leaf.index()).count(), 0);
        assert_eq!(tree.children(ArenaIndex(0)).collect_vec(), &[ArenaIndex(1)]);
    }
}
