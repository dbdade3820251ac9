// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena storage and structural accessors.

use alloc::{vec, vec::Vec};
use core::hash::Hash;
use core::ops::Index;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::types::{NodeData, NodeDesc, NodeIx};

#[derive(Clone, Debug)]
struct Node<K> {
    data: NodeData<K>,
    parent: Option<NodeIx>,
    children: SmallVec<[NodeIx; 4]>,
}

/// A single-rooted tree stored in a flat arena.
///
/// Nodes are addressed by [`NodeIx`]. The first parentless insert becomes the
/// root; all other nodes are inserted under an existing parent, which keeps
/// the structure acyclic. Sibling order is insertion order.
///
/// Identity keys are expected to be unique across the tree. If a duplicate
/// key is inserted, [`Tree::lookup`] resolves to the most recently inserted
/// node while both nodes remain in the structure; debug builds assert so the
/// mistake is caught during development.
///
/// ## Example
///
/// ```rust
/// use canopy_tree::{NodeData, Tree};
///
/// let mut tree: Tree<&str> = Tree::new();
/// let root = tree.insert(None, NodeData::new("root", "Root"));
/// let child = tree.insert(Some(root), NodeData::new("child", "Child"));
///
/// assert_eq!(tree.parent(child), Some(root));
/// assert_eq!(tree.children(root), &[child]);
/// assert!(tree.has_children(root));
/// assert!(!tree.has_children(child));
/// ```
#[derive(Clone, Debug)]
pub struct Tree<K> {
    nodes: Vec<Node<K>>,
    ids: HashMap<K, NodeIx>,
    root: Option<NodeIx>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            ids: HashMap::new(),
            root: None,
        }
    }

    /// The root node, or `None` while the tree is empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeIx> {
        self.root
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The payload of a node, or `None` if the index is out of range.
    #[must_use]
    pub fn get(&self, ix: NodeIx) -> Option<&NodeData<K>> {
        self.nodes.get(ix.idx()).map(|n| &n.data)
    }

    /// The parent of a node, or `None` for the root or an out-of-range index.
    #[must_use]
    pub fn parent(&self, ix: NodeIx) -> Option<NodeIx> {
        self.nodes.get(ix.idx()).and_then(|n| n.parent)
    }

    /// The ordered children of a node; empty for leaves and out-of-range
    /// indices.
    #[must_use]
    pub fn children(&self, ix: NodeIx) -> &[NodeIx] {
        self.nodes
            .get(ix.idx())
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Returns `true` if the node has at least one child.
    ///
    /// This reflects the underlying structure and is independent of any
    /// collapse state layered on top.
    #[must_use]
    pub fn has_children(&self, ix: NodeIx) -> bool {
        !self.children(ix).is_empty()
    }

    /// The metadata annotation of a node, if any.
    #[must_use]
    pub fn metadata(&self, ix: NodeIx) -> Option<&str> {
        self.get(ix).and_then(|d| d.metadata.as_deref())
    }

    /// Iterate all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIx, &NodeData<K>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeIx::new(i), &n.data))
    }
}

impl<K: Eq + Hash + Clone> Tree<K> {
    /// Insert a new node as a child of `parent`, or as the root if `None`.
    ///
    /// The tree is single-rooted: a second parentless insert is a debug-build
    /// assertion, and in release builds the node is stored but unreachable
    /// from the root (downstream layout never sees it).
    ///
    /// # Panics
    ///
    /// Panics if `parent` is an index that does not belong to this tree.
    pub fn insert(&mut self, parent: Option<NodeIx>, data: NodeData<K>) -> NodeIx {
        debug_assert!(
            !self.ids.contains_key(&data.id),
            "duplicate node id; lookups will resolve to the newer node"
        );
        let ix = NodeIx::new(self.nodes.len());
        match parent {
            Some(p) => self.nodes[p.idx()].children.push(ix),
            None => {
                debug_assert!(
                    self.root.is_none(),
                    "tree is single-rooted; parentless inserts after the first are unreachable"
                );
                if self.root.is_none() {
                    self.root = Some(ix);
                }
            }
        }
        self.ids.insert(data.id.clone(), ix);
        self.nodes.push(Node {
            data,
            parent,
            children: SmallVec::new(),
        });
        ix
    }

    /// Flatten a nested descriptor into an arena tree.
    ///
    /// Uses an explicit work stack rather than recursion, so descriptor depth
    /// is bounded only by memory. Sibling order is preserved.
    #[must_use]
    pub fn from_desc(desc: NodeDesc<K>) -> Self {
        let mut tree = Self::new();
        let mut stack = vec![(desc, None)];
        while let Some((NodeDesc { data, children }, parent)) = stack.pop() {
            let ix = tree.insert(parent, data);
            // Reversed push so siblings pop (and insert) left-to-right.
            for child in children.into_iter().rev() {
                stack.push((child, Some(ix)));
            }
        }
        tree
    }

    /// Resolve an identity key to its node index.
    #[must_use]
    pub fn lookup(&self, id: &K) -> Option<NodeIx> {
        self.ids.get(id).copied()
    }
}

impl<K> Index<NodeIx> for Tree<K> {
    type Output = NodeData<K>;

    /// # Panics
    ///
    /// Panics if `ix` does not belong to this tree. Use [`Tree::get`] for a
    /// fallible lookup.
    fn index(&self, ix: NodeIx) -> &NodeData<K> {
        &self.nodes[ix.idx()].data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn sample() -> Tree<&'static str> {
        // root -> [a -> [a1, a2], b]
        let mut tree = Tree::new();
        let root = tree.insert(None, NodeData::new("root", "Root"));
        let a = tree.insert(Some(root), NodeData::new("a", "A"));
        tree.insert(Some(root), NodeData::new("b", "B"));
        tree.insert(Some(a), NodeData::new("a1", "A1"));
        tree.insert(Some(a), NodeData::new("a2", "A2"));
        tree
    }

    #[test]
    fn empty_tree_has_no_root() {
        let tree: Tree<u32> = Tree::new();
        assert_eq!(tree.root(), None);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn structure_and_accessors() {
        let tree = sample();
        let root = tree.root().expect("sample tree has a root");
        let a = tree.lookup(&"a").unwrap();
        let b = tree.lookup(&"b").unwrap();
        let a1 = tree.lookup(&"a1").unwrap();
        let a2 = tree.lookup(&"a2").unwrap();

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.children(a), &[a1, a2]);
        assert_eq!(tree.parent(a1), Some(a));
        assert_eq!(tree.parent(root), None);
        assert!(tree.has_children(a));
        assert!(!tree.has_children(b));
        assert_eq!(tree[a1].label, "A1");
        assert_eq!(tree.metadata(a1), None);
    }

    #[test]
    fn sibling_order_is_insertion_order() {
        let tree = sample();
        let root = tree.root().unwrap();
        let labels: vec::Vec<&str> = tree
            .children(root)
            .iter()
            .map(|&c| tree[c].label.as_str())
            .collect();
        assert_eq!(labels, ["A", "B"], "children must stay in insertion order");
    }

    #[test]
    fn lookup_misses_return_none() {
        let tree = sample();
        assert_eq!(tree.lookup(&"nope"), None);
        assert_eq!(tree.get(NodeIx::new(99)), None);
        assert_eq!(tree.parent(NodeIx::new(99)), None);
        assert!(tree.children(NodeIx::new(99)).is_empty());
    }

    #[test]
    fn from_desc_matches_incremental_build() {
        let desc = NodeDesc::new(
            NodeData::new("root", "Root"),
            vec![
                NodeDesc::new(
                    NodeData::new("a", "A"),
                    vec![
                        NodeDesc::leaf(NodeData::new("a1", "A1")),
                        NodeDesc::leaf(NodeData::new("a2", "A2")),
                    ],
                ),
                NodeDesc::leaf(NodeData::new("b", "B")),
            ],
        );
        let tree = Tree::from_desc(desc);
        let expected = sample();

        assert_eq!(tree.len(), expected.len());
        let root = tree.root().unwrap();
        let a = tree.lookup(&"a").unwrap();
        assert_eq!(tree.children(root).len(), 2);
        assert_eq!(tree.children(a).len(), 2);
        // Same preorder of labels.
        let labels: vec::Vec<_> = tree.iter().map(|(_, d)| d.label.clone()).collect();
        let expected_labels: vec::Vec<_> = expected.iter().map(|(_, d)| d.label.clone()).collect();
        assert_eq!(labels, expected_labels);
    }

    #[test]
    fn from_desc_handles_deep_nesting() {
        // A 10_000-deep chain would overflow a recursive flattener.
        let mut desc = NodeDesc::leaf(NodeData::new(0_u32, "tip"));
        for id in 1..10_000_u32 {
            desc = NodeDesc::new(NodeData::new(id, id.to_string()), vec![desc]);
        }
        let tree = Tree::from_desc(desc);
        assert_eq!(tree.len(), 10_000);

        let mut depth = 0;
        let mut ix = tree.root().unwrap();
        while let Some(&child) = tree.children(ix).first() {
            ix = child;
            depth += 1;
        }
        assert_eq!(depth, 9_999);
        assert_eq!(tree[ix].label, "tip");
    }

    #[test]
    fn metadata_round_trips() {
        let mut tree: Tree<&str> = Tree::new();
        let root = tree.insert(None, NodeData::new("root", "Root").with_metadata("overview"));
        assert_eq!(tree.metadata(root), Some("overview"));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "duplicate node id")]
    fn duplicate_id_asserts_in_debug() {
        let mut tree: Tree<&str> = Tree::new();
        let root = tree.insert(None, NodeData::new("root", "Root"));
        tree.insert(Some(root), NodeData::new("root", "Impostor"));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "single-rooted")]
    fn second_root_asserts_in_debug() {
        let mut tree: Tree<&str> = Tree::new();
        tree.insert(None, NodeData::new("one", "One"));
        tree.insert(None, NodeData::new("two", "Two"));
    }
}
