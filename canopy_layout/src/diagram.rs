// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns a tree, its collapse state, and a cached
//! layout.

use core::hash::Hash;

use canopy_collapse::CollapseSet;
use canopy_tree::Tree;

use crate::layout::{Layout, layout};
use crate::project::{Placement, Spacing, project};

/// Controller for one collapsible tree diagram.
///
/// This type:
/// - owns the [`Tree`] and its [`CollapseSet`],
/// - caches the last computed [`Layout`] behind a dirty flag,
/// - gates [`Diagram::toggle`] to nodes that actually have children.
///
/// It does *not* know about any drawing surface; hosts call
/// [`Diagram::placed`] after each toggle and hand the result to whatever
/// renders. Because the only mutation path is `toggle`, a toggle and the
/// re-layout it triggers are strictly sequential from the caller's
/// perspective.
#[derive(Clone, Debug)]
pub struct Diagram<K> {
    tree: Tree<K>,
    collapsed: CollapseSet<K>,
    dirty: bool,
    cached: Layout,
}

impl<K: Eq + Hash + Clone> Diagram<K> {
    /// Create a diagram over `tree` with every node expanded.
    #[must_use]
    pub fn new(tree: Tree<K>) -> Self {
        Self {
            tree,
            collapsed: CollapseSet::new(),
            dirty: true,
            cached: Layout::default(),
        }
    }

    /// The underlying tree.
    #[must_use]
    pub fn tree(&self) -> &Tree<K> {
        &self.tree
    }

    /// The current collapse state.
    #[must_use]
    pub fn collapsed(&self) -> &CollapseSet<K> {
        &self.collapsed
    }

    /// Flip the collapse state of the node identified by `id`.
    ///
    /// Returns the node's new collapse state, or `None` if `id` names no
    /// node in the tree or names a leaf; the collapse affordance only
    /// exists on nodes with children, so such requests change nothing.
    pub fn toggle(&mut self, id: &K) -> Option<bool> {
        let ix = self.tree.lookup(id)?;
        if !self.tree.has_children(ix) {
            return None;
        }
        let now_collapsed = self.collapsed.toggle(id.clone());
        self.dirty = true;
        Some(now_collapsed)
    }

    /// Compute or return the cached layout.
    pub fn layout(&mut self) -> &Layout {
        self.refresh();
        &self.cached
    }

    /// Compute (if stale) and project the layout into pixel space.
    pub fn placed(&mut self, spacing: Spacing) -> Placement<'_, K> {
        self.refresh();
        project(&self.tree, &self.cached, spacing)
    }

    fn refresh(&mut self) {
        if self.dirty {
            self.cached = layout(&self.tree, &self.collapsed);
            self.dirty = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_tree::NodeData;

    /// root -> [a -> [a1, a2], b]
    fn sample() -> Diagram<&'static str> {
        let mut tree = Tree::new();
        let root = tree.insert(None, NodeData::new("root", "Root"));
        let a = tree.insert(Some(root), NodeData::new("a", "A"));
        tree.insert(Some(root), NodeData::new("b", "B"));
        tree.insert(Some(a), NodeData::new("a1", "A1"));
        tree.insert(Some(a), NodeData::new("a2", "A2"));
        Diagram::new(tree)
    }

    #[test]
    fn toggle_collapses_and_expands() {
        let mut diagram = sample();
        assert_eq!(diagram.layout().nodes.len(), 5);

        assert_eq!(diagram.toggle(&"a"), Some(true));
        assert_eq!(diagram.layout().nodes.len(), 3);
        assert_eq!(diagram.layout().edges.len(), 2);

        assert_eq!(diagram.toggle(&"a"), Some(false));
        assert_eq!(diagram.layout().nodes.len(), 5);
    }

    #[test]
    fn toggle_refuses_leaves_and_unknown_ids() {
        let mut diagram = sample();
        let before = diagram.collapsed().revision();

        assert_eq!(diagram.toggle(&"b"), None, "leaf");
        assert_eq!(diagram.toggle(&"missing"), None, "unknown id");
        assert_eq!(
            diagram.collapsed().revision(),
            before,
            "refused toggles must not touch the store"
        );
    }

    #[test]
    fn layout_is_cached_between_toggles() {
        let mut diagram = sample();
        let first = diagram.layout().clone();
        assert_eq!(&first, diagram.layout(), "no toggle, same layout");

        diagram.toggle(&"a");
        assert_ne!(&first, diagram.layout());
    }

    #[test]
    fn placed_reflects_the_current_collapse_state() {
        let mut diagram = sample();
        diagram.toggle(&"a");
        let placement = diagram.placed(Spacing::default());

        assert_eq!(placement.nodes.len(), 3);
        let a = placement
            .nodes
            .iter()
            .find(|n| *n.id == "a")
            .expect("a is placed");
        assert!(a.has_children());
        assert!(a.is_collapsed());
        assert!(placement.nodes.iter().all(|n| *n.id != "a1"));
    }

    #[test]
    fn toggling_everything_back_restores_the_empty_store() {
        let mut diagram = sample();
        diagram.toggle(&"a");
        diagram.toggle(&"root");
        diagram.toggle(&"a");
        diagram.toggle(&"root");
        assert_eq!(diagram.collapsed(), &CollapseSet::new());
        assert_eq!(diagram.layout().nodes.len(), 5);
    }
}
