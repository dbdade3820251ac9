// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Layout: a depth-tiered layout engine for collapsible tree diagrams.
//!
//! This crate turns a [`canopy_tree::Tree`] plus a
//! [`canopy_collapse::CollapseSet`] into flat, renderer-ready node and edge
//! lists. It is the middle of the Canopy stack: the tree model below it is
//! pure data, and the drawing surface above it is bring-your-own: anything
//! that can draw boxes and arrows, pan/zoom, and fit a viewport.
//!
//! ## What it computes
//!
//! [`layout`] performs a single depth-first pass with post-order position
//! resolution:
//!
//! - Every visible leaf (a true leaf, or a collapsed node standing in for
//!   its hidden subtree) takes the next free horizontal slot.
//! - Every visible parent is centered over its visible children (arithmetic
//!   mean of their positions).
//! - Rows are depth tiers: the root sits at depth 0, children one tier down.
//! - Positions are normalized so the leftmost node sits at exactly 0.
//!
//! The engine emits abstract units (`depth`, `x_unit`); [`project`] converts
//! them to pixel [`kurbo::Point`]s using a [`Spacing`] and borrows labels and
//! metadata out of the tree for the renderer hand-off. Collapsed nodes are
//! positioned exactly like leaves, and a collapsed node is itself always
//! emitted: collapse hides children, never the collapsed node.
//!
//! Traversal uses an explicit work stack, so tree depth is bounded only by
//! memory, and suppressed subtrees are skipped entirely.
//!
//! ## Pipeline example
//!
//! ```rust
//! use canopy_collapse::CollapseSet;
//! use canopy_layout::{Spacing, layout, project};
//! use canopy_tree::{NodeData, Tree};
//!
//! let mut tree: Tree<&str> = Tree::new();
//! let root = tree.insert(None, NodeData::new("root", "Root"));
//! let branch = tree.insert(Some(root), NodeData::new("branch", "Branch"));
//! tree.insert(Some(branch), NodeData::new("tip", "Tip"));
//!
//! let mut collapsed = CollapseSet::new();
//! let full = layout(&tree, &collapsed);
//! assert_eq!(full.nodes.len(), 3);
//! assert_eq!(full.edges.len(), 2);
//!
//! // Collapse the branch: its subtree vanishes from nodes and edges alike.
//! collapsed.toggle("branch");
//! let folded = layout(&tree, &collapsed);
//! assert_eq!(folded.nodes.len(), 2);
//! assert_eq!(folded.edges.len(), 1);
//!
//! let placed = project(&tree, &folded, Spacing::default());
//! assert!(placed.bounds().is_some());
//! ```
//!
//! ## Driving a diagram
//!
//! [`Diagram`] bundles the tree, the collapse store, and a cached layout
//! behind a dirty flag, for hosts that want a single object to own the whole
//! interaction loop:
//!
//! ```rust
//! use canopy_layout::{Diagram, Spacing};
//! use canopy_tree::{NodeData, Tree};
//!
//! let mut tree: Tree<&str> = Tree::new();
//! let root = tree.insert(None, NodeData::new("root", "Root"));
//! tree.insert(Some(root), NodeData::new("leaf", "Leaf"));
//!
//! let mut diagram = Diagram::new(tree);
//! assert_eq!(diagram.toggle(&"root"), Some(true), "root has children");
//! assert_eq!(diagram.toggle(&"leaf"), None, "leaves have no affordance");
//! assert_eq!(diagram.layout().nodes.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod diagram;
mod layout;
mod project;

pub use diagram::Diagram;
pub use layout::{Layout, LayoutEdge, LayoutFlags, LayoutNode, layout};
pub use project::{PlacedEdge, PlacedNode, Placement, Spacing, project};
