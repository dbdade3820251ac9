// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine: depth tiers, slot allocation, subtree centering.

use alloc::{vec, vec::Vec};
use core::hash::Hash;

use canopy_collapse::CollapseSet;
use canopy_tree::{NodeIx, Tree};

bitflags::bitflags! {
    /// Per-node flags emitted by the layout engine.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LayoutFlags: u8 {
        /// The underlying node has at least one child, whether or not the
        /// children are currently visible. Drives the expand/collapse
        /// affordance.
        const HAS_CHILDREN = 0b0000_0001;
        /// The node is currently collapsed: it is positioned like a leaf and
        /// its subtree is suppressed.
        const COLLAPSED = 0b0000_0010;
    }
}

/// A positioned node in abstract layout units.
///
/// `x_unit` is a horizontal position in slot units (leaves occupy whole
/// slots, parents sit at fractional means); `depth` selects the vertical
/// tier. Multiply by a [`Spacing`](crate::Spacing) to obtain pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutNode {
    /// Arena index of the node in the source tree.
    pub ix: NodeIx,
    /// Tier below the root; the root has depth 0.
    pub depth: u32,
    /// Horizontal position in abstract units; the leftmost node is at 0.
    pub x_unit: f64,
    /// Structure and collapse flags.
    pub flags: LayoutFlags,
}

impl LayoutNode {
    /// Whether the underlying node has children (collapse state aside).
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.flags.contains(LayoutFlags::HAS_CHILDREN)
    }

    /// Whether the node is currently collapsed.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.flags.contains(LayoutFlags::COLLAPSED)
    }
}

/// An edge between a visible parent and a visible child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutEdge {
    /// The parent end.
    pub source: NodeIx,
    /// The child end.
    pub target: NodeIx,
}

/// The result of one layout pass: flat node and edge lists.
///
/// Recomputed from scratch on every relevant change; nothing here is meant
/// to outlive the next toggle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// All visible nodes, in traversal (post-order) sequence.
    pub nodes: Vec<LayoutNode>,
    /// All parent → visible-child edges.
    pub edges: Vec<LayoutEdge>,
}

enum Visit {
    Enter(NodeIx, u32),
    Exit(NodeIx, u32),
}

/// Lay out the visible portion of `tree` under the given collapse state.
///
/// Single depth-first pass with post-order position resolution:
///
/// 1. A node with no visible children (a true leaf, or any collapsed node)
///    takes the next free horizontal slot.
/// 2. A node with visible children is laid out after them and centered over
///    them (arithmetic mean of their `x_unit`s). With exactly one visible
///    child, parent and child share an `x_unit`.
/// 3. An edge is recorded for every visible child, including children that
///    are themselves collapsed.
/// 4. Positions are normalized so the minimum `x_unit` is exactly 0.
///
/// Sibling order is preserved. Keys in `collapsed` that name no node in the
/// tree are ignored. An empty tree produces an empty layout. Calling this
/// twice with the same inputs yields identical results; the engine reads the
/// collapse set as a snapshot and retains nothing.
#[must_use]
pub fn layout<K: Eq + Hash>(tree: &Tree<K>, collapsed: &CollapseSet<K>) -> Layout {
    let Some(root) = tree.root() else {
        return Layout::default();
    };

    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    // Scratch positions addressed by arena index; resolved bottom-up.
    let mut x_units = vec![0.0_f64; tree.len()];
    let mut next_slot: u32 = 0;
    let mut min_x = f64::INFINITY;

    let mut stack = vec![Visit::Enter(root, 0)];
    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(ix, depth) => {
                let is_collapsed = collapsed.is_collapsed(&tree[ix].id);
                let children = tree.children(ix);
                let mut flags = LayoutFlags::empty();
                if !children.is_empty() {
                    flags |= LayoutFlags::HAS_CHILDREN;
                }
                if is_collapsed {
                    flags |= LayoutFlags::COLLAPSED;
                }

                let visible: &[NodeIx] = if is_collapsed { &[] } else { children };
                if visible.is_empty() {
                    // True leaf, or a collapsed stand-in for its subtree:
                    // allocate the next slot.
                    let x_unit = f64::from(next_slot);
                    next_slot += 1;
                    x_units[ix.idx()] = x_unit;
                    min_x = min_x.min(x_unit);
                    nodes.push(LayoutNode {
                        ix,
                        depth,
                        x_unit,
                        flags,
                    });
                } else {
                    for &child in visible {
                        edges.push(LayoutEdge {
                            source: ix,
                            target: child,
                        });
                    }
                    stack.push(Visit::Exit(ix, depth));
                    // Reversed push so children are entered left-to-right.
                    for &child in visible.iter().rev() {
                        stack.push(Visit::Enter(child, depth + 1));
                    }
                }
            }
            Visit::Exit(ix, depth) => {
                // Only reached for expanded parents, whose visible children
                // are the full child list and have all been resolved.
                let children = tree.children(ix);
                let sum: f64 = children.iter().map(|c| x_units[c.idx()]).sum();
                let x_unit = sum / children.len() as f64;
                x_units[ix.idx()] = x_unit;
                min_x = min_x.min(x_unit);
                nodes.push(LayoutNode {
                    ix,
                    depth,
                    x_unit,
                    flags: LayoutFlags::HAS_CHILDREN,
                });
            }
        }
    }

    // Pin the leftmost node to 0 regardless of traversal artifacts.
    for node in &mut nodes {
        node.x_unit -= min_x;
    }

    Layout { nodes, edges }
}
