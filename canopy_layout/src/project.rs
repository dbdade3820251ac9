// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel projection: abstract layout units to renderer-ready records.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use canopy_tree::Tree;

use crate::layout::{Layout, LayoutFlags};

/// Pixel steps between adjacent slots and adjacent depth tiers.
///
/// These are configuration of the rendering stage, not of the layout
/// algorithm; the engine itself only emits abstract units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    /// Horizontal pixels per slot unit.
    pub horizontal: f64,
    /// Vertical pixels per depth tier.
    pub vertical: f64,
}

impl Spacing {
    /// Map a depth tier and slot position to a pixel position.
    #[must_use]
    pub fn position(&self, depth: u32, x_unit: f64) -> Point {
        Point::new(x_unit * self.horizontal, f64::from(depth) * self.vertical)
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            horizontal: 220.0,
            vertical: 140.0,
        }
    }
}

/// A renderer-ready node: identity, pixel position, and display strings
/// borrowed from the tree.
#[derive(Clone, Copy, Debug)]
pub struct PlacedNode<'a, K> {
    /// The node's identity key.
    pub id: &'a K,
    /// Pixel position of the node.
    pub position: Point,
    /// Primary display string.
    pub label: &'a str,
    /// Optional secondary annotation.
    pub metadata: Option<&'a str>,
    /// Tier below the root.
    pub depth: u32,
    /// Structure and collapse flags.
    pub flags: LayoutFlags,
}

impl<K> PlacedNode<'_, K> {
    /// Whether a collapse affordance should render for this node.
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

/// A renderer-ready edge between two visible nodes, by identity key.
#[derive(Clone, Copy, Debug)]
pub struct PlacedEdge<'a, K> {
    /// The parent end.
    pub source: &'a K,
    /// The child end.
    pub target: &'a K,
}

/// The full renderer hand-off: positioned nodes and edges.
///
/// Hand both lists to any graph-drawing surface; [`Placement::bounds`] gives
/// it the content rectangle to fit its viewport to.
#[derive(Clone, Debug)]
pub struct Placement<'a, K> {
    /// Positioned nodes.
    pub nodes: Vec<PlacedNode<'a, K>>,
    /// Edges between visible nodes.
    pub edges: Vec<PlacedEdge<'a, K>>,
}

impl<K> Placement<'_, K> {
    /// The tight bounding rectangle of all node positions, or `None` for an
    /// empty placement.
    ///
    /// Positions are node anchor points; renderers that draw extended shapes
    /// around them will want to pad this before fitting.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.nodes.iter();
        let first = it.next()?;
        Some(it.fold(
            Rect::from_points(first.position, first.position),
            |acc, node| acc.union_pt(node.position),
        ))
    }
}

/// Project a layout into pixel space, borrowing display data from the tree.
///
/// The layout must have been computed from the same tree.
#[must_use]
pub fn project<'a, K>(tree: &'a Tree<K>, layout: &Layout, spacing: Spacing) -> Placement<'a, K> {
    let nodes = layout
        .nodes
        .iter()
        .map(|node| {
            let data = &tree[node.ix];
            PlacedNode {
                id: &data.id,
                position: spacing.position(node.depth, node.x_unit),
                label: &data.label,
                metadata: data.metadata.as_deref(),
                depth: node.depth,
                flags: node.flags,
            }
        })
        .collect();
    let edges = layout
        .edges
        .iter()
        .map(|edge| PlacedEdge {
            source: &tree[edge.source].id,
            target: &tree[edge.target].id,
        })
        .collect();
    Placement { nodes, edges }
}
