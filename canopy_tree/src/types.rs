// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the tree model: node indices, payloads, and descriptors.

use alloc::string::String;
use alloc::vec::Vec;

/// Index of a node in a [`Tree`](crate::Tree) arena.
///
/// Trees are append-only, so an index obtained from a tree remains valid for
/// that tree indefinitely. Indices are only meaningful for the tree that
/// produced them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeIx(pub(crate) u32);

impl NodeIx {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The arena is addressed with 32-bit indices."
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// The raw arena index.
    pub const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Per-node payload: identity key, display label, and optional metadata.
///
/// The key `K` is the only identity used across the Canopy stack; labels and
/// metadata are opaque display strings passed through to the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeData<K> {
    /// Identity key, expected to be unique across the whole tree.
    pub id: K,
    /// Primary display string.
    pub label: String,
    /// Optional secondary annotation shown alongside the label.
    pub metadata: Option<String>,
}

impl<K> NodeData<K> {
    /// Create a payload with no metadata.
    pub fn new(id: K, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            metadata: None,
        }
    }

    /// Attach a metadata annotation.
    #[must_use]
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}

/// A nested tree descriptor, for callers whose data already has tree shape.
///
/// Flattened into an arena by [`Tree::from_desc`](crate::Tree::from_desc).
/// Child order is preserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDesc<K> {
    /// This node's payload.
    pub data: NodeData<K>,
    /// Ordered children; empty for a leaf.
    pub children: Vec<NodeDesc<K>>,
}

impl<K> NodeDesc<K> {
    /// Create a descriptor with the given children.
    pub fn new(data: NodeData<K>, children: Vec<Self>) -> Self {
        Self { data, children }
    }

    /// Create a leaf descriptor.
    pub fn leaf(data: NodeData<K>) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }
}
