// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Tree: an immutable, index-addressed tree model.
//!
//! Canopy Tree is the input side of the Canopy diagram stack. It stores a
//! single-rooted hierarchy of labeled nodes in a flat arena, addressed by
//! [`NodeIx`] indices, with parent and child-index links kept alongside each
//! node.
//!
//! - Nodes carry an application-chosen identity key, a display label, and an
//!   optional metadata string ([`NodeData`]).
//! - Sibling order is significant and preserved exactly as inserted; it
//!   determines left-to-right order in any downstream layout.
//! - The structure is acyclic by construction: children are always freshly
//!   inserted nodes, so no insertion can introduce a cycle.
//!
//! The tree is append-only and intended to be built once, then treated as
//! read-only for the lifetime of a view. There is no removal, reparenting, or
//! relabeling, which is why [`NodeIx`] is a plain index without a generation
//! counter: an index obtained from a tree stays valid for that tree forever.
//!
//! The key type `K` is generic so callers can use any small identity they
//! already have (a `String`, an interned symbol, an integer id). Lookups by
//! key go through an internal map; traversal never touches it.
//!
//! ## Building a tree
//!
//! Incrementally, in the manner of any arena:
//!
//! ```rust
//! use canopy_tree::{NodeData, Tree};
//!
//! let mut tree: Tree<&str> = Tree::new();
//! let root = tree.insert(None, NodeData::new("root", "Root"));
//! let a = tree.insert(Some(root), NodeData::new("a", "Alpha"));
//! let _b = tree.insert(Some(root), NodeData::new("b", "Beta"));
//!
//! assert_eq!(tree.root(), Some(root));
//! assert_eq!(tree.children(root).len(), 2);
//! assert_eq!(tree[a].label, "Alpha");
//! ```
//!
//! Or from a nested descriptor, the natural shape of externally supplied
//! data. The descriptor is flattened with an explicit work stack, so
//! arbitrarily deep inputs cannot overflow the call stack:
//!
//! ```rust
//! use canopy_tree::{NodeData, NodeDesc, Tree};
//!
//! let tree = Tree::from_desc(NodeDesc::new(
//!     NodeData::new("root", "Root"),
//!     vec![
//!         NodeDesc::leaf(NodeData::new("a", "Alpha").with_metadata("first")),
//!         NodeDesc::leaf(NodeData::new("b", "Beta")),
//!     ],
//! ));
//!
//! let a = tree.lookup(&"a").unwrap();
//! assert_eq!(tree.metadata(a), Some("first"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::Tree;
pub use types::{NodeData, NodeDesc, NodeIx};
