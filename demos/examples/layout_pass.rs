// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives the layout engine directly, without the `Diagram` controller:
//! build a tree, toggle the collapse store by hand, and re-run the pure
//! layout pass after each change.
//!
//! Run with: `cargo run -p canopy_demos --example layout_pass`

use canopy_collapse::CollapseSet;
use canopy_layout::{Layout, layout};
use canopy_tree::{NodeData, Tree};

fn main() {
    let mut tree: Tree<String> = Tree::new();
    let root = tree.insert(None, NodeData::new("root".into(), "Root"));
    let left = tree.insert(Some(root), NodeData::new("left".into(), "Left"));
    tree.insert(Some(root), NodeData::new("right".into(), "Right"));
    tree.insert(Some(left), NodeData::new("left-1".into(), "Left 1"));
    tree.insert(Some(left), NodeData::new("left-2".into(), "Left 2"));

    let mut collapsed: CollapseSet<String> = CollapseSet::new();
    print_layout(&tree, &layout(&tree, &collapsed));

    // Collapse the left branch; its subtree drops out of the next pass.
    collapsed.toggle("left".into());
    println!("-- after collapsing `left` (revision {}) --", collapsed.revision());
    print_layout(&tree, &layout(&tree, &collapsed));

    // Toggling again restores the original, fully expanded layout.
    collapsed.toggle("left".into());
    println!("-- after expanding `left` (revision {}) --", collapsed.revision());
    print_layout(&tree, &layout(&tree, &collapsed));
}

fn print_layout(tree: &Tree<String>, result: &Layout) {
    for node in &result.nodes {
        println!(
            "  depth {} x {:>4.1}  {}",
            node.depth, node.x_unit, tree[node.ix].label
        );
    }
    println!(
        "  {} nodes, {} edges",
        result.nodes.len(),
        result.edges.len()
    );
}
