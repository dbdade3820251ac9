// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a small org chart, prints its layout, then collapses two branches
//! and prints the re-fitted result.
//!
//! Run with: `cargo run -p canopy_demos --example org_chart`

use canopy_layout::{Diagram, Spacing};
use canopy_tree::{NodeData, NodeDesc, Tree};
use kurbo::Rect;

fn main() {
    let tree = Tree::from_desc(NodeDesc::new(
        NodeData::new("org", "Acme").with_metadata("Global overview"),
        vec![
            NodeDesc::new(
                NodeData::new("sales", "Sales").with_metadata("Sales funnel"),
                vec![
                    NodeDesc::leaf(NodeData::new("prospects", "Prospects")),
                    NodeDesc::leaf(NodeData::new("leads", "Leads")),
                    NodeDesc::leaf(NodeData::new("deals", "Deals")),
                ],
            ),
            NodeDesc::new(
                NodeData::new("ops", "Operations"),
                vec![
                    NodeDesc::leaf(NodeData::new("warehousing", "Warehousing")),
                    NodeDesc::leaf(NodeData::new("logistics", "Logistics")),
                ],
            ),
            NodeDesc::leaf(NodeData::new("finance", "Finance")),
            NodeDesc::new(
                NodeData::new("product", "Product"),
                vec![NodeDesc::leaf(NodeData::new("roadmap", "Roadmap"))],
            ),
            NodeDesc::leaf(NodeData::new("people", "People")),
        ],
    ));

    let mut diagram = Diagram::new(tree);
    print_placement("fully expanded", &mut diagram);

    diagram.toggle(&"sales");
    diagram.toggle(&"product");
    print_placement("sales and product collapsed", &mut diagram);
}

fn print_placement(title: &str, diagram: &mut Diagram<&'static str>) {
    let placement = diagram.placed(Spacing::default());

    println!("== {title} ==");
    for node in &placement.nodes {
        let affordance = if node.is_collapsed() {
            " [+]"
        } else if node.has_children() {
            " [-]"
        } else {
            ""
        };
        let metadata = node.metadata.map(|m| format!(" ({m})")).unwrap_or_default();
        println!(
            "  {:>8.1},{:>7.1}  {}{metadata}{affordance}",
            node.position.x, node.position.y, node.label
        );
    }
    for edge in &placement.edges {
        println!("  {} -> {}", edge.source, edge.target);
    }

    if let Some(bounds) = placement.bounds() {
        // A renderer would fit its viewport to the content with some padding,
        // in the spirit of a fit-view call.
        let padded: Rect = bounds.inflate(bounds.width() * 0.2, bounds.height() * 0.2);
        println!("  fit viewport to {padded:?}");
    }
    println!();
}
