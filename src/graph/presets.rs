//! Ready-made graphs for the toolbar.

use std::f64::consts::PI;

use super::model::{Edge, Graph, GraphDocument, Node, Point};
use crate::config::{K33_COLOR, K5_COLOR, NODE_RADIUS};

/// K₅ with its nodes on a circle, the first one at the top.
pub fn complete_k5(center: Point, radius: f64) -> Graph {
	let mut graph = Graph::new();
	for i in 0..5 {
		let angle = i as f64 * 2.0 * PI / 5.0 - PI / 2.0;
		graph.add_node(
			center.x + radius * angle.cos(),
			center.y + radius * angle.sin(),
		);
	}
	let ids = node_ids(&graph);
	for i in 0..ids.len() {
		for j in i + 1..ids.len() {
			graph.add_edge(&ids[i], &ids[j], Some(K5_COLOR));
		}
	}
	graph
}

/// K₃,₃ drawn as two columns of three.
pub fn complete_k33(center: Point, radius: f64) -> Graph {
	let mut graph = Graph::new();
	for x in [center.x - radius, center.x + radius] {
		for i in 0..3 {
			graph.add_node(x, center.y - radius + i as f64 * radius);
		}
	}
	let ids = node_ids(&graph);
	let (left, right) = ids.split_at(3);
	for a in left {
		for b in right {
			graph.add_edge(a, b, Some(K33_COLOR));
		}
	}
	graph
}

/// A triangle, in the shape users would paste into the JSON box.
pub fn example_document() -> GraphDocument {
	let node = |id: &str, x, y| Node {
		id: id.into(),
		x,
		y,
		radius: NODE_RADIUS,
	};
	let edge = |from: &str, to: &str| Edge {
		from: from.into(),
		to: to.into(),
		color: None,
	};
	GraphDocument {
		nodes: vec![
			node("n1", 200.0, 200.0),
			node("n2", 400.0, 200.0),
			node("n3", 300.0, 350.0),
		],
		edges: vec![edge("n1", "n2"), edge("n1", "n3"), edge("n2", "n3")],
	}
}

fn node_ids(graph: &Graph) -> Vec<String> {
	graph.nodes().iter().map(|n| n.id.clone()).collect()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::graph::{Reason, classify, is_k33};

	#[test]
	fn k5_preset() {
		let g = complete_k5(Point::new(300.0, 300.0), 100.0);
		assert_eq!((g.node_count(), g.edge_count()), (5, 10));
		assert!(g.edges().iter().all(|e| e.color.as_deref() == Some(K5_COLOR)));
		let top = &g.nodes()[0];
		assert!((top.x - 300.0).abs() < 1e-9);
		assert!((top.y - 200.0).abs() < 1e-9);
		assert_eq!(classify(&g).reason, Reason::CompleteK5);
	}

	#[test]
	fn k33_preset() {
		let g = complete_k33(Point::new(300.0, 300.0), 100.0);
		assert_eq!((g.node_count(), g.edge_count()), (6, 9));
		assert_eq!((g.nodes()[0].x, g.nodes()[0].y), (200.0, 200.0));
		assert_eq!((g.nodes()[5].x, g.nodes()[5].y), (400.0, 400.0));
		assert!(!g.has_edge("n1", "n2"));
		assert!(is_k33(&g));
		assert_eq!(classify(&g).reason, Reason::CompleteK33);
	}

	#[test]
	fn example_is_a_planar_triangle() {
		let g = Graph::from(example_document());
		assert_eq!(g.adjacency()["n3"], vec!["n1", "n2"]);
		assert_eq!(classify(&g).reason, Reason::EdgeBound);
	}
}
