//! Force-directed relaxation of node positions.

use std::collections::HashMap;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::{debug, warn};

use super::model::{Graph, Point};
use crate::config::RELAX_DT;

/// Runs `steps` simulation ticks seeded with the current positions and writes
/// the settled positions back. Ids, edges and ordering are untouched.
///
/// The graph is recentered on `center` afterwards so relaxing does not drift
/// it off the canvas.
pub fn relax(graph: &mut Graph, center: Point, steps: usize) {
	if graph.node_count() < 2 {
		return;
	}

	let mut sim: ForceGraph<usize, ()> = ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	});
	let mut id_to_idx = HashMap::new();
	for (i, node) in graph.nodes().iter().enumerate() {
		let idx = sim.add_node(NodeData {
			x: node.x as f32,
			y: node.y as f32,
			mass: 10.0,
			is_anchor: false,
			user_data: i,
		});
		id_to_idx.insert(node.id.clone(), idx);
	}
	for edge in graph.edges() {
		if let (Some(&a), Some(&b)) = (id_to_idx.get(&edge.from), id_to_idx.get(&edge.to)) {
			sim.add_edge(a, b, EdgeData::default());
		}
	}

	for _ in 0..steps {
		sim.update(RELAX_DT);
	}

	let mut positions = vec![(0.0, 0.0); graph.node_count()];
	sim.visit_nodes(|node| {
		positions[node.data.user_data] = (node.x() as f64, node.y() as f64);
	});

	if positions.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
		warn!("layout diverged, keeping current positions");
		return;
	}

	let n = positions.len() as f64;
	let (sx, sy) = positions
		.iter()
		.fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
	let (dx, dy) = (center.x - sx / n, center.y - sy / n);

	let ids: Vec<String> = graph.nodes().iter().map(|n| n.id.clone()).collect();
	for (id, (x, y)) in ids.iter().zip(positions) {
		graph.move_node(id, x + dx, y + dy);
	}
	debug!("relaxed {} nodes over {steps} steps", ids.len());
}
