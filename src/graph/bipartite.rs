use std::collections::{HashMap, VecDeque};

use super::model::Graph;

/// Whether a six-node graph is K₃,₃: two groups of three with every cross
/// pair joined.
///
/// The graph is 2-colored breadth-first from the first node. Only that node's
/// component gets colored; nodes outside it are left out of the partition
/// rather than counted against it. Intra-group edges are caught only through
/// the coloring conflict they cause, and the total edge count is left to the
/// caller.
pub fn is_k33(graph: &Graph) -> bool {
	if graph.node_count() != 6 {
		return false;
	}

	let adjacency = graph.adjacency();
	let start = graph.nodes()[0].id.as_str();
	let mut colors: HashMap<&str, u8> = HashMap::from([(start, 0)]);
	let mut queue = VecDeque::from([start]);

	while let Some(node) = queue.pop_front() {
		let color = colors[node];
		for neighbor in adjacency.get(node).into_iter().flatten() {
			match colors.get(neighbor.as_str()).copied() {
				None => {
					colors.insert(neighbor, 1 - color);
					queue.push_back(neighbor);
				}
				Some(c) if c == color => return false,
				Some(_) => {}
			}
		}
	}

	let group = |color: u8| {
		colors
			.iter()
			.filter(|&(_, &c)| c == color)
			.map(|(&id, _)| id)
			.collect::<Vec<&str>>()
	};
	let (left, right) = (group(0), group(1));
	if left.len() != 3 || right.len() != 3 {
		return false;
	}

	left.iter()
		.all(|a| right.iter().all(|b| graph.has_edge(a, b)))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn six_nodes() -> Graph {
		let mut g = Graph::new();
		for i in 0..6 {
			g.add_node(i as f64, 0.0);
		}
		g
	}

	fn k33() -> Graph {
		let mut g = six_nodes();
		for a in ["n1", "n2", "n3"] {
			for b in ["n4", "n5", "n6"] {
				g.add_edge(a, b, None);
			}
		}
		g
	}

	#[test]
	fn detects_k33() {
		assert!(is_k33(&k33()));
	}

	#[test]
	fn detects_interleaved_k33() {
		let mut g = six_nodes();
		for a in ["n1", "n3", "n5"] {
			for b in ["n2", "n4", "n6"] {
				g.add_edge(b, a, None);
			}
		}
		assert!(is_k33(&g));
	}

	#[test]
	fn wrong_node_count() {
		let mut g = k33();
		g.add_node(0.0, 0.0);
		assert!(!is_k33(&g));
		assert!(!is_k33(&Graph::new()));
	}

	#[test]
	fn missing_cross_edge() {
		let mut g = six_nodes();
		for a in ["n1", "n2", "n3"] {
			for b in ["n4", "n5", "n6"] {
				if (a, b) != ("n3", "n6") {
					g.add_edge(a, b, None);
				}
			}
		}
		assert!(!is_k33(&g));
	}

	#[test]
	fn intra_group_edge_breaks_coloring() {
		let mut g = k33();
		g.add_edge("n1", "n2", None);
		assert!(!is_k33(&g));
	}

	#[test]
	fn unbalanced_partition() {
		// K1,5 star
		let mut g = six_nodes();
		for b in ["n2", "n3", "n4", "n5", "n6"] {
			g.add_edge("n1", b, None);
		}
		assert!(!is_k33(&g));
	}

	#[test]
	fn disconnected_nodes_are_not_partitioned() {
		let g = six_nodes();
		assert!(!is_k33(&g));
	}
}
