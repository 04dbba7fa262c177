use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{EDGE_COLOR, NODE_RADIUS};
use crate::error::{GraphError, Result};

/// A position in canvas space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset from the canvas' left edge.
	pub x: f64,
	/// Vertical offset from the canvas' top edge.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

fn default_radius() -> f64 {
	NODE_RADIUS
}

/// A vertex placed on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
	/// `n1`, `n2`, ... for nodes created by [`Graph::add_node`]; anything for loaded ones.
	pub id: String,
	/// Center, x.
	pub x: f64,
	/// Center, y.
	pub y: f64,
	/// Only used for drawing and hit testing.
	#[serde(default = "default_radius")]
	pub radius: f64,
}

impl Node {
	fn contains(&self, p: Point) -> bool {
		let (dx, dy) = (self.x - p.x, self.y - p.y);
		(dx * dx + dy * dy).sqrt() <= self.radius
	}
}

/// Undirected edge; `from`/`to` order carries no meaning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
	/// One endpoint id.
	pub from: String,
	/// The other endpoint id.
	pub to: String,
	/// Stroke color; `None` falls back to [`EDGE_COLOR`] when drawn.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
}

impl Edge {
	/// True when this edge joins `a` and `b` in either direction.
	pub fn connects(&self, a: &str, b: &str) -> bool {
		(self.from == a && self.to == b) || (self.from == b && self.to == a)
	}
}

/// The JSON interchange shape: `{ "nodes": [...], "edges": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
	/// Nodes in insertion order.
	pub nodes: Vec<Node>,
	/// Edges in insertion order.
	pub edges: Vec<Edge>,
}

/// Ordered node and edge store.
///
/// Node ids are `n1, n2, ...` in insertion order. Nodes are only ever removed
/// all at once by [`Graph::clear`], so ids are never handed out twice within
/// one editing session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
}

impl Graph {
	/// An empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Nodes in insertion order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Number of nodes, `v`.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of edges, `e`. Dangling edges from loaded JSON count too.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// True when there are no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Appends a node with the next sequential id.
	pub fn add_node(&mut self, x: f64, y: f64) -> &Node {
		let id = format!("n{}", self.nodes.len() + 1);
		debug!("add node {id} at ({x:.1}, {y:.1})");
		self.nodes.push(Node {
			id,
			x,
			y,
			radius: NODE_RADIUS,
		});
		&self.nodes[self.nodes.len() - 1]
	}

	/// Connects `a` and `b`. Self-loops and duplicates (in either direction)
	/// are rejected with `false` and leave the graph unchanged.
	pub fn add_edge(&mut self, a: &str, b: &str, color: Option<&str>) -> bool {
		if a == b || self.has_edge(a, b) {
			debug!("rejected edge {a} -- {b}");
			return false;
		}
		self.edges.push(Edge {
			from: a.to_owned(),
			to: b.to_owned(),
			color: Some(color.unwrap_or(EDGE_COLOR).to_owned()),
		});
		debug!("add edge {a} -- {b}");
		true
	}

	/// Drops every node and edge; ids start again at `n1`.
	pub fn clear(&mut self) {
		self.nodes.clear();
		self.edges.clear();
	}

	/// Node with the given id, by linear search.
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Mutable variant of [`Graph::node`].
	pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
		self.nodes.iter_mut().find(|n| n.id == id)
	}

	/// Repositions a node. Returns `false` if no node has that id.
	pub fn move_node(&mut self, id: &str, x: f64, y: f64) -> bool {
		match self.node_mut(id) {
			Some(node) => {
				node.x = x;
				node.y = y;
				true
			}
			None => false,
		}
	}

	/// Whether `a` and `b` are joined, in either direction.
	pub fn has_edge(&self, a: &str, b: &str) -> bool {
		self.edges.iter().any(|e| e.connects(a, b))
	}

	/// First node, in insertion order, whose circle contains `p`.
	pub fn node_at(&self, p: Point) -> Option<&Node> {
		self.nodes.iter().find(|n| n.contains(p))
	}

	/// Neighbor lists keyed by node id, rebuilt from the edge list on every call.
	///
	/// Every node gets an entry, isolated ones included. Each edge appends each
	/// endpoint to the other's list, so neighbors appear in edge insertion order.
	/// Endpoints naming unknown nodes (possible after loading unchecked JSON)
	/// get an entry of their own instead of being dropped.
	pub fn adjacency(&self) -> HashMap<String, Vec<String>> {
		let mut adj: HashMap<String, Vec<String>> = self
			.nodes
			.iter()
			.map(|n| (n.id.clone(), Vec::new()))
			.collect();
		for edge in &self.edges {
			adj.entry(edge.from.clone()).or_default().push(edge.to.clone());
			adj.entry(edge.to.clone()).or_default().push(edge.from.clone());
		}
		adj
	}

	/// Snapshot in the interchange shape.
	pub fn to_document(&self) -> GraphDocument {
		GraphDocument {
			nodes: self.nodes.clone(),
			edges: self.edges.clone(),
		}
	}

	/// Indented JSON of [`Graph::to_document`].
	pub fn to_json_pretty(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(&self.to_document())?)
	}

	/// Replaces the whole graph. Node radii are reset to [`NODE_RADIUS`];
	/// nothing else is validated.
	pub fn load(&mut self, doc: GraphDocument) {
		self.nodes = doc
			.nodes
			.into_iter()
			.map(|n| Node {
				radius: NODE_RADIUS,
				..n
			})
			.collect();
		self.edges = doc.edges;
		debug!(
			"loaded graph with {} nodes, {} edges",
			self.nodes.len(),
			self.edges.len()
		);
	}

	/// Loads a parsed document. `nodes` and `edges` must both be present and
	/// not blank (`null`, `false`, `0` or `""`), otherwise
	/// [`GraphError::InvalidFormat`]. Entries that do not decode as nodes or
	/// edges fail with [`GraphError::Json`]. On error the graph is left as it
	/// was.
	pub fn load_value(&mut self, value: Value) -> Result<()> {
		let has = |key: &str| value.get(key).is_some_and(|v| !is_blank(v));
		if !has("nodes") || !has("edges") {
			warn!("graph document is missing nodes or edges");
			return Err(GraphError::InvalidFormat);
		}
		let doc: GraphDocument = serde_json::from_value(value)?;
		self.load(doc);
		Ok(())
	}

	/// Parses `text` and hands it to [`Graph::load_value`].
	pub fn load_json(&mut self, text: &str) -> Result<()> {
		let value: Value = serde_json::from_str(text)?;
		self.load_value(value)
	}
}

fn is_blank(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::Bool(b) => !b,
		Value::Number(n) => n.as_f64() == Some(0.0),
		Value::String(s) => s.is_empty(),
		Value::Array(_) | Value::Object(_) => false,
	}
}

impl From<GraphDocument> for Graph {
	fn from(doc: GraphDocument) -> Self {
		let mut graph = Graph::new();
		graph.load(doc);
		graph
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	fn path3() -> Graph {
		let mut g = Graph::new();
		for i in 0..3 {
			g.add_node(i as f64 * 50.0, 0.0);
		}
		g
	}

	#[test]
	fn node_ids_follow_insertion_order() {
		let g = path3();
		let ids: Vec<&str> = g.nodes().iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec!["n1", "n2", "n3"]);
		assert!(g.nodes().iter().all(|n| n.radius == NODE_RADIUS));
	}

	#[test]
	fn ids_restart_after_clear() {
		let mut g = path3();
		g.add_edge("n1", "n2", None);
		g.clear();
		assert!(g.is_empty());
		assert_eq!(g.edge_count(), 0);
		assert_eq!(g.add_node(1.0, 1.0).id, "n1");
	}

	#[test]
	fn self_loop_is_rejected() {
		let mut g = path3();
		assert!(!g.add_edge("n1", "n1", None));
		assert_eq!(g.edge_count(), 0);
	}

	#[test]
	fn reversed_duplicate_is_rejected() {
		let mut g = path3();
		assert!(g.add_edge("n1", "n2", None));
		assert!(!g.add_edge("n2", "n1", Some("#000")));
		assert!(!g.add_edge("n1", "n2", None));
		assert_eq!(g.edge_count(), 1);
	}

	#[test]
	fn uncolored_edges_get_default_color() {
		let mut g = path3();
		g.add_edge("n1", "n2", None);
		g.add_edge("n2", "n3", Some("#123456"));
		assert_eq!(g.edges()[0].color.as_deref(), Some(EDGE_COLOR));
		assert_eq!(g.edges()[1].color.as_deref(), Some("#123456"));
	}

	#[test]
	fn adjacency_lists_both_directions() {
		let mut g = path3();
		g.add_edge("n1", "n2", None);
		g.add_edge("n1", "n3", None);
		let adj = g.adjacency();
		assert_eq!(adj["n1"], vec!["n2", "n3"]);
		assert_eq!(adj["n2"], vec!["n1"]);
		assert_eq!(adj["n3"], vec!["n1"]);
	}

	#[test]
	fn adjacency_keeps_isolated_and_dangling_nodes() {
		let mut g = Graph::new();
		g.load_value(json!({
			"nodes": [{ "id": "n1", "x": 0, "y": 0 }, { "id": "n2", "x": 1, "y": 1 }],
			"edges": [{ "from": "n1", "to": "ghost" }]
		}))
		.unwrap();
		let adj = g.adjacency();
		assert_eq!(adj["n1"], vec!["ghost"]);
		assert_eq!(adj["ghost"], vec!["n1"]);
		assert!(adj["n2"].is_empty());
	}

	#[test]
	fn lookup_and_move() {
		let mut g = path3();
		assert!(g.node("n4").is_none());
		assert!(g.move_node("n2", 7.0, 8.0));
		let n2 = g.node("n2").unwrap();
		assert_eq!((n2.x, n2.y), (7.0, 8.0));
		assert!(!g.move_node("n9", 0.0, 0.0));
	}

	#[test]
	fn hit_test_uses_radius() {
		let g = path3();
		assert_eq!(g.node_at(Point::new(55.0, 5.0)).map(|n| n.id.as_str()), Some("n2"));
		assert_eq!(g.node_at(Point::new(15.0, 0.0)).map(|n| n.id.as_str()), Some("n1"));
		assert!(g.node_at(Point::new(0.0, 40.0)).is_none());
	}

	#[test]
	fn load_requires_both_keys() {
		let mut g = path3();
		let err = g.load_value(json!({ "nodes": [] })).unwrap_err();
		assert!(matches!(err, GraphError::InvalidFormat));
		assert_eq!(err.to_string(), "invalid graph format");
		assert!(matches!(
			g.load_value(json!({ "nodes": null, "edges": [] })),
			Err(GraphError::InvalidFormat)
		));
		assert_eq!(g.node_count(), 3);
	}

	#[test]
	fn blank_fields_are_an_invalid_format() {
		let mut g = path3();
		for blank in [json!(false), json!(0), json!(""), json!(null)] {
			let err = g
				.load_value(json!({ "nodes": blank.clone(), "edges": [] }))
				.unwrap_err();
			assert!(matches!(err, GraphError::InvalidFormat), "{blank}: {err}");
			let err = g
				.load_value(json!({ "nodes": [], "edges": blank.clone() }))
				.unwrap_err();
			assert!(matches!(err, GraphError::InvalidFormat), "{blank}: {err}");
		}
		// Non-blank but wrong-typed still reaches the decoder.
		assert!(matches!(
			g.load_value(json!({ "nodes": true, "edges": [] })),
			Err(GraphError::Json(_))
		));
		assert_eq!(g.node_count(), 3);
	}

	#[test]
	fn load_rejects_malformed_entries() {
		let mut g = path3();
		let err = g
			.load_value(json!({ "nodes": [{ "id": 5 }], "edges": [] }))
			.unwrap_err();
		assert!(matches!(err, GraphError::Json(_)));
		assert_eq!(g.node_count(), 3);
	}

	#[test]
	fn load_json_reports_bad_text() {
		let mut g = Graph::new();
		assert!(matches!(g.load_json("{ nodes"), Err(GraphError::Json(_))));
	}

	#[test]
	fn load_normalizes_radius() {
		let mut g = Graph::new();
		g.load_json(r#"{"nodes":[{"id":"a","x":1,"y":2,"radius":3}],"edges":[]}"#)
			.unwrap();
		assert_eq!(g.nodes()[0].radius, NODE_RADIUS);
	}

	#[test]
	fn json_round_trip() {
		let mut g = path3();
		g.add_edge("n1", "n2", None);
		g.add_edge("n3", "n2", Some("#9C27B0"));
		let text = g.to_json_pretty().unwrap();

		let mut loaded = Graph::new();
		loaded.load_json(&text).unwrap();
		assert_eq!(loaded, g);
	}

	#[test]
	fn missing_color_is_not_serialized() {
		let g = Graph::from(GraphDocument {
			nodes: vec![],
			edges: vec![Edge {
				from: "n1".into(),
				to: "n2".into(),
				color: None,
			}],
		});
		let value = serde_json::to_value(g.to_document()).unwrap();
		assert_eq!(value["edges"][0], json!({ "from": "n1", "to": "n2" }));
	}

	proptest::proptest! {
		#[test]
		fn adjacency_is_symmetric(pairs in proptest::collection::vec((0usize..6, 0usize..6), 0..20)) {
			let mut g = Graph::new();
			for i in 0..6 {
				g.add_node(i as f64, 0.0);
			}
			for (a, b) in pairs {
				g.add_edge(&format!("n{}", a + 1), &format!("n{}", b + 1), None);
			}
			let adj = g.adjacency();
			for (id, neighbors) in &adj {
				for n in neighbors {
					proptest::prop_assert!(adj[n].contains(id));
				}
			}
		}
	}
}
