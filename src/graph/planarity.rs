use std::fmt;

use log::debug;

use super::bipartite::is_k33;
use super::model::Graph;

/// Outcome of [`classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
	/// Drawable without crossings, as far as the heuristic can tell.
	Planar,
	/// K₅, K₃,₃, or too many edges for a planar graph.
	NonPlanar,
	/// Nothing to classify.
	Indeterminate,
}

impl Verdict {
	/// `Some(true)` for planar, `Some(false)` for non-planar, `None` otherwise.
	pub fn as_option(self) -> Option<bool> {
		match self {
			Verdict::Planar => Some(true),
			Verdict::NonPlanar => Some(false),
			Verdict::Indeterminate => None,
		}
	}
}

/// Which rule produced the verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
	/// No nodes.
	EmptyGraph,
	/// A single node.
	Trivial,
	/// Two nodes, at most one edge.
	TwoNodes,
	/// Five nodes with all ten edges.
	CompleteK5,
	/// Six nodes, nine edges, two fully joined groups of three.
	CompleteK33,
	/// `e <= 3v - 6` holds.
	EdgeBound,
	/// `e > 3v - 6`.
	LikelyNonPlanar,
}

impl fmt::Display for Reason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Reason::EmptyGraph => "Empty graph",
			Reason::Trivial => "Trivial graph (planar)",
			Reason::TwoNodes => "Two-node graph (planar)",
			Reason::CompleteK5 => "The graph is K₅ (non-planar)",
			Reason::CompleteK33 => "The graph is K₃,₃ (non-planar)",
			Reason::EdgeBound => "The graph is planar",
			Reason::LikelyNonPlanar => "The graph is probably not planar",
		})
	}
}

/// Verdict plus the rule that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
	/// Planar, non-planar or indeterminate.
	pub verdict: Verdict,
	/// Rule that decided.
	pub reason: Reason,
}

impl Classification {
	fn new(verdict: Verdict, reason: Reason) -> Self {
		Self { verdict, reason }
	}

	/// Status line text for the user.
	pub fn message(&self) -> String {
		self.reason.to_string()
	}
}

/// Heuristic planarity check.
///
/// Recognizes K₅ and K₃,₃ only at exactly their vertex/edge counts, then
/// falls back to the edge bound `e <= 3v - 6`. The bound is necessary for
/// planarity but not sufficient, so sparse non-planar graphs are reported as
/// planar.
///
/// ```
/// use planarity_canvas::graph::{Graph, Reason, Verdict, classify};
///
/// let mut g = Graph::new();
/// for i in 0..5 {
///     g.add_node(i as f64 * 30.0, 0.0);
/// }
/// for a in 1..=5 {
///     for b in a + 1..=5 {
///         g.add_edge(&format!("n{a}"), &format!("n{b}"), None);
///     }
/// }
/// let c = classify(&g);
/// assert_eq!(c.verdict, Verdict::NonPlanar);
/// assert_eq!(c.reason, Reason::CompleteK5);
/// ```
pub fn classify(graph: &Graph) -> Classification {
	let (v, e) = (graph.node_count(), graph.edge_count());

	let result = match (v, e) {
		(0, _) => Classification::new(Verdict::Indeterminate, Reason::EmptyGraph),
		(1, _) => Classification::new(Verdict::Planar, Reason::Trivial),
		(2, 0..=1) => Classification::new(Verdict::Planar, Reason::TwoNodes),
		(5, 10) => Classification::new(Verdict::NonPlanar, Reason::CompleteK5),
		(6, 9) if is_k33(graph) => Classification::new(Verdict::NonPlanar, Reason::CompleteK33),
		// v >= 2 here, so 3v - 6 cannot go below zero
		_ if e <= 3 * v - 6 => Classification::new(Verdict::Planar, Reason::EdgeBound),
		_ => Classification::new(Verdict::NonPlanar, Reason::LikelyNonPlanar),
	};
	debug!("classified v={v} e={e}: {:?}", result.reason);
	result
}
