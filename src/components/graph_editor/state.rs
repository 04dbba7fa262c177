use log::debug;

use crate::graph::{Graph, Point};

/// What a press on the canvas does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
	#[default]
	Select,
	AddNode,
	AddEdge,
}

/// Pointer-driven editing state, kept apart from the graph itself.
///
/// Handlers take the state by value and hand back the next one together with
/// whether the graph was modified.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interaction {
	pub mode: EditMode,
	pub selected: Option<String>,
	pub edge_start: Option<String>,
	pub dragging: bool,
	/// Last pointer position while an edge is being drawn.
	pub pointer: Option<Point>,
}

impl Interaction {
	/// Empties the graph and returns the idle state that goes with it.
	pub fn reset(graph: &mut Graph) -> Self {
		graph.clear();
		Self::default()
	}

	pub fn with_mode(self, mode: EditMode) -> Self {
		let edge_start = if mode == EditMode::AddEdge {
			None
		} else {
			self.edge_start
		};
		Self {
			mode,
			edge_start,
			pointer: None,
			..self
		}
	}

	pub fn pointer_down(mut self, graph: &mut Graph, at: Point) -> (Self, bool) {
		let hit = graph.node_at(at).map(|n| n.id.clone());
		let changed = match self.mode {
			EditMode::AddNode => {
				graph.add_node(at.x, at.y);
				self.mode = EditMode::Select;
				true
			}
			EditMode::AddEdge => match (hit, self.edge_start.take()) {
				(Some(id), None) => {
					self.edge_start = Some(id);
					false
				}
				(Some(id), Some(start)) if id != start => {
					graph.add_edge(&start, &id, None);
					self.pointer = None;
					true
				}
				(_, start) => {
					self.edge_start = start;
					false
				}
			},
			EditMode::Select => {
				self.dragging = hit.is_some();
				self.selected = hit;
				false
			}
		};
		debug!("pointer down {:?} -> {:?}", at, self.mode);
		(self, changed)
	}

	pub fn pointer_move(mut self, graph: &mut Graph, at: Point) -> (Self, bool) {
		if self.dragging {
			if let Some(id) = &self.selected {
				let moved = graph.move_node(id, at.x, at.y);
				return (self, moved);
			}
		} else if self.mode == EditMode::AddEdge && self.edge_start.is_some() {
			self.pointer = Some(at);
		}
		(self, false)
	}

	pub fn pointer_up(self) -> Self {
		Self {
			dragging: false,
			selected: None,
			..self
		}
	}

	/// Drawn in the highlight color.
	pub fn highlighted(&self, id: &str) -> bool {
		self.selected.as_deref() == Some(id) || self.edge_start.as_deref() == Some(id)
	}

	/// Start and end of the rubber-band edge, if one is being drawn.
	pub fn pending_edge(&self, graph: &Graph) -> Option<(Point, Point)> {
		if self.mode != EditMode::AddEdge {
			return None;
		}
		let start = graph.node(self.edge_start.as_deref()?)?;
		Some((Point::new(start.x, start.y), self.pointer?))
	}
}
