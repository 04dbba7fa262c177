//! In-memory graph model and the heuristic planarity classifier built on it.

mod bipartite;
pub mod layout;
mod model;
mod planarity;
pub mod presets;

pub use bipartite::is_k33;
pub use model::{Edge, Graph, GraphDocument, Node, Point};
pub use planarity::{Classification, Reason, Verdict, classify};
