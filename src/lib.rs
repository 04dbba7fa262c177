//! Small undirected graph editor for the browser, with a best-effort
//! planarity check.
//!
//! Nodes are placed, joined and dragged on a canvas; the graph round-trips
//! through a `{ "nodes": [...], "edges": [...] }` JSON document. The check in
//! [`graph::classify`] recognizes K₅ and K₃,₃ and otherwise applies the
//! `e <= 3v - 6` bound, so it can call a sparse non-planar graph planar.
//!
//! The model and classifier in [`graph`] have no browser dependencies:
//!
//! ```
//! use planarity_canvas::graph::{Graph, Verdict, classify};
//!
//! let mut g = Graph::new();
//! g.load_json(r#"{
//!     "nodes": [{"id": "n1", "x": 0, "y": 0}, {"id": "n2", "x": 50, "y": 0}, {"id": "n3", "x": 0, "y": 50}],
//!     "edges": [{"from": "n1", "to": "n2"}, {"from": "n2", "to": "n3"}, {"from": "n3", "to": "n1"}]
//! }"#)?;
//! assert_eq!(classify(&g).verdict, Verdict::Planar);
//! assert!(!g.add_edge("n2", "n1", None));
//! # Ok::<(), planarity_canvas::GraphError>(())
//! ```

use leptos::prelude::*;
use leptos_meta::{Html, Meta, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use log::{Level, info};

mod components;
pub mod config;
pub mod error;
pub mod graph;
mod pages;

pub use error::GraphError;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Routes browser logging to the console and panics to `console.error`.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("planarity-canvas {}", env!("CARGO_PKG_VERSION"));
}

/// Root view: the editor at `/`, a not-found page elsewhere.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Planarity Canvas" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
