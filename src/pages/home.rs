use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::{JsCast, JsValue};

use crate::components::graph_editor::{EditMode, GraphEditorCanvas, Interaction};
use crate::config::RELAX_STEPS;
use crate::graph::{Graph, Point, classify, layout, presets};

/// Text and styling of the status line.
#[derive(Clone, Debug, PartialEq)]
struct Status {
	message: String,
	planar: Option<bool>,
}

impl Status {
	fn new(message: impl Into<String>, planar: Option<bool>) -> Self {
		Self {
			message: message.into(),
			planar,
		}
	}

	fn class(&self) -> &'static str {
		match self.planar {
			Some(true) => "status status-planar",
			Some(false) => "status status-non-planar",
			None => "status status-neutral",
		}
	}
}

/// Center and preset radius for the current size of the drawing area.
fn stage_frame(stage: NodeRef<leptos::html::Div>) -> (Point, f64) {
	let (w, h) = stage
		.get_untracked()
		.map(|el| (el.client_width() as f64, el.client_height() as f64))
		.unwrap_or((800.0, 600.0));
	(Point::new(w / 2.0, h / 2.0), w.min(h) / 3.0)
}

fn alert(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}

/// Saves `text` through a temporary `<a download>` link.
fn download_json(text: &str) -> Result<(), JsValue> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| JsValue::from_str("no document"))?;
	let date = String::from(js_sys::Date::new_0().to_iso_string());
	let name = format!("graph-{}.json", &date[..10.min(date.len())]);
	let uri = format!(
		"data:application/json;charset=utf-8,{}",
		String::from(js_sys::encode_uri_component(text))
	);

	let link = document.create_element("a")?;
	link.set_attribute("href", &uri)?;
	link.set_attribute("download", &name)?;
	link.dyn_into::<web_sys::HtmlElement>()
		.map_err(JsValue::from)?
		.click();
	info!("downloaded {name}");
	Ok(())
}

/// Editor page: toolbar, canvas, status line and JSON panel.
#[component]
pub fn Home() -> impl IntoView {
	let graph = RwSignal::new(Graph::new());
	let interaction = RwSignal::new(Interaction::default());
	let status = RwSignal::new(Status::new("Graph not checked", None));
	let json_text = RwSignal::new(String::new());
	let stage_ref = NodeRef::<leptos::html::Div>::new();
	// Set while the graph is being replaced from what the user is typing,
	// so the textarea is not reformatted under their cursor.
	let typing = StoredValue::new(false);

	Effect::new(move |_| {
		let text = graph.with(Graph::to_json_pretty);
		if typing.get_value() {
			typing.set_value(false);
			return;
		}
		match text {
			Ok(text) => json_text.set(text),
			Err(e) => warn!("could not serialize graph: {e}"),
		}
	});

	let set_mode = move |mode: EditMode| {
		interaction.update(|s| *s = std::mem::take(s).with_mode(mode));
	};

	let reset = move |next: Graph, message: &str, planar: Option<bool>| {
		graph.set(next);
		interaction.set(Interaction::default());
		status.set(Status::new(message, planar));
	};

	let clear = move |_| {
		let next = graph.try_update(Interaction::reset).unwrap_or_default();
		interaction.set(next);
		status.set(Status::new("Graph not checked", None));
	};

	let generate_k5 = move |_| {
		let (center, radius) = stage_frame(stage_ref);
		reset(presets::complete_k5(center, radius), "K₅ generated (non-planar)", Some(false));
	};

	let generate_k33 = move |_| {
		let (center, radius) = stage_frame(stage_ref);
		reset(presets::complete_k33(center, radius), "K₃,₃ generated (non-planar)", Some(false));
	};

	let relax = move |_| {
		let (center, _) = stage_frame(stage_ref);
		graph.update(|g| layout::relax(g, center, RELAX_STEPS));
	};

	let check = move |_| {
		let result = graph.with(classify);
		info!("planarity check: {}", result.reason);
		status.set(Status::new(result.message(), result.verdict.as_option()));
	};

	let update_from_json = move || {
		let mut next = Graph::new();
		match json_text.with_untracked(|text| next.load_json(text)) {
			Ok(()) => {
				graph.set(next);
				status.set(Status::new("Graph loaded from JSON", None));
			}
			Err(e) => {
				warn!("rejected JSON: {e}");
				alert(&format!("Error loading JSON: {e}"));
			}
		}
	};

	let load_example = move |_| match serde_json::to_string_pretty(&presets::example_document()) {
		Ok(text) => {
			json_text.set(text);
			update_from_json();
		}
		Err(e) => warn!("could not serialize example: {e}"),
	};

	let on_json_input = move |text: String| {
		let mut next = Graph::new();
		if next.load_json(&text).is_ok() {
			typing.set_value(true);
			graph.set(next);
		}
		json_text.set(text);
	};

	let download = move |_| {
		let result = graph
			.with_untracked(Graph::to_json_pretty)
			.map_err(|e| JsValue::from_str(&e.to_string()))
			.and_then(|text| download_json(&text));
		if let Err(e) = result {
			warn!("download failed: {e:?}");
		}
	};

	let mode_active = move |mode: EditMode| move || interaction.with(|s| s.mode == mode);

	view! {
		<div class="editor">
			<div class="toolbar">
				<button class:active=mode_active(EditMode::AddNode) on:click=move |_| set_mode(EditMode::AddNode)>
					"Add node"
				</button>
				<button class:active=mode_active(EditMode::AddEdge) on:click=move |_| set_mode(EditMode::AddEdge)>
					"Add edge"
				</button>
				<button on:click=clear>"Clear"</button>
				<button on:click=generate_k5>"Generate K₅"</button>
				<button on:click=generate_k33>"Generate K₃,₃"</button>
				<button on:click=relax>"Relax layout"</button>
				<button on:click=check>"Check planarity"</button>
			</div>

			<div class="stage" node_ref=stage_ref>
				<GraphEditorCanvas graph=graph interaction=interaction />
			</div>

			<div class=move || status.with(Status::class)>{move || status.with(|s| s.message.clone())}</div>

			<div class="json-panel">
				<textarea
					class="graph-json"
					spellcheck="false"
					prop:value=move || json_text.get()
					on:input=move |ev| on_json_input(event_target_value(&ev))
				/>
				<div class="json-actions">
					<button on:click=move |_| update_from_json()>"Update from JSON"</button>
					<button on:click=download>"Download JSON"</button>
					<button on:click=load_example>"Load example"</button>
				</div>
			</div>
		</div>
	}
}
