use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::Interaction;
use crate::config::{
	CANVAS_BG, EDGE_COLOR, EDGE_WIDTH, NODE_COLOR, NODE_SELECTED_COLOR, NODE_STROKE_COLOR,
	NODE_TEXT_SIZE, TEMP_EDGE_COLOR, TEXT_COLOR,
};
use crate::graph::{Graph, Point};

/// Paints one frame. `width`/`height` are in CSS pixels.
pub fn render(
	graph: &Graph,
	interaction: &Interaction,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
) {
	ctx.clear_rect(0.0, 0.0, width, height);
	ctx.set_fill_style_str(CANVAS_BG);
	ctx.fill_rect(0.0, 0.0, width, height);
	draw_edges(graph, ctx);
	draw_nodes(graph, interaction, ctx);
	if let Some((from, to)) = interaction.pending_edge(graph) {
		draw_pending_edge(ctx, from, to);
	}
}

fn draw_edges(graph: &Graph, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(EDGE_WIDTH);
	for edge in graph.edges() {
		// Dangling endpoints can come from pasted JSON.
		let (Some(a), Some(b)) = (graph.node(&edge.from), graph.node(&edge.to)) else {
			continue;
		};
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.set_stroke_style_str(edge.color.as_deref().unwrap_or(EDGE_COLOR));
		ctx.stroke();
	}
}

fn draw_nodes(graph: &Graph, interaction: &Interaction, ctx: &CanvasRenderingContext2d) {
	ctx.set_font(&format!("{NODE_TEXT_SIZE} Roboto, sans-serif"));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for node in graph.nodes() {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, node.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if interaction.highlighted(&node.id) {
			NODE_SELECTED_COLOR
		} else {
			NODE_COLOR
		});
		ctx.fill();
		ctx.set_stroke_style_str(NODE_STROKE_COLOR);
		ctx.set_line_width(1.0);
		ctx.stroke();

		ctx.set_fill_style_str(TEXT_COLOR);
		let _ = ctx.fill_text(&node.id, node.x, node.y);
	}
}

fn draw_pending_edge(ctx: &CanvasRenderingContext2d, from: Point, to: Point) {
	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.line_to(to.x, to.y);
	ctx.set_stroke_style_str(TEMP_EDGE_COLOR);
	ctx.set_line_width(EDGE_WIDTH);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(5.0),
		&JsValue::from_f64(5.0),
	));
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}
