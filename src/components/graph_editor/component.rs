use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

use super::render;
use super::state::Interaction;
use crate::graph::{Graph, Point};

/// Canvas size in CSS pixels: explicit props win, then the parent's box.
fn css_size(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	(
		width.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_height() as f64)
				.unwrap_or(600.0)
		}),
	)
}

/// Sizes the backing store for the device pixel ratio and scales the
/// context so drawing stays in CSS pixels.
fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
	let dpr = web_sys::window()
		.map(|win| win.device_pixel_ratio())
		.unwrap_or(1.0);
	canvas.set_width((w * dpr) as u32);
	canvas.set_height((h * dpr) as u32);
	let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, client_x: i32, client_y: i32) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?;
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		client_x as f64 - rect.left(),
		client_y as f64 - rect.top(),
	))
}

/// Runs one interaction step against the graph; subscribers are only
/// notified when the graph actually changed.
fn dispatch(
	graph: RwSignal<Graph>,
	interaction: RwSignal<Interaction>,
	step: impl FnOnce(Interaction, &mut Graph) -> (Interaction, bool),
) {
	let Some(current) = interaction.try_get_untracked() else {
		return;
	};
	let next = graph.try_maybe_update(|g| {
		let (next, changed) = step(current, g);
		(changed, next)
	});
	if let Some(next) = next {
		interaction.set(next);
	}
}

/// The frame loop keeps rescheduling itself only while this holds.
fn still_mounted(mounted: StoredValue<()>) -> bool {
	mounted.try_get_value().is_some()
}

#[component]
pub fn GraphEditorCanvas(
	graph: RwSignal<Graph>,
	interaction: RwSignal<Interaction>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let size = Rc::new(Cell::new((0.0, 0.0)));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	// Disposed with the component; the frame loop stops once it is gone.
	let mounted = StoredValue::new(());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};
		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				warn!("canvas has no 2d context");
				return;
			}
		};

		let (w, h) = css_size(&canvas, width, height);
		fit_canvas(&canvas, &ctx, w, h);
		size.set((w, h));

		let (size_resize, canvas_resize, ctx_resize) = (size.clone(), canvas.clone(), ctx.clone());
		let resize = window_event_listener(leptos::ev::resize, move |_| {
			let (nw, nh) = css_size(&canvas_resize, width, height);
			fit_canvas(&canvas_resize, &ctx_resize, nw, nh);
			size_resize.set((nw, nh));
		});
		on_cleanup(move || resize.remove());

		let (size_anim, animate_inner) = (size.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if !still_mounted(mounted) {
				return;
			}
			let Some(state) = interaction.try_get_untracked() else {
				return;
			};
			let (w, h) = size_anim.get();
			graph.try_with_untracked(|g| render::render(g, &state, &ctx, w, h));
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let on_mousedown = move |ev: MouseEvent| {
		if let Some(at) = local_point(canvas_ref, ev.client_x(), ev.client_y()) {
			dispatch(graph, interaction, |s, g| s.pointer_down(g, at));
		}
	};

	let on_mousemove = move |ev: MouseEvent| {
		if let Some(at) = local_point(canvas_ref, ev.client_x(), ev.client_y()) {
			dispatch(graph, interaction, |s, g| s.pointer_move(g, at));
		}
	};

	let on_mouseup = move |_: MouseEvent| {
		interaction.update(|s| *s = std::mem::take(s).pointer_up());
	};

	let on_touchstart = move |ev: TouchEvent| {
		ev.prevent_default();
		if let Some(t) = ev.touches().get(0) {
			if let Some(at) = local_point(canvas_ref, t.client_x(), t.client_y()) {
				dispatch(graph, interaction, |s, g| s.pointer_down(g, at));
			}
		}
	};

	let on_touchmove = move |ev: TouchEvent| {
		ev.prevent_default();
		if let Some(t) = ev.touches().get(0) {
			if let Some(at) = local_point(canvas_ref, t.client_x(), t.client_y()) {
				dispatch(graph, interaction, |s, g| s.pointer_move(g, at));
			}
		}
	};

	let on_touchend = move |ev: TouchEvent| {
		ev.prevent_default();
		interaction.update(|s| *s = std::mem::take(s).pointer_up());
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:touchstart=on_touchstart
			on:touchmove=on_touchmove
			on:touchend=on_touchend
			style="display: block; width: 100%; height: 100%; touch-action: none;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn frame_loop_stops_after_owner_cleanup() {
		let owner = Owner::new();
		let mounted = owner.with(|| StoredValue::new(()));
		assert!(still_mounted(mounted));
		owner.cleanup();
		assert!(!still_mounted(mounted));
	}
}
