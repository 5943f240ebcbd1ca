use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, PointerEvent, Window,
};

use super::config::EditorConfig;
use super::geometry::Point;
use super::input::{Modifiers, PointerButton};
use super::render;
use super::state::EditorState;
use super::types::ShapeStamp;

type SharedState = Rc<RefCell<Option<EditorState>>>;

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Pointer position relative to the canvas' top-left corner.
fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

#[component]
pub fn GraphEditorCanvas(
	/// Geometry template for new nodes; changing it affects only nodes
	/// created afterwards.
	#[prop(into)]
	stamp: Signal<ShapeStamp>,
	#[prop(optional)] config: EditorConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());
	let pending_config = RefCell::new(Some(config));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("graph editor: no window available");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			error!("graph editor: canvas has no 2d context");
			return;
		};
		let Some(config) = pending_config.borrow_mut().take() else {
			return;
		};
		*state_init.borrow_mut() = Some(EditorState::new(config, stamp.get_untracked(), w, h));

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.take_redraw() {
					render::render(s, &ctx);
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if window
				.request_animation_frame(cb.as_ref().unchecked_ref())
				.is_err()
			{
				warn!("graph editor: requestAnimationFrame rejected");
			}
		}
	});

	let state_stamp = state.clone();
	Effect::new(move |_| {
		let stamp = stamp.get();
		if let Some(ref mut s) = *state_stamp.borrow_mut() {
			s.set_shape_stamp(stamp);
		}
	});

	// The canvas captures the primary pointer on press, so moves and the
	// final release keep arriving while the pointer is over the overlay or
	// outside the canvas.
	let state_pd = state.clone();
	let on_pointerdown = move |ev: PointerEvent| {
		let Some(p) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		let button = PointerButton::from_dom(ev.button());
		if let Some(canvas) = canvas_ref.get() {
			let _ = canvas.focus();
			if button == PointerButton::Primary
				&& canvas.set_pointer_capture(ev.pointer_id()).is_err()
			{
				warn!("graph editor: pointer capture refused");
			}
		}
		if let Some(ref mut s) = *state_pd.borrow_mut() {
			s.press(p, button, Modifiers::from_mouse_event(&ev));
		}
	};

	let state_pm = state.clone();
	let on_pointermove = move |ev: PointerEvent| {
		// only drags matter; plain hovering changes nothing
		if ev.buttons() & 1 == 0 {
			return;
		}
		let Some(p) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_pm.borrow_mut() {
			s.drag(p);
		}
	};

	let state_pu = state.clone();
	let on_pointerup = move |ev: PointerEvent| {
		if PointerButton::from_dom(ev.button()) != PointerButton::Primary {
			return;
		}
		let Some(p) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_pu.borrow_mut() {
			s.release(p);
		}
	};

	let state_pc = state.clone();
	let on_pointercancel = move |ev: PointerEvent| {
		let Some(p) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_pc.borrow_mut() {
			s.release(p);
		}
	};

	let state_cm = state.clone();
	let on_contextmenu = move |ev: MouseEvent| {
		ev.prevent_default();
		let Some(p) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_cm.borrow_mut() {
			s.secondary_click(p);
		}
	};

	let state_kd = state.clone();
	let on_keydown = move |ev: KeyboardEvent| {
		if ev.repeat() {
			return;
		}
		if let Some(ref mut s) = *state_kd.borrow_mut() {
			if s.key_down(&ev.key()) {
				ev.prevent_default();
			}
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-editor-canvas"
			tabindex="0"
			on:pointerdown=on_pointerdown
			on:pointermove=on_pointermove
			on:pointerup=on_pointerup
			on:pointercancel=on_pointercancel
			on:contextmenu=on_contextmenu
			on:keydown=on_keydown
			style="display: block; cursor: crosshair; outline: none; touch-action: none;"
		/>
	}
}
