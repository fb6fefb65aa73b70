//! Leptos component that hosts the particle backdrop canvas.
//!
//! On mount the canvas is sized to the viewport and a field is spawned. A
//! [`FrameLoop`] then draws one frame per display refresh, while window
//! listeners track the pointer and regenerate the field on resize. Everything
//! is torn down when the component's owner is cleaned up.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};

use super::field::{ParticleField, Pointer};
use super::frame_loop::FrameLoop;
use super::render;
use super::style::FieldConfig;

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Mixes the wall clock with the host RNG; the backdrop only needs variety.
fn clock_seed() -> u64 {
	let now = js_sys::Date::now() as u64;
	let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
	now ^ (noise << 20)
}

/// Full-viewport animated backdrop of drifting, linked particles that shy
/// away from the mouse.
#[component]
pub fn ParticleBackground(#[prop(optional)] config: Option<FieldConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_loop = StoredValue::new_local(None::<FrameLoop>);
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("portfolio: no window, particle field disabled");
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			warn!("portfolio: viewport size unavailable, particle field disabled");
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			warn!("portfolio: 2d canvas context unavailable, particle field disabled");
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let rng = Rc::new(RefCell::new(SmallRng::seed_from_u64(clock_seed())));
		let field = Rc::new(RefCell::new(ParticleField::new(
			config.clone(),
			w,
			h,
			&mut *rng.borrow_mut(),
		)));
		let pointer = Rc::new(Cell::new(Pointer::default()));
		info!(
			"portfolio: particle field {}x{} with {} particles",
			w,
			h,
			field.borrow().particles.len()
		);

		let (field_anim, pointer_anim) = (field.clone(), pointer.clone());
		let mut frames = FrameLoop::start(&window, move || {
			render::draw_frame(&mut field_anim.borrow_mut(), &ctx, pointer_anim.get());
		});

		frames.listen("mousemove", move |ev: Event| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				pointer.set(Pointer {
					x: ev.client_x() as f64,
					y: ev.client_y() as f64,
				});
			}
		});

		frames.listen("resize", move |_: Event| {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			canvas.set_width(nw as u32);
			canvas.set_height(nh as u32);
			let mut field = field.borrow_mut();
			field.resize(nw, nh, &mut *rng.borrow_mut());
			debug!(
				"portfolio: particle field resized to {}x{} ({} particles)",
				nw,
				nh,
				field.particles.len()
			);
		});

		// Replacing a previous loop drops it, which tears it down
		frame_loop.set_value(Some(frames));
	});

	on_cleanup(move || {
		frame_loop.try_update_value(|frames| {
			if let Some(mut frames) = frames.take() {
				frames.teardown();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field fixed top-0 left-0 w-full h-full pointer-events-none -z-10 bg-slate-950"
		/>
	}
}
