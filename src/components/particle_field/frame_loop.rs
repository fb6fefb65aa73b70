//! `requestAnimationFrame` loop with deterministic teardown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

use crate::components::listener::WindowListener;

struct FrameSlot {
	callback: RefCell<Option<Closure<dyn FnMut()>>>,
	request_id: Cell<Option<i32>>,
	running: Cell<bool>,
}

impl FrameSlot {
	fn schedule(&self, window: &Window) {
		if !self.running.get() {
			return;
		}
		if let Some(ref cb) = *self.callback.borrow() {
			match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				Ok(id) => self.request_id.set(Some(id)),
				Err(e) => warn!("portfolio: requestAnimationFrame failed: {:?}", e),
			}
		}
	}
}

/// Runs a callback once per display frame and owns the window listeners
/// that feed it.
///
/// [`FrameLoop::teardown`] cancels the pending frame and removes every
/// listener; it is idempotent and also runs on drop.
pub struct FrameLoop {
	window: Window,
	slot: Rc<FrameSlot>,
	listeners: Vec<WindowListener>,
}

impl FrameLoop {
	/// Schedules `on_frame` on every animation frame until torn down.
	pub fn start(window: &Window, mut on_frame: impl FnMut() + 'static) -> Self {
		let slot = Rc::new(FrameSlot {
			callback: RefCell::new(None),
			request_id: Cell::new(None),
			running: Cell::new(true),
		});

		// Weak so the closure does not keep its own slot alive
		let (weak, window_inner) = (Rc::downgrade(&slot), window.clone());
		*slot.callback.borrow_mut() = Some(Closure::new(move || {
			let Some(slot) = weak.upgrade() else {
				return;
			};
			slot.request_id.set(None);
			if !slot.running.get() {
				return;
			}
			on_frame();
			slot.schedule(&window_inner);
		}));
		slot.schedule(window);

		Self {
			window: window.clone(),
			slot,
			listeners: Vec::new(),
		}
	}

	/// Registers a window listener that lives as long as the loop.
	pub fn listen(&mut self, event: &'static str, handler: impl FnMut(Event) + 'static) {
		if let Some(listener) = WindowListener::add(&self.window, event, handler) {
			self.listeners.push(listener);
		}
	}

	/// False once [`FrameLoop::teardown`] has run.
	pub fn is_running(&self) -> bool {
		self.slot.running.get()
	}

	/// Cancels the pending frame and removes every listener.
	pub fn teardown(&mut self) {
		let was_running = self.slot.running.replace(false);
		if let Some(id) = self.slot.request_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		for listener in &mut self.listeners {
			listener.remove();
		}
		self.listeners.clear();
		self.slot.callback.borrow_mut().take();

		if was_running {
			debug!("portfolio: frame loop stopped");
		}
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.teardown();
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use super::*;
	use wasm_bindgen_futures::JsFuture;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	async fn sleep(window: &Window, ms: i32) {
		let promise = js_sys::Promise::new(&mut |resolve, _| {
			let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
		});
		let _ = JsFuture::from(promise).await;
	}

	fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
		let count = Rc::new(Cell::new(0));
		(count.clone(), count)
	}

	#[wasm_bindgen_test]
	async fn teardown_stops_frames_and_listeners() {
		let window = web_sys::window().unwrap();
		let (frames, frames_seen) = counter();
		let (events, events_seen) = counter();

		let mut frame_loop = FrameLoop::start(&window, move || frames.set(frames.get() + 1));
		frame_loop.listen("portfolio-ping", move |_| events.set(events.get() + 1));
		assert!(frame_loop.is_running());

		sleep(&window, 250).await;
		assert!(frames_seen.get() > 0);
		window.dispatch_event(&Event::new("portfolio-ping").unwrap()).unwrap();
		assert_eq!(events_seen.get(), 1);

		frame_loop.teardown();
		frame_loop.teardown();
		assert!(!frame_loop.is_running());

		let stopped_at = frames_seen.get();
		sleep(&window, 250).await;
		assert_eq!(frames_seen.get(), stopped_at);
		window.dispatch_event(&Event::new("portfolio-ping").unwrap()).unwrap();
		assert_eq!(events_seen.get(), 1);
	}

	#[wasm_bindgen_test]
	async fn dropping_the_loop_tears_it_down() {
		let window = web_sys::window().unwrap();
		let (frames, frames_seen) = counter();

		let mut frame_loop = FrameLoop::start(&window, move || frames.set(frames.get() + 1));
		frame_loop.teardown();
		drop(frame_loop);

		sleep(&window, 250).await;
		assert_eq!(frames_seen.get(), 0);
	}
}
