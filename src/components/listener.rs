//! Window event listeners tied to a Rust owner.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

/// An event listener registered on the window until removed or dropped.
pub struct WindowListener {
	window: Window,
	event: &'static str,
	callback: Option<Closure<dyn FnMut(Event)>>,
}

impl WindowListener {
	/// Registers `handler` for `event`, or logs and returns `None` on failure.
	pub fn add(
		window: &Window,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Option<Self> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		if let Err(e) =
			window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
		{
			warn!("portfolio: could not listen for '{}': {:?}", event, e);
			return None;
		}
		debug!("portfolio: listening for '{}'", event);

		Some(Self {
			window: window.clone(),
			event,
			callback: Some(callback),
		})
	}

	/// Unregisters the listener. Safe to call more than once.
	pub fn remove(&mut self) {
		if let Some(cb) = self.callback.take() {
			let _ = self
				.window
				.remove_event_listener_with_callback(self.event, cb.as_ref().unchecked_ref());
			debug!("portfolio: stopped listening for '{}'", self.event);
		}
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		self.remove();
	}
}
