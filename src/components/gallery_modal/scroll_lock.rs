//! Suppressing page scroll while the modal covers it.

use log::warn;

/// Something that can stop the page underneath from scrolling.
pub trait ScrollLock {
	/// Locks page scroll when `locked`, restores it otherwise.
	fn set_scroll_locked(&mut self, locked: bool);
}

/// Toggles `overflow` on `document.body`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
	fn set_scroll_locked(&mut self, locked: bool) {
		let Some(body) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.body())
		else {
			warn!("portfolio: no document body to lock scrolling on");
			return;
		};
		let overflow = if locked { "hidden" } else { "unset" };
		if let Err(e) = body.style().set_property("overflow", overflow) {
			warn!("portfolio: could not set body overflow: {:?}", e);
		}
	}
}
