//! Gallery modal state machine and its render model.
//!
//! The modal is either closed or open on one project at one slide. Every
//! transition goes through [`ModalController`], which also keeps the page
//! scroll lock in step with the state: held while open, released when closed.

use std::sync::Arc;

use log::debug;

use super::scroll_lock::ScrollLock;
use crate::content::{GalleryItem, Project};

/// Which project (if any) is shown, and at which slide.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
	/// Nothing selected; the page scrolls normally.
	#[default]
	Closed,
	/// Showing `project` at slide `index`.
	Open {
		/// Selected project.
		project: Arc<Project>,
		/// Slide index, `< gallery.len()` unless the gallery is empty.
		index: usize,
	},
}

impl ModalState {
	/// Whether a project is selected.
	pub fn is_open(&self) -> bool {
		matches!(self, ModalState::Open { .. })
	}

	/// Selected project, if open.
	pub fn project(&self) -> Option<&Arc<Project>> {
		match self {
			ModalState::Open { project, .. } => Some(project),
			ModalState::Closed => None,
		}
	}

	/// Current slide index, if open.
	pub fn index(&self) -> Option<usize> {
		match self {
			ModalState::Open { index, .. } => Some(*index),
			ModalState::Closed => None,
		}
	}

	/// The gallery item on screen; `None` when closed or the gallery is empty.
	pub fn current_item(&self) -> Option<&GalleryItem> {
		match self {
			ModalState::Open { project, index } => project.gallery.get(*index),
			ModalState::Closed => None,
		}
	}
}

/// Something the user asked the modal to do.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalAction {
	/// Open a project at its first slide.
	Select(Arc<Project>),
	/// Next slide, wrapping to the first.
	Next,
	/// Previous slide, wrapping to the last.
	Previous,
	/// Dismiss the modal.
	Close,
}

impl ModalAction {
	/// Keyboard shortcuts available while the modal is open.
	pub fn from_key(key: &str) -> Option<Self> {
		match key {
			"Escape" => Some(ModalAction::Close),
			"ArrowRight" => Some(ModalAction::Next),
			"ArrowLeft" => Some(ModalAction::Previous),
			_ => None,
		}
	}
}

/// Where a click inside the modal landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
	/// The dimmed overlay around the panel.
	Backdrop,
	/// Anything inside the content panel.
	Content,
}

/// One position indicator dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dot {
	/// Slide this dot stands for.
	pub index: usize,
	/// Whether that slide is on screen.
	pub active: bool,
}

/// What the modal should draw for the current state.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideView {
	/// Media on screen; `None` for an empty gallery.
	pub item: Option<GalleryItem>,
	/// Zero-based slide index.
	pub index: usize,
	/// Gallery length.
	pub len: usize,
	/// Prev/next buttons, dots and the page counter.
	pub show_controls: bool,
}

impl SlideView {
	/// Render model for `state`; `None` when closed.
	pub fn of(state: &ModalState) -> Option<Self> {
		let ModalState::Open { project, index } = state else {
			return None;
		};
		let len = project.gallery.len();
		Some(Self {
			item: project.gallery.get(*index).cloned(),
			index: *index,
			len,
			show_controls: len > 1,
		})
	}

	/// `"2 / 3"` style counter, only for multi-item galleries.
	pub fn indicator(&self) -> Option<String> {
		self.show_controls
			.then(|| format!("{} / {}", self.index + 1, self.len))
	}

	/// One dot per slide, only for multi-item galleries.
	pub fn dots(&self) -> Vec<Dot> {
		if !self.show_controls {
			return Vec::new();
		}
		(0..self.len)
			.map(|index| Dot {
				index,
				active: index == self.index,
			})
			.collect()
	}

	/// Videos get playback controls and try to autoplay.
	pub fn autoplay(&self) -> bool {
		self.item.as_ref().is_some_and(GalleryItem::is_video)
	}
}

/// Owns the modal state and the page scroll lock.
#[derive(Clone, Debug, Default)]
pub struct ModalController<L: ScrollLock> {
	state: ModalState,
	lock: L,
	holds_lock: bool,
}

impl<L: ScrollLock> ModalController<L> {
	/// Closed modal that has not touched the lock yet.
	pub fn new(lock: L) -> Self {
		Self {
			state: ModalState::Closed,
			lock,
			holds_lock: false,
		}
	}

	/// Current state.
	pub fn state(&self) -> &ModalState {
		&self.state
	}

	/// The scroll lock this controller drives.
	pub fn lock(&self) -> &L {
		&self.lock
	}

	/// Whether a project is selected.
	pub fn is_open(&self) -> bool {
		self.state.is_open()
	}

	/// Render model for the current state.
	pub fn slide_view(&self) -> Option<SlideView> {
		SlideView::of(&self.state)
	}

	/// Opens `project` at its first slide, replacing whatever was shown.
	pub fn select(&mut self, project: Arc<Project>) {
		debug!("portfolio: opening gallery for '{}'", project.title);
		self.state = ModalState::Open { project, index: 0 };
		self.sync_scroll_lock();
	}

	/// Advances one slide, wrapping past the end.
	pub fn next(&mut self) {
		self.advance(|index, len| (index + 1) % len);
	}

	/// Goes back one slide, wrapping before the start.
	pub fn previous(&mut self) {
		self.advance(|index, len| (index + len - 1) % len);
	}

	/// Closes the modal and releases the scroll lock. No-op when closed.
	pub fn close(&mut self) {
		if self.state.is_open() {
			debug!("portfolio: closing gallery");
		}
		self.state = ModalState::Closed;
		self.sync_scroll_lock();
	}

	/// Only clicks on the backdrop dismiss the modal.
	pub fn click(&mut self, target: ClickTarget) {
		match target {
			ClickTarget::Backdrop => self.close(),
			ClickTarget::Content => {}
		}
	}

	/// Dispatches an action to the matching transition.
	pub fn apply(&mut self, action: ModalAction) {
		match action {
			ModalAction::Select(project) => self.select(project),
			ModalAction::Next => self.next(),
			ModalAction::Previous => self.previous(),
			ModalAction::Close => self.close(),
		}
	}

	fn advance(&mut self, step: impl FnOnce(usize, usize) -> usize) {
		if let ModalState::Open { project, index } = &mut self.state {
			let len = project.gallery.len();
			if len > 0 {
				*index = step(*index, len);
			}
		}
	}

	fn sync_scroll_lock(&mut self) {
		let want = self.state.is_open();
		if want != self.holds_lock {
			self.lock.set_scroll_locked(want);
			self.holds_lock = want;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Records every lock toggle.
	#[derive(Clone, Debug, Default)]
	struct RecordingLock {
		locked: bool,
		calls: Vec<bool>,
	}

	impl ScrollLock for RecordingLock {
		fn set_scroll_locked(&mut self, locked: bool) {
			self.locked = locked;
			self.calls.push(locked);
		}
	}

	fn project(title: &str, gallery: Vec<GalleryItem>) -> Arc<Project> {
		Arc::new(Project {
			title: title.into(),
			category: "Motion Graphics".into(),
			description: "A project".into(),
			tools: vec!["After Effects".into()],
			accent: String::new(),
			thumbnail: "/thumb.png".into(),
			gallery,
		})
	}

	fn image(src: &str) -> GalleryItem {
		GalleryItem::Image { src: src.into() }
	}

	fn video(src: &str) -> GalleryItem {
		GalleryItem::Video { src: src.into() }
	}

	fn controller() -> ModalController<RecordingLock> {
		ModalController::new(RecordingLock::default())
	}

	#[test]
	fn starts_closed_and_unlocked() {
		let modal = controller();
		assert_eq!(*modal.state(), ModalState::Closed);
		assert!(modal.slide_view().is_none());
		assert!(modal.lock().calls.is_empty());
	}

	#[test]
	fn navigation_wraps_both_ways() {
		let mut modal = controller();
		modal.select(project("Reel", vec![image("a"), image("b"), image("c")]));

		for (expected_next, expected_prev) in [(1, 0), (2, 1), (0, 2)] {
			modal.next();
			assert_eq!(modal.state().index(), Some(expected_next));
			modal.previous();
			assert_eq!(modal.state().index(), Some(expected_prev));
			modal.next();
		}

		let mut modal = controller();
		modal.select(project("Reel", vec![image("a"), image("b"), image("c")]));
		modal.previous();
		assert_eq!(modal.state().index(), Some(2));
	}

	#[test]
	fn single_item_gallery_stays_put() {
		let mut modal = controller();
		modal.select(project("Solo", vec![image("only")]));
		modal.next();
		assert_eq!(modal.state().index(), Some(0));
		modal.previous();
		assert_eq!(modal.state().index(), Some(0));

		let view = modal.slide_view().unwrap();
		assert!(!view.show_controls);
		assert!(view.indicator().is_none());
		assert!(view.dots().is_empty());
	}

	#[test]
	fn selecting_resets_the_slide() {
		let mut modal = controller();
		let a = project("A", vec![image("a1"), image("a2"), image("a3")]);
		let b = project("B", vec![image("b1"), image("b2")]);

		modal.select(a.clone());
		modal.next();
		modal.next();
		assert_eq!(modal.state().index(), Some(2));

		modal.select(b.clone());
		assert_eq!(modal.state().index(), Some(0));
		assert_eq!(modal.state().project(), Some(&b));

		modal.next();
		modal.select(b);
		assert_eq!(modal.state().index(), Some(0));
	}

	#[test]
	fn navigation_while_closed_is_inert() {
		let mut modal = controller();
		modal.next();
		modal.previous();
		assert_eq!(*modal.state(), ModalState::Closed);
		assert!(modal.lock().calls.is_empty());
	}

	#[test]
	fn empty_gallery_opens_without_media() {
		let mut modal = controller();
		modal.select(project("Empty", Vec::new()));
		modal.next();
		modal.previous();

		assert_eq!(modal.state().index(), Some(0));
		assert!(modal.state().current_item().is_none());
		let view = modal.slide_view().unwrap();
		assert!(view.item.is_none());
		assert!(!view.show_controls && !view.autoplay());
		assert!(view.indicator().is_none());
	}

	#[test]
	fn scroll_lock_follows_open_state() {
		let mut modal = controller();
		modal.select(project("A", vec![image("a")]));
		assert!(modal.lock().locked);

		modal.close();
		assert!(!modal.lock().locked);

		modal.select(project("B", vec![image("b")]));
		assert!(modal.lock().locked);

		modal.click(ClickTarget::Backdrop);
		assert!(!modal.lock().locked);
		assert_eq!(modal.lock().calls, vec![true, false, true, false]);
	}

	#[test]
	fn lock_toggles_only_on_change() {
		let mut modal = controller();
		modal.close();
		modal.select(project("A", vec![image("a")]));
		modal.select(project("B", vec![image("b")]));
		modal.next();
		modal.close();
		modal.close();
		assert_eq!(modal.lock().calls, vec![true, false]);
	}

	#[test]
	fn content_clicks_do_not_dismiss() {
		let mut modal = controller();
		modal.select(project("A", vec![image("a"), image("b")]));
		modal.next();
		modal.click(ClickTarget::Content);

		assert!(modal.is_open());
		assert_eq!(modal.state().index(), Some(1));
		assert!(modal.lock().locked);
	}

	#[test]
	fn keyboard_shortcuts() {
		assert_eq!(ModalAction::from_key("Escape"), Some(ModalAction::Close));
		assert_eq!(ModalAction::from_key("ArrowRight"), Some(ModalAction::Next));
		assert_eq!(ModalAction::from_key("ArrowLeft"), Some(ModalAction::Previous));
		assert_eq!(ModalAction::from_key("Enter"), None);

		let mut modal = controller();
		modal.apply(ModalAction::Select(project("A", vec![image("a"), image("b")])));
		for key in ["ArrowRight", "ArrowRight", "ArrowLeft", "Escape"] {
			if let Some(action) = ModalAction::from_key(key) {
				modal.apply(action);
			}
		}
		assert!(!modal.is_open());
		assert!(!modal.lock().locked);
	}

	#[test]
	fn mixed_gallery_walkthrough() {
		let mut modal = controller();
		modal.select(project(
			"Showreel",
			vec![image("img1"), video("video1"), image("img2")],
		));

		let view = modal.slide_view().unwrap();
		assert_eq!(view.item, Some(image("img1")));
		assert!(!view.autoplay());
		assert_eq!(view.indicator().as_deref(), Some("1 / 3"));

		modal.next();
		let view = modal.slide_view().unwrap();
		assert_eq!(view.item, Some(video("video1")));
		assert!(view.autoplay());
		assert_eq!(
			view.dots(),
			vec![
				Dot { index: 0, active: false },
				Dot { index: 1, active: true },
				Dot { index: 2, active: false },
			]
		);

		modal.next();
		assert_eq!(modal.state().current_item(), Some(&image("img2")));
		modal.next();
		assert_eq!(modal.state().index(), Some(0));
		modal.previous();
		assert_eq!(modal.state().index(), Some(2));
		assert_eq!(modal.slide_view().unwrap().indicator().as_deref(), Some("3 / 3"));
	}
}
