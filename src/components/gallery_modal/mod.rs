//! Project gallery modal.
//!
//! Shows one project's media as a cyclic carousel over a dimmed backdrop:
//! - Previous/next navigation that wraps at both ends
//! - Videos play with controls and autoplay, images render directly
//! - Dismissal from the close button, the backdrop, or Escape
//! - Page scrolling suppressed while open
//!
//! # Example
//!
//! ```ignore
//! let modal = RwSignal::new(ModalController::new(BodyScrollLock));
//! view! { <GalleryModal modal=modal /> }
//! ```

mod component;
mod scroll_lock;
pub mod state;

pub use component::{GalleryModal, ModalSignal};
pub use scroll_lock::{BodyScrollLock, ScrollLock};
pub use state::{ClickTarget, Dot, ModalAction, ModalController, ModalState, SlideView};
