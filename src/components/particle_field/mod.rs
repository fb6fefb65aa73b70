//! Animated particle backdrop.
//!
//! Renders a full-viewport canvas of drifting points with:
//! - Particle count proportional to viewport area, respawned on resize
//! - Faint lines between particles that drift close to each other
//! - Repulsion away from the mouse pointer
//! - Wraparound at the viewport edges
//!
//! # Example
//!
//! ```ignore
//! view! { <ParticleBackground /> }
//! ```

mod component;
pub mod field;
mod frame_loop;
mod render;
pub mod style;

pub use component::ParticleBackground;
pub use field::{Link, Particle, ParticleField, Pointer};
pub use frame_loop::FrameLoop;
pub use style::{Color, FieldConfig, ParticleHue};
