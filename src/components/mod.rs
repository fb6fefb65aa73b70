//! Page components.

pub mod gallery_modal;
mod listener;
pub mod nav;
pub mod particle_field;
pub mod projects;
pub mod sections;

pub use listener::WindowListener;
