//! portfolio: single-page motion design portfolio.
//!
//! This crate provides a WASM-rendered landing page with an animated particle
//! backdrop, scroll-spy navigation, and a project gallery modal with an
//! image/video carousel.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod content;

use components::gallery_modal::{BodyScrollLock, GalleryModal, ModalController, ModalSignal};
use components::nav::Nav;
use components::particle_field::ParticleBackground;
use components::projects::ProjectGrid;
use components::sections::{About, Contact, ExperienceSection, Footer, Hero, Skills};
pub use content::{GalleryItem, PortfolioData, Project, load_portfolio_data};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Main application component.
/// Loads page content and renders every section over the particle backdrop.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let data = load_portfolio_data();
	let modal: ModalSignal = RwSignal::new(ModalController::new(BodyScrollLock));
	let PortfolioData {
		profile,
		nav,
		skills,
		projects,
		experiences,
		education,
		achievements,
		contacts,
	} = data;

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=profile.title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="portfolio min-h-screen text-slate-200 font-sans relative">
			<ParticleBackground />
			<GalleryModal modal=modal />
			<Nav links=nav brand=profile.name.clone() />
			<Hero profile=profile.clone() />
			<About profile=profile.clone() />
			<Skills skills=skills />
			<ExperienceSection
				experiences=experiences
				education=education
				achievements=achievements
			/>
			<ProjectGrid
				projects=projects
				modal=modal
				gallery_link=profile.gallery_link.clone()
			/>
			<Contact profile=profile.clone() contacts=contacts />
			<Footer name=profile.name.clone() />
		</div>
	}
}
