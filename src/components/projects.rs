//! Project card grid. Clicking a card opens its gallery in the modal.

use std::sync::Arc;

use leptos::prelude::*;

use super::gallery_modal::{ModalAction, ModalSignal};
use crate::content::Project;

fn project_card(project: Arc<Project>, modal: ModalSignal) -> impl IntoView {
	let overlay_class = format!(
		"absolute inset-0 bg-gradient-to-t {} opacity-40 mix-blend-multiply group-hover:opacity-0",
		project.accent
	);
	let tools = project
		.tools
		.iter()
		.map(|tool| {
			view! {
				<span class="px-3 py-1 bg-slate-800 text-slate-300 text-xs rounded-full border border-slate-700">
					{tool.clone()}
				</span>
			}
		})
		.collect_view();
	let (title, category, description, thumbnail) = (
		project.title.clone(),
		project.category.clone(),
		project.description.clone(),
		project.thumbnail.clone(),
	);

	view! {
		<div
			class="project-card group relative bg-slate-900/90 rounded-2xl overflow-hidden border border-slate-800 hover:border-cyan-500/50 cursor-pointer"
			on:click=move |_| modal.update(|m| m.apply(ModalAction::Select(project.clone())))
		>
			<div class="h-48 w-full relative overflow-hidden">
				<img src=thumbnail alt=title.clone() class="w-full h-full object-cover" />
				<div class=overlay_class />
			</div>
			<div class="p-6">
				<div class="text-xs font-bold tracking-wider text-slate-500 uppercase mb-2">{category}</div>
				<h3 class="text-xl font-bold mb-3 group-hover:text-cyan-400">{title}</h3>
				<p class="text-slate-400 text-sm mb-6 line-clamp-3">{description}</p>
				<div class="flex flex-wrap gap-2">{tools}</div>
			</div>
		</div>
	}
}

/// "Featured Works" section listing every project as a clickable card.
#[component]
pub fn ProjectGrid(
	projects: Vec<Project>,
	modal: ModalSignal,
	#[prop(into, optional)] gallery_link: Option<String>,
) -> impl IntoView {
	let cards = projects
		.into_iter()
		.map(|project| project_card(Arc::new(project), modal))
		.collect_view();
	let external = gallery_link.filter(|href| !href.is_empty()).map(|href| {
		view! {
			<a
				href=href
				target="_blank"
				rel="noreferrer"
				class="hidden md:flex items-center gap-2 text-cyan-400 hover:text-cyan-300 font-bold mt-4 md:mt-0"
			>
				"View Behance Portfolio ↗"
			</a>
		}
	});

	view! {
		<section id="projects" class="py-24 bg-slate-950/80">
			<div class="container mx-auto px-6">
				<div class="flex flex-col md:flex-row justify-between items-end mb-12">
					<div>
						<h2 class="text-3xl md:text-5xl font-bold mb-4">
							"Featured "
							<span class="text-transparent bg-clip-text bg-gradient-to-r from-purple-400 to-pink-500">
								"Works"
							</span>
						</h2>
						<p class="text-slate-400">"Selected projects from academic and professional career."</p>
					</div>
					{external}
				</div>
				<div class="grid md:grid-cols-2 gap-8">{cards}</div>
			</div>
		</section>
	}
}
