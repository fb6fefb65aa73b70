//! Leptos component rendering the project gallery modal.
//!
//! The overlay covers the page while a project is selected. Clicks on the
//! dimmed backdrop close it; clicks inside the panel stay inside. A window
//! `keydown` listener maps Escape and the arrow keys onto modal actions for as
//! long as the component is mounted.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, MouseEvent};

use super::scroll_lock::BodyScrollLock;
use super::state::{ClickTarget, ModalAction, ModalController, SlideView};
use crate::components::listener::WindowListener;
use crate::content::GalleryItem;

/// Modal state shared between the project grid and the modal.
pub type ModalSignal = RwSignal<ModalController<BodyScrollLock>>;

fn click_target(ev: &MouseEvent) -> ClickTarget {
	if ev.target() == ev.current_target() {
		ClickTarget::Backdrop
	} else {
		ClickTarget::Content
	}
}

fn media_view(item: &GalleryItem, index: usize, title: &str) -> AnyView {
	let src = item.src().to_string();
	if item.is_video() {
		view! {
			<video
				src=src
				controls=true
				autoplay=true
				class="w-full h-full object-contain max-h-[70vh]"
			/>
		}
		.into_any()
	} else {
		view! {
			<img
				src=src
				alt=format!("{} slide {}", title, index + 1)
				class="w-full h-full object-contain max-h-[70vh] animate-in fade-in duration-300"
			/>
		}
		.into_any()
	}
}

/// Full-screen carousel for the selected project's gallery.
#[component]
pub fn GalleryModal(modal: ModalSignal) -> impl IntoView {
	let keys = StoredValue::new_local(None::<WindowListener>);
	if let Some(window) = web_sys::window() {
		keys.set_value(WindowListener::add(&window, "keydown", move |ev: Event| {
			if !modal.with_untracked(|m| m.is_open()) {
				return;
			}
			let Some(ev) = ev.dyn_ref::<KeyboardEvent>() else {
				return;
			};
			if let Some(action) = ModalAction::from_key(&ev.key()) {
				ev.prevent_default();
				modal.update(|m| m.apply(action));
			}
		}));
	}

	on_cleanup(move || {
		keys.try_update_value(|listener| {
			if let Some(mut listener) = listener.take() {
				listener.remove();
			}
		});
		// Never leave the page scroll-locked behind an unmounted modal
		modal.try_update_untracked(|m| m.close());
	});

	let project = Memo::new(move |_| modal.with(|m| m.state().project().cloned()));
	let slide = Memo::new(move |_| modal.with(|m| m.slide_view()));
	let show_controls = move || slide.with(|s| s.as_ref().is_some_and(|s| s.show_controls));

	let on_backdrop = move |ev: MouseEvent| {
		let target = click_target(&ev);
		modal.update(|m| m.click(target));
	};
	let on_panel = move |ev: MouseEvent| ev.stop_propagation();
	let on_close = move |ev: MouseEvent| {
		ev.stop_propagation();
		modal.update(|m| m.close());
	};
	let on_prev = move |ev: MouseEvent| {
		ev.stop_propagation();
		modal.update(|m| m.previous());
	};
	let on_next = move |ev: MouseEvent| {
		ev.stop_propagation();
		modal.update(|m| m.next());
	};

	move || {
		project.get().map(|project| {
			let title = project.title.clone();
			let media = move || {
				match slide.get() {
					Some(SlideView {
						item: Some(item),
						index,
						..
					}) => media_view(&item, index, &title),
					_ => view! {
						<div class="text-slate-500 text-sm">"No media for this project"</div>
					}
					.into_any(),
				}
			};
			let dots = move || {
				slide
					.get()
					.map(|s| s.dots())
					.unwrap_or_default()
					.into_iter()
					.map(|dot| {
						let class = if dot.active {
							"h-2 rounded-full transition-all bg-cyan-500 w-6"
						} else {
							"w-2 h-2 rounded-full transition-all bg-white/50"
						};
						view! { <div class=class /> }
					})
					.collect_view()
			};
			let indicator = move || {
				slide.get().and_then(|s| s.indicator()).map(|text| {
					view! { <div class="text-slate-500 text-sm font-mono">{text}</div> }
				})
			};
			let tools = project
				.tools
				.iter()
				.map(|tool| {
					view! {
						<span class="px-3 py-1 bg-slate-800 text-slate-300 text-sm rounded-full border border-slate-700">
							{tool.clone()}
						</span>
					}
				})
				.collect_view();

			view! {
				<div
					class="gallery-modal fixed inset-0 z-[60] flex items-center justify-center p-4 bg-black/90 backdrop-blur-md"
					on:click=on_backdrop
				>
					<div
						class="gallery-panel bg-slate-900 border border-slate-700 rounded-2xl max-w-5xl w-full max-h-[90vh] overflow-y-auto relative flex flex-col"
						on:click=on_panel
					>
						<button
							class="absolute top-4 right-4 z-20 p-2 bg-black/50 hover:bg-red-500/80 rounded-full text-white"
							aria-label="Close"
							on:click=on_close
						>
							"✕"
						</button>

						<div class="w-full bg-black relative flex items-center justify-center min-h-[40vh] md:min-h-[60vh] overflow-hidden group">
							{move || {
								show_controls()
									.then(|| {
										view! {
											<button
												class="absolute left-4 z-10 p-3 bg-black/40 hover:bg-cyan-500 text-white rounded-full"
												aria-label="Previous slide"
												on:click=on_prev
											>
												"‹"
											</button>
										}
									})
							}}
							{media}
							{move || {
								show_controls()
									.then(|| {
										view! {
											<button
												class="absolute right-4 z-10 p-3 bg-black/40 hover:bg-cyan-500 text-white rounded-full"
												aria-label="Next slide"
												on:click=on_next
											>
												"›"
											</button>
										}
									})
							}}
							<div class="absolute bottom-4 left-1/2 transform -translate-x-1/2 flex gap-2">
								{dots}
							</div>
						</div>

						<div class="p-8 bg-slate-900">
							<div class="flex justify-between items-start mb-4">
								<div>
									<div class="text-cyan-400 text-sm font-bold tracking-wider uppercase mb-1">
										{project.category.clone()}
									</div>
									<h3 class="text-3xl font-bold text-slate-100">{project.title.clone()}</h3>
								</div>
								{indicator}
							</div>
							<p class="text-slate-300 leading-relaxed mb-6 text-lg">
								{project.description.clone()}
							</p>
							<div class="flex flex-wrap gap-2 mb-4">{tools}</div>
						</div>
					</div>
				</div>
			}
		})
	}
}
