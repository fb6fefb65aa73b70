//! Fixed navigation bar with scroll-spy and a collapsible mobile menu.

use leptos::prelude::*;
use log::debug;
use web_sys::{Event, ScrollBehavior, ScrollIntoViewOptions};

use crate::components::listener::WindowListener;
use crate::content::NavLink;

/// Scroll distance after which the bar gets its solid background.
const SCROLLED_OFFSET: f64 = 50.0;
/// A section is current once its top edge sits inside this band of the viewport.
const SPY_BAND: (f64, f64) = (-100.0, 300.0);

/// Whether the page has scrolled far enough for the opaque bar.
pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLLED_OFFSET
}

/// First section whose top edge lies within the spy band.
///
/// Sections missing from the page (`None` top) are skipped.
pub fn active_section<'a>(tops: impl IntoIterator<Item = (&'a str, Option<f64>)>) -> Option<&'a str> {
	tops.into_iter()
		.find(|(_, top)| top.is_some_and(|t| t >= SPY_BAND.0 && t <= SPY_BAND.1))
		.map(|(id, _)| id)
}

/// Splits a display name into the two halves of the wordmark, uppercased.
pub fn brand_parts(name: &str) -> (String, String) {
	let mut words = name.split_whitespace();
	let first = words.next().unwrap_or_default().to_uppercase();
	let rest = words.collect::<Vec<_>>().join(" ").to_uppercase();
	(first, rest)
}

/// Smoothly scrolls the element with `id` into view.
pub fn scroll_to(id: &str) {
	let Some(element) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
	else {
		debug!("portfolio: no section '{}' to scroll to", id);
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn section_top(id: &str) -> Option<f64> {
	let element = web_sys::window()?.document()?.get_element_by_id(id)?;
	Some(element.get_bounding_client_rect().top())
}

fn nav_buttons(
	links: &[NavLink],
	active: RwSignal<String>,
	menu_open: RwSignal<bool>,
	mobile: bool,
) -> impl IntoView + use<> {
	links
		.iter()
		.map(|link| {
			let (id, id_class) = (link.id.clone(), link.id.clone());
			let class = move || {
				let color = if active.with(|a| *a == id_class) {
					"text-cyan-400"
				} else {
					"text-slate-400"
				};
				if mobile {
					format!("text-left text-lg font-medium {}", color)
				} else {
					format!("text-sm font-medium transition-colors hover:text-cyan-400 {}", color)
				}
			};
			view! {
				<button
					class=class
					on:click=move |_| {
						menu_open.set(false);
						scroll_to(&id);
					}
				>
					{link.label.clone()}
				</button>
			}
		})
		.collect_view()
}

/// Top navigation bar.
///
/// Highlights the section currently in view and turns opaque once the page
/// has scrolled past the hero.
#[component]
pub fn Nav(links: Vec<NavLink>, #[prop(into)] brand: String) -> impl IntoView {
	let initial = links.first().map(|l| l.id.clone()).unwrap_or_default();
	let active = RwSignal::new(initial);
	let scrolled = RwSignal::new(false);
	let menu_open = RwSignal::new(false);

	let scroll_listener = StoredValue::new_local(None::<WindowListener>);
	if let Some(window) = web_sys::window() {
		let ids: Vec<String> = links.iter().map(|l| l.id.clone()).collect();
		scroll_listener.set_value(WindowListener::add(&window, "scroll", move |_: Event| {
			let scroll_y = web_sys::window()
				.and_then(|w| w.scroll_y().ok())
				.unwrap_or(0.0);
			scrolled.set(is_scrolled(scroll_y));

			let tops = ids.iter().map(|id| (id.as_str(), section_top(id)));
			if let Some(current) = active_section(tops) {
				if active.with_untracked(|a| a != current) {
					active.set(current.to_string());
				}
			}
		}));
	}
	on_cleanup(move || {
		scroll_listener.try_update_value(|listener| {
			if let Some(mut listener) = listener.take() {
				listener.remove();
			}
		});
	});

	let (brand_first, brand_rest) = brand_parts(&brand);
	let home = links.first().map(|l| l.id.clone()).unwrap_or_default();
	let desktop = nav_buttons(&links, active, menu_open, false);
	let nav_class = move || {
		if scrolled.get() {
			"fixed w-full z-50 transition-all duration-300 bg-slate-950/80 backdrop-blur-md shadow-lg py-4"
		} else {
			"fixed w-full z-50 transition-all duration-300 bg-transparent py-6"
		}
	};

	view! {
		<nav class=nav_class>
			<div class="container mx-auto px-6 flex justify-between items-center">
				<div
					class="text-2xl font-bold tracking-tighter text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-500 cursor-pointer"
					on:click=move |_| {
						menu_open.set(false);
						scroll_to(&home);
					}
				>
					{brand_first}
					<span class="text-slate-100">{brand_rest}</span>
				</div>

				<div class="hidden md:flex space-x-8">{desktop}</div>

				<button
					class="md:hidden text-slate-100"
					aria-label="Toggle menu"
					on:click=move |_| menu_open.update(|open| *open = !*open)
				>
					{move || if menu_open.get() { "✕" } else { "☰" }}
				</button>
			</div>

			{move || {
				menu_open
					.get()
					.then(|| {
						view! {
							<div class="md:hidden absolute top-full left-0 w-full bg-slate-900 border-b border-slate-800 p-4 flex flex-col space-y-4">
								{nav_buttons(&links, active, menu_open, true)}
							</div>
						}
					})
			}}
		</nav>
	}
}
