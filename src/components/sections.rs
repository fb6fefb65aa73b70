//! Static page sections: hero, about, skills, experience, contact, footer.

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlImageElement};

use super::nav::scroll_to;
use crate::content::{Achievement, ContactLink, Education, Experience, Profile, Skill};

/// File name offered when downloading the resume.
pub fn download_name(path: &str) -> &str {
	path.rsplit('/').next().unwrap_or(path)
}

/// Splits the headline into the words before, at, and after the highlight.
pub fn headline_parts(words: &[String]) -> (String, String, String) {
	match words {
		[] => Default::default(),
		[only] => (String::new(), only.clone(), String::new()),
		[first, highlight, rest @ ..] => (first.clone(), highlight.clone(), rest.join(" ")),
	}
}

/// Full-height intro with the highlighted headline and call-to-action buttons.
#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
	let (lead, highlight, tail) = headline_parts(&profile.headline);

	view! {
		<section id="home" class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20">
			<div class="container mx-auto px-6 relative z-10 text-center">
				<div class="inline-block mb-4 px-4 py-1.5 rounded-full border border-cyan-500/30 bg-cyan-950/40 text-cyan-400 text-sm font-semibold tracking-wider">
					{profile.availability}
				</div>
				<h1 class="text-5xl md:text-7xl lg:text-8xl font-bold tracking-tight mb-6 leading-tight">
					{lead}
					" "
					<span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-600">
						{highlight}
					</span>
					<br />
					{tail}
				</h1>
				<p class="text-xl md:text-2xl text-slate-300 max-w-2xl mx-auto mb-10 leading-relaxed">
					{profile.tagline}
				</p>
				<div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
					<button
						class="px-8 py-4 bg-cyan-500 hover:bg-cyan-600 text-slate-900 font-bold rounded-full"
						on:click=move |_| scroll_to("projects")
					>
						"View My Work ↓"
					</button>
					<button
						class="px-8 py-4 border border-slate-700 bg-slate-900/50 hover:border-cyan-500 hover:text-cyan-400 text-slate-300 font-bold rounded-full"
						on:click=move |_| scroll_to("contact")
					>
						"Contact Me ✉"
					</button>
				</div>
			</div>
		</section>
	}
}

/// Photo, bio paragraphs and the stats grid.
///
/// Swaps in `photo_fallback` once if the photo fails to load.
#[component]
pub fn About(profile: Profile) -> impl IntoView {
	let fallback = profile.photo_fallback.clone();
	let mut fell_back = false;
	let mut on_photo_error = move |target: Option<EventTarget>| {
		if fell_back || fallback.is_empty() {
			return;
		}
		let Some(img) = target.and_then(|t| t.dyn_into::<HtmlImageElement>().ok()) else {
			return;
		};
		warn!("portfolio: profile photo failed to load, using placeholder");
		fell_back = true;
		img.set_src(&fallback);
	};

	let paragraphs = profile
		.about
		.into_iter()
		.map(|text| view! { <p>{text}</p> })
		.collect_view();
	let stats = profile
		.stats
		.into_iter()
		.map(|stat| {
			view! {
				<div class="p-4 bg-slate-800/50 rounded-xl border border-slate-700">
					<h3 class="text-2xl font-bold text-cyan-400 mb-1">{stat.value}</h3>
					<p class="text-sm text-slate-500">{stat.label}</p>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="about" class="py-24 bg-slate-950/80">
			<div class="container mx-auto px-6">
				<div class="flex flex-col md:flex-row gap-16 items-center">
					<div class="md:w-1/2">
						<div class="relative aspect-square rounded-2xl overflow-hidden bg-slate-900/90 border border-slate-700">
							<img
								src=profile.photo
								alt=profile.name
								class="w-full h-full object-cover"
								on:error=move |ev| on_photo_error(ev.target())
							/>
						</div>
					</div>
					<div class="md:w-1/2">
						<h2 class="text-3xl md:text-4xl font-bold mb-6 text-slate-100">"About Me"</h2>
						<div class="space-y-4 text-slate-300 text-lg leading-relaxed">{paragraphs}</div>
						<div class="mt-8 grid grid-cols-2 gap-4">{stats}</div>
					</div>
				</div>
			</div>
		</section>
	}
}

/// Skill cards with proficiency bars.
#[component]
pub fn Skills(skills: Vec<Skill>) -> impl IntoView {
	let cards = skills
		.into_iter()
		.map(|skill| {
			let bar_class = format!("h-full bg-current opacity-80 {}", skill.color);
			let bar_style = format!("width: {}%", skill.percent.min(100));
			view! {
				<div class="group p-6 bg-slate-900/80 rounded-2xl border border-slate-800 hover:border-cyan-500/50">
					<h3 class="text-xl font-bold mb-2">{skill.title}</h3>
					<p class="text-slate-500 text-sm mb-4">{skill.summary}</p>
					<div class="w-full bg-slate-800 h-2 rounded-full overflow-hidden">
						<div class=bar_class style=bar_style />
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="skills" class="py-24 bg-transparent relative">
			<div class="container mx-auto px-6">
				<div class="text-center mb-16">
					<h2 class="text-3xl md:text-5xl font-bold mb-4">
						"Technical " <span class="text-cyan-400">"Arsenal"</span>
					</h2>
					<p class="text-slate-400 max-w-xl mx-auto">
						"My proficiency across various tools and disciplines within the creative industry."
					</p>
				</div>
				<div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">{cards}</div>
			</div>
		</section>
	}
}

fn timeline_entry(exp: Experience) -> impl IntoView {
	let marker = if exp.ongoing {
		"absolute -left-[41px] top-1 h-5 w-5 rounded-full border-4 border-slate-900 bg-slate-600"
	} else {
		"absolute -left-[41px] top-1 h-5 w-5 rounded-full border-4 border-slate-900 bg-cyan-500"
	};
	let meta = std::iter::once(exp.company)
		.chain(exp.period)
		.collect::<Vec<_>>()
		.join(" • ");
	let highlights = exp
		.highlights
		.into_iter()
		.map(|item| view! { <li class="text-slate-400 text-sm leading-relaxed">{item}</li> })
		.collect_view();

	view! {
		<div class="relative">
			<span class=marker></span>
			<h3 class="text-xl font-bold text-slate-100">{exp.role}</h3>
			<div class="text-sm text-cyan-400 mb-2 font-medium">{meta}</div>
			{exp.location.map(|loc| view! { <div class="text-xs text-slate-500 mb-2">{loc}</div> })}
			<ul class="space-y-2">{highlights}</ul>
			{exp.summary.map(|text| view! { <p class="text-slate-400 text-sm">{text}</p> })}
		</div>
	}
}

/// Work timeline beside education and key achievements.
#[component]
pub fn ExperienceSection(
	experiences: Vec<Experience>,
	education: Vec<Education>,
	achievements: Vec<Achievement>,
) -> impl IntoView {
	let timeline = experiences.into_iter().map(timeline_entry).collect_view();
	let schools = education
		.into_iter()
		.map(|edu| {
			view! {
				<div class="p-6 bg-slate-800/40 rounded-xl border border-slate-700">
					<div class="flex justify-between items-start mb-2">
						<div>
							<h3 class="text-xl font-bold text-slate-100">{edu.degree}</h3>
							<p class="text-cyan-400 font-medium">{edu.institution}</p>
						</div>
						<span class="text-xs font-bold px-2 py-1 bg-slate-700 rounded text-slate-300">
							{edu.years}
						</span>
					</div>
					<p class="text-slate-400 text-sm">{edu.note}</p>
				</div>
			}
		})
		.collect_view();
	let wins = achievements
		.into_iter()
		.map(|a| {
			view! {
				<div class="bg-slate-800/30 p-4 rounded-lg border border-slate-700/50">
					<h4 class="font-bold text-slate-200">{a.title}</h4>
					<p class="text-xs text-slate-400 mt-1">{a.detail}</p>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="experience" class="py-24 bg-slate-950/90">
			<div class="container mx-auto px-6">
				<div class="grid lg:grid-cols-2 gap-16">
					<div>
						<h2 class="text-3xl font-bold mb-8">"Experience"</h2>
						<div class="space-y-8 border-l-2 border-slate-800 pl-8 ml-3">{timeline}</div>
					</div>
					<div>
						<h2 class="text-3xl font-bold mb-8">"Education"</h2>
						<div class="space-y-6">{schools}</div>
						<div class="mt-12">
							<h3 class="text-xl font-bold mb-6">
								<span class="text-yellow-400">"★"</span>
								" Key Achievements"
							</h3>
							<div class="grid grid-cols-1 sm:grid-cols-2 gap-4">{wins}</div>
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}

/// Contact cards and the resume download link.
#[component]
pub fn Contact(profile: Profile, contacts: Vec<ContactLink>) -> impl IntoView {
	let cards = contacts
		.into_iter()
		.map(|link| {
			let target = link.external.then_some("_blank");
			let rel = link.external.then_some("noreferrer");
			view! {
				<a
					href=link.href
					target=target
					rel=rel
					class="p-6 bg-slate-800/80 rounded-xl border border-slate-700 hover:border-cyan-500 flex flex-col items-center gap-4"
				>
					<div class="text-sm text-slate-500 mb-1">{link.label}</div>
					<div class="font-bold">{link.value}</div>
				</a>
			}
		})
		.collect_view();
	let resume_name = download_name(&profile.resume).to_string();

	view! {
		<section id="contact" class="py-24 bg-slate-950/90">
			<div class="container mx-auto px-6 max-w-4xl text-center">
				<h2 class="text-3xl md:text-5xl font-bold mb-8">
					"Let's Create Something " <span class="text-cyan-400">"Motion-Full"</span>
				</h2>
				<p class="text-slate-400 text-lg mb-12">{profile.contact_blurb}</p>
				<div class="grid md:grid-cols-3 gap-6 mb-12">{cards}</div>
				<a
					href=profile.resume
					download=resume_name
					class="inline-flex items-center gap-2 px-8 py-4 border border-slate-600 hover:bg-slate-800/80 text-slate-300 rounded-full font-bold"
				>
					"⤓ Download Resume"
				</a>
			</div>
		</section>
	}
}

/// Copyright line with the current year.
#[component]
pub fn Footer(#[prop(into)] name: String) -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();

	view! {
		<footer class="py-8 bg-slate-950/95 border-t border-slate-900 text-center text-slate-600 text-sm">
			<div class="container mx-auto px-6">
				<p>{format!("© {} {}. All Rights Reserved.", year, name)}</p>
				<p class="mt-2">"Designed & Developed with Rust & Leptos"</p>
			</div>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resume_download_uses_file_name() {
		assert_eq!(
			download_name("/RESUME_GRAPHIC_DESIGN_FARIZFAIZ.pdf"),
			"RESUME_GRAPHIC_DESIGN_FARIZFAIZ.pdf"
		);
		assert_eq!(download_name("cv.pdf"), "cv.pdf");
		assert_eq!(download_name("/docs/"), "");
	}

	#[test]
	fn headline_highlights_second_word() {
		let words: Vec<String> = ["Creative", "Motion", "Designer"].map(String::from).into();
		assert_eq!(
			headline_parts(&words),
			("Creative".into(), "Motion".into(), "Designer".into())
		);

		let words: Vec<String> = vec!["Designer".into()];
		assert_eq!(headline_parts(&words), (String::new(), "Designer".into(), String::new()));
		assert_eq!(headline_parts(&[]), Default::default());
	}
}
