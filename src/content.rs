//! Page content: profile, skills, projects, experience, and contact details.
//!
//! Content ships embedded from `content/portfolio.json`. A page can override it
//! with a `<script id="portfolio-data" type="application/json">` element.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.json");

/// One slide in a project gallery.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GalleryItem {
	/// Still image.
	Image {
		/// Image URL.
		src: String,
	},
	/// Video played inline with controls.
	Video {
		/// Video URL.
		src: String,
	},
}

impl GalleryItem {
	/// Media URL regardless of kind.
	pub fn src(&self) -> &str {
		match self {
			GalleryItem::Image { src } | GalleryItem::Video { src } => src,
		}
	}

	/// Whether the slide renders as a `<video>`.
	pub fn is_video(&self) -> bool {
		matches!(self, GalleryItem::Video { .. })
	}
}

/// A showcased project with its card thumbnail and modal gallery.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
	/// Card and modal heading.
	pub title: String,
	/// Short label shown above the title.
	pub category: String,
	/// Body text for the card and modal.
	pub description: String,
	/// Tools used, rendered as tags.
	pub tools: Vec<String>,
	/// Gradient classes tinting the card thumbnail.
	#[serde(default)]
	pub accent: String,
	/// Card image URL.
	pub thumbnail: String,
	/// Ordered slides shown in the modal; may be empty.
	pub gallery: Vec<GalleryItem>,
}

/// A headline number in the about section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Stat {
	/// Display value, e.g. "3+".
	pub value: String,
	/// Caption under the value.
	pub label: String,
}

/// Who the portfolio belongs to and the copy around them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
	/// Full name, also used for the wordmark.
	pub name: String,
	/// Document title.
	pub title: String,
	/// Availability badge above the hero heading.
	pub availability: String,
	/// Hero heading words; the middle word is highlighted.
	pub headline: Vec<String>,
	/// Line under the hero heading.
	pub tagline: String,
	/// Profile photo URL.
	pub photo: String,
	/// Shown once if `photo` fails to load.
	pub photo_fallback: String,
	/// About paragraphs.
	pub about: Vec<String>,
	/// Stats grid next to the about text.
	pub stats: Vec<Stat>,
	/// Resume file path offered for download.
	pub resume: String,
	/// External gallery (e.g. Behance) linked from the projects section.
	pub gallery_link: String,
	/// Intro text of the contact section.
	pub contact_blurb: String,
}

/// A section anchor in the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavLink {
	/// Element id of the target section.
	pub id: String,
	/// Button text.
	pub label: String,
}

/// A skill card with its proficiency bar.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Skill {
	/// Discipline name.
	pub title: String,
	/// Proficiency, 0-100.
	pub percent: u8,
	/// Text color class for the icon and bar.
	pub color: String,
	/// Tools or techniques under this skill.
	pub summary: String,
}

/// A timeline entry in the experience section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Experience {
	/// Employer or client.
	pub company: String,
	/// Position held.
	pub role: String,
	/// Date range, if any.
	#[serde(default)]
	pub period: Option<String>,
	/// City or "Remote".
	#[serde(default)]
	pub location: Option<String>,
	/// Bullet points.
	#[serde(default)]
	pub highlights: Vec<String>,
	/// Free text used instead of, or after, the bullets.
	#[serde(default)]
	pub summary: Option<String>,
	/// Ongoing engagements get a muted timeline marker.
	#[serde(default)]
	pub ongoing: bool,
}

/// A degree or diploma.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Education {
	/// Qualification name.
	pub degree: String,
	/// School or university.
	pub institution: String,
	/// Year range badge.
	pub years: String,
	/// Result or remark.
	pub note: String,
}

/// An award or notable result.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Achievement {
	/// Award name.
	pub title: String,
	/// One-line context.
	pub detail: String,
}

/// A way to get in touch.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactLink {
	/// Channel, e.g. "Email".
	pub label: String,
	/// Text shown on the card.
	pub value: String,
	/// Link target (`mailto:`, `tel:`, or URL).
	pub href: String,
	/// Opens in a new tab.
	#[serde(default)]
	pub external: bool,
}

/// Everything the page renders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PortfolioData {
	/// Owner and page copy.
	pub profile: Profile,
	/// Navigation anchors, in page order.
	pub nav: Vec<NavLink>,
	/// Skill cards.
	pub skills: Vec<Skill>,
	/// Project cards and galleries.
	pub projects: Vec<Project>,
	/// Work timeline.
	pub experiences: Vec<Experience>,
	/// Education entries.
	pub education: Vec<Education>,
	/// Key achievements.
	pub achievements: Vec<Achievement>,
	/// Contact cards.
	pub contacts: Vec<ContactLink>,
}

impl PortfolioData {
	/// Parses content JSON, logging what was loaded.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		let data: Self = serde_json::from_str(json)?;
		info!(
			"portfolio: loaded {} projects, {} experiences, {} skills",
			data.projects.len(),
			data.experiences.len(),
			data.skills.len()
		);
		for project in data.projects.iter().filter(|p| p.gallery.is_empty()) {
			warn!("portfolio: project '{}' has an empty gallery", project.title);
		}
		Ok(data)
	}

	/// Content embedded in the binary.
	pub fn builtin() -> Self {
		Self::from_json(BUILTIN_CONTENT).unwrap_or_else(|e| {
			warn!("portfolio: failed to parse built-in content: {}", e);
			Self::default()
		})
	}
}

/// Load content from a script element with id="portfolio-data".
fn load_page_override() -> Option<PortfolioData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("portfolio-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match PortfolioData::from_json(&json_text) {
		Ok(data) => Some(data),
		Err(e) => {
			warn!("portfolio: failed to parse page content: {}", e);
			None
		}
	}
}

/// Page-supplied content if present and valid, otherwise the built-in content.
pub fn load_portfolio_data() -> PortfolioData {
	load_page_override().unwrap_or_else(PortfolioData::builtin)
}
