//! Colors and tunable constants for the particle backdrop.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha in `[0, 1]`.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Hex when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// One of the two hues a particle can be painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleHue {
	/// `rgba(34, 211, 238, 0.3)`
	Cyan,
	/// `rgba(59, 130, 246, 0.3)`
	Blue,
}

impl ParticleHue {
	/// Translucent fill for this hue.
	pub fn color(self) -> Color {
		match self {
			ParticleHue::Cyan => Color::rgba(34, 211, 238, 0.3),
			ParticleHue::Blue => Color::rgba(59, 130, 246, 0.3),
		}
	}
}

/// Tunable behavior of the particle field.
///
/// Distances are in CSS pixels, velocities in pixels per frame.
#[derive(Clone, Debug)]
pub struct FieldConfig {
	/// Viewport area (px²) that yields one particle.
	pub area_per_particle: f64,
	/// Upper bound of each velocity component's magnitude.
	pub max_speed: f64,
	/// Particle radius range, `[min, max)`.
	pub size_range: (f64, f64),
	/// Repulsion strength range, `[min, max)`.
	pub density_range: (f64, f64),
	/// Pointer distance below which particles are pushed away.
	pub interaction_radius: f64,
	/// Scales the push applied inside the interaction radius.
	pub push_factor: f64,
	/// Particles closer than this are joined by a line.
	pub link_distance: f64,
	/// Line opacity is `link_max_opacity - distance / link_fade`.
	pub link_fade: f64,
	pub link_max_opacity: f64,
	/// Line stroke width.
	pub link_width: f64,
	/// Line color; alpha is replaced per link.
	pub link_color: Color,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			area_per_particle: 9000.0,
			max_speed: 0.15,
			size_range: (0.5, 2.5),
			density_range: (1.0, 31.0),
			interaction_radius: 150.0,
			push_factor: 0.5,
			link_distance: 100.0,
			link_fade: 1000.0,
			link_max_opacity: 0.1,
			link_width: 0.5,
			link_color: Color::rgb(34, 211, 238),
		}
	}
}
