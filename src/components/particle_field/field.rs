//! Particle simulation for the animated backdrop.
//!
//! The field owns every particle and is rebuilt wholesale whenever the
//! viewport changes size. Each frame the renderer collects [`Link`]s from the
//! current positions, then calls [`ParticleField::step`] with the latest
//! pointer position.

use rand::Rng;

use super::style::{FieldConfig, ParticleHue};

/// A single drifting point.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Horizontal position, always in `[0, width)`.
	pub x: f64,
	/// Vertical position, always in `[0, height)`.
	pub y: f64,
	/// Spawn x, kept for reference only.
	pub base_x: f64,
	/// Spawn y, kept for reference only.
	pub base_y: f64,
	/// Drift per frame along x.
	pub vx: f64,
	/// Drift per frame along y.
	pub vy: f64,
	/// Radius in pixels.
	pub size: f64,
	/// Scales how hard the pointer pushes this particle.
	pub density: f64,
	/// Fill color, fixed at spawn.
	pub hue: ParticleHue,
}

impl Particle {
	fn spawn(config: &FieldConfig, width: f64, height: f64, rng: &mut impl Rng) -> Self {
		let x = rng.gen_range(0.0..width);
		let y = rng.gen_range(0.0..height);
		Self {
			x,
			y,
			base_x: x,
			base_y: y,
			vx: rng.gen_range(-config.max_speed..=config.max_speed),
			vy: rng.gen_range(-config.max_speed..=config.max_speed),
			size: rng.gen_range(config.size_range.0..config.size_range.1),
			density: rng.gen_range(config.density_range.0..config.density_range.1),
			hue: if rng.gen_bool(0.5) {
				ParticleHue::Cyan
			} else {
				ParticleHue::Blue
			},
		}
	}
}

/// Last known pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
	/// Horizontal offset from the viewport's left edge.
	pub x: f64,
	/// Vertical offset from the viewport's top edge.
	pub y: f64,
}

/// A line joining two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Index of the first particle.
	pub a: usize,
	/// Index of the second particle, always greater than `a`.
	pub b: usize,
	/// Stroke opacity, fading with distance.
	pub opacity: f64,
}

/// Wraps a coordinate into `[0, bound)`.
///
/// Values at or past the far edge restart at zero; values below zero jump to
/// just inside the far edge.
pub fn wrap(v: f64, bound: f64) -> f64 {
	if v >= bound {
		0.0
	} else if v < 0.0 {
		(bound * (1.0 - f64::EPSILON)).max(0.0)
	} else {
		v
	}
}

/// The complete set of particles for one viewport size.
#[derive(Clone, Debug)]
pub struct ParticleField {
	/// Current particles, stepped in place every frame.
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	config: FieldConfig,
}

impl ParticleField {
	/// Spawns [`ParticleField::particle_count`] particles at random positions.
	pub fn new(config: FieldConfig, width: f64, height: f64, rng: &mut impl Rng) -> Self {
		let count = Self::particle_count(&config, width, height);
		let particles = (0..count)
			.map(|_| Particle::spawn(&config, width, height, rng))
			.collect();

		Self {
			particles,
			width,
			height,
			config,
		}
	}

	/// One particle per `area_per_particle` square pixels, rounded down.
	pub fn particle_count(config: &FieldConfig, width: f64, height: f64) -> usize {
		if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
			return 0;
		}
		(width * height / config.area_per_particle).floor() as usize
	}

	/// Discard every particle and respawn for the new viewport size.
	pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
		*self = Self::new(self.config.clone(), width, height, rng);
	}

	/// Viewport width the field was sized for.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Viewport height the field was sized for.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Constants the field was built with.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Lines between every distinct pair closer than `link_distance`.
	pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
		let config = &self.config;
		self.particles.iter().enumerate().flat_map(move |(a, pa)| {
			self.particles
				.iter()
				.enumerate()
				.skip(a + 1)
				.filter_map(move |(b, pb)| {
					let (dx, dy) = (pa.x - pb.x, pa.y - pb.y);
					let dist = (dx * dx + dy * dy).sqrt();
					(dist < config.link_distance).then(|| Link {
						a,
						b,
						opacity: config.link_max_opacity - dist / config.link_fade,
					})
				})
		})
	}

	/// Advance every particle by one frame.
	pub fn step(&mut self, pointer: Pointer) {
		let config = &self.config;
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			let (dx, dy) = (pointer.x - p.x, pointer.y - p.y);
			let dist = (dx * dx + dy * dy).sqrt();
			// No direction to push along when sitting exactly on the pointer
			if dist > 0.0 && dist < config.interaction_radius {
				let force = (config.interaction_radius - dist) / config.interaction_radius;
				let push = force * p.density * config.push_factor;
				p.x -= dx / dist * push;
				p.y -= dy / dist * push;
			}

			p.x = wrap(p.x, self.width);
			p.y = wrap(p.y, self.height);
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn field(width: f64, height: f64, seed: u64) -> ParticleField {
		let mut rng = SmallRng::seed_from_u64(seed);
		ParticleField::new(FieldConfig::default(), width, height, &mut rng)
	}

	fn lone_particle(x: f64, y: f64, density: f64) -> ParticleField {
		let mut f = field(400.0, 300.0, 1);
		f.particles = vec![Particle {
			x,
			y,
			base_x: x,
			base_y: y,
			vx: 0.0,
			vy: 0.0,
			size: 1.0,
			density,
			hue: ParticleHue::Cyan,
		}];
		f
	}

	#[test]
	fn count_follows_viewport_area() {
		let config = FieldConfig::default();
		for &(w, h) in &[(1920.0, 1080.0), (375.0, 812.0), (90.0, 100.0), (89.0, 100.0)] {
			let expected = ((w * h) / 9000.0_f64).floor() as usize;
			assert_eq!(ParticleField::particle_count(&config, w, h), expected);
			assert_eq!(field(w, h, 7).particles.len(), expected);
		}
		assert_eq!(ParticleField::particle_count(&config, 0.0, 1080.0), 0);
		assert_eq!(ParticleField::particle_count(&config, -5.0, 1080.0), 0);
		assert_eq!(ParticleField::particle_count(&config, f64::NAN, 1080.0), 0);
	}

	#[test]
	fn spawned_particles_respect_ranges() {
		let f = field(1280.0, 720.0, 42);
		assert!(!f.particles.is_empty());
		for p in &f.particles {
			assert!((0.0..1280.0).contains(&p.x));
			assert!((0.0..720.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.15 && p.vy.abs() <= 0.15);
			assert!((0.5..2.5).contains(&p.size));
			assert!((1.0..31.0).contains(&p.density));
			assert_eq!((p.x, p.y), (p.base_x, p.base_y));
		}
	}

	#[test]
	fn both_hues_appear() {
		let f = field(1280.0, 720.0, 3);
		assert!(f.particles.iter().any(|p| p.hue == ParticleHue::Cyan));
		assert!(f.particles.iter().any(|p| p.hue == ParticleHue::Blue));
	}

	#[test]
	fn resize_replaces_the_whole_set() {
		let mut f = field(1280.0, 720.0, 5);
		let before: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.x, p.y)).collect();

		let mut rng = SmallRng::seed_from_u64(99);
		f.resize(640.0, 360.0, &mut rng);

		assert_eq!(f.particles.len(), (640.0 * 360.0 / 9000.0_f64).floor() as usize);
		assert_eq!((f.width(), f.height()), (640.0, 360.0));
		assert!(f.particles.iter().all(|p| p.x < 640.0 && p.y < 360.0));
		let after: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.x, p.y)).collect();
		assert_ne!(before[..after.len()], after[..]);
	}

	#[test]
	fn wrap_keeps_coordinates_in_bounds() {
		assert_eq!(wrap(50.0, 100.0), 50.0);
		assert_eq!(wrap(0.0, 100.0), 0.0);
		assert_eq!(wrap(100.0, 100.0), 0.0);
		assert_eq!(wrap(112.5, 100.0), 0.0);

		let below = wrap(-0.01, 100.0);
		assert!(below < 100.0 && below > 99.99);
		let tiny = wrap(-1e-300, 1920.0);
		assert!(tiny < 1920.0);
	}

	#[test]
	fn positions_stay_in_viewport_over_many_frames() {
		let (w, h) = (800.0, 600.0);
		let mut f = field(w, h, 11);
		let pointers = [
			Pointer::default(),
			Pointer { x: 400.0, y: 300.0 },
			Pointer { x: 799.0, y: 1.0 },
			Pointer { x: 2.0, y: 598.0 },
		];
		for frame in 0..2000 {
			f.step(pointers[frame % pointers.len()]);
			for p in &f.particles {
				assert!(p.x >= 0.0 && p.x < w, "x out of range: {}", p.x);
				assert!(p.y >= 0.0 && p.y < h, "y out of range: {}", p.y);
			}
		}
	}

	#[test]
	fn velocity_never_changes() {
		let mut f = field(800.0, 600.0, 13);
		let before: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.vx, p.vy)).collect();
		for _ in 0..100 {
			f.step(Pointer { x: 400.0, y: 300.0 });
		}
		let after: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.vx, p.vy)).collect();
		assert_eq!(before, after);
	}

	#[test]
	fn pointer_pushes_nearby_particle_away() {
		let mut f = lone_particle(200.0, 150.0, 10.0);
		f.step(Pointer { x: 150.0, y: 150.0 });

		// d = 50, force = 100/150, push = force * 10 * 0.5
		let expected = 200.0 + (100.0 / 150.0) * 10.0 * 0.5;
		assert!((f.particles[0].x - expected).abs() < 1e-9);
		assert!((f.particles[0].y - 150.0).abs() < 1e-9);
	}

	#[test]
	fn pointer_outside_radius_has_no_effect() {
		let mut f = lone_particle(200.0, 150.0, 30.0);
		f.step(Pointer { x: 0.0, y: 0.0 });
		assert_eq!((f.particles[0].x, f.particles[0].y), (200.0, 150.0));
	}

	#[test]
	fn particle_on_the_pointer_stays_finite() {
		let mut f = lone_particle(120.0, 80.0, 30.0);
		f.step(Pointer { x: 120.0, y: 80.0 });
		let p = &f.particles[0];
		assert!(p.x.is_finite() && p.y.is_finite());
		assert_eq!((p.x, p.y), (120.0, 80.0));
	}

	#[test]
	fn untouched_pointer_defaults_to_origin() {
		assert_eq!(Pointer::default(), Pointer { x: 0.0, y: 0.0 });

		let mut f = lone_particle(10.0, 0.0, 20.0);
		f.step(Pointer::default());
		// pushed right, away from the top-left corner
		assert!(f.particles[0].x > 10.0);
	}

	#[test]
	fn links_only_join_close_pairs() {
		let f = field(600.0, 400.0, 17);
		let links: Vec<Link> = f.links().collect();
		assert!(!links.is_empty());

		for link in &links {
			assert!(link.a < link.b);
			let (pa, pb) = (&f.particles[link.a], &f.particles[link.b]);
			let dist = ((pa.x - pb.x).powi(2) + (pa.y - pb.y).powi(2)).sqrt();
			assert!(dist < 100.0);
			assert!(link.opacity > 0.0 && link.opacity < 0.1);
		}

		let n = f.particles.len();
		let mut close_pairs = 0;
		for a in 0..n {
			for b in (a + 1)..n {
				let (pa, pb) = (&f.particles[a], &f.particles[b]);
				if ((pa.x - pb.x).powi(2) + (pa.y - pb.y).powi(2)).sqrt() < 100.0 {
					close_pairs += 1;
				}
			}
		}
		assert_eq!(links.len(), close_pairs);
	}

	#[test]
	fn link_opacity_decays_linearly() {
		let mut f = lone_particle(100.0, 100.0, 1.0);
		let mut other = f.particles[0].clone();
		other.x = 150.0;
		f.particles.push(other.clone());
		other.x = 249.0;
		f.particles.push(other);

		let links: Vec<Link> = f.links().collect();
		assert_eq!(links.len(), 2);
		assert_eq!((links[0].a, links[0].b), (0, 1));
		assert!((links[0].opacity - 0.05).abs() < 1e-12);
		assert_eq!((links[1].a, links[1].b), (1, 2));
		// 99px apart: barely visible, never negative
		assert!(links[1].opacity > 0.0 && links[1].opacity < 0.002);
	}
}
