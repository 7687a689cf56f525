//! Particle simulation: drift, edge reflection, pointer pull, proximity links.

use rand::Rng;

use super::config::FieldConfig;
use super::viewport::Viewport;

/// Which of the two configured accent colors a particle uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
	Primary,
	Secondary,
}

impl Accent {
	pub fn index(self) -> usize {
		match self {
			Accent::Primary => 0,
			Accent::Secondary => 1,
		}
	}
}

/// A single drifting particle.
///
/// `radius` and `accent` are fixed at creation; velocity only ever changes sign.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub accent: Accent,
}

/// Uniform sample in `[lo, hi)`; collapses to `lo` for empty ranges instead of panicking.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	lo + rng.r#gen::<f64>() * (hi - lo).max(0.0)
}

impl Particle {
	pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, config: &FieldConfig) -> Self {
		Self {
			x: uniform(rng, 0.0, viewport.width),
			y: uniform(rng, 0.0, viewport.height),
			vx: uniform(rng, -config.max_speed, config.max_speed),
			vy: uniform(rng, -config.max_speed, config.max_speed),
			radius: uniform(rng, config.radius_min, config.radius_max),
			accent: if rng.gen_bool(0.5) {
				Accent::Primary
			} else {
				Accent::Secondary
			},
		}
	}

	/// Moves by one velocity step, then flips any velocity component whose
	/// coordinate left `[0, extent]`. Position is never clamped.
	fn advance(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}
	}

	/// Nudges the position toward the pointer with linear falloff.
	/// Velocity is untouched, so the pull does not accumulate.
	fn pull_toward(&mut self, pointer: Pointer, radius: f64, pull: f64) {
		let (dx, dy) = (pointer.x - self.x, pointer.y - self.y);
		let distance = (dx * dx + dy * dy).sqrt();
		if distance < radius {
			let force = (radius - distance) / radius;
			self.x += dx * force * pull;
			self.y += dy * force * pull;
		}
	}
}

/// Last known pointer position.
///
/// Starts far off-screen so "no pointer yet" behaves like "pointer far away".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
}

impl Pointer {
	pub const OFFSCREEN: Pointer = Pointer {
		x: -1000.0,
		y: -1000.0,
	};
}

impl Default for Pointer {
	fn default() -> Self {
		Self::OFFSCREEN
	}
}

/// The full particle set for one viewport size.
///
/// Never grown or shrunk; a new viewport means a new field.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Creates `config.particle_count(viewport.width)` randomly placed particles.
	pub fn populate<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, config: &FieldConfig) -> Self {
		let count = config.particle_count(viewport.width);
		let particles = (0..count)
			.map(|_| Particle::spawn(rng, viewport, config))
			.collect();
		Self::with_particles(particles, viewport)
	}

	pub fn with_particles(particles: Vec<Particle>, viewport: &Viewport) -> Self {
		Self {
			particles,
			width: viewport.width,
			height: viewport.height,
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Advances every particle one frame, in storage order.
	pub fn step(&mut self, pointer: Pointer, config: &FieldConfig) {
		for p in &mut self.particles {
			p.advance(self.width, self.height);
			p.pull_toward(pointer, config.pointer_radius, config.pointer_pull);
		}
	}

	/// Visits every unordered pair `(i, j)`, `i < j`, closer than `max_distance`.
	/// The comparison is strict and done on squared distances.
	pub fn for_each_link(&self, max_distance: f64, mut visit: impl FnMut(&Particle, &Particle)) {
		let max_sq = max_distance * max_distance;
		for (i, p) in self.particles.iter().enumerate() {
			for q in &self.particles[i + 1..] {
				let (dx, dy) = (p.x - q.x, p.y - q.y);
				if dx * dx + dy * dy < max_sq {
					visit(p, q);
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn still(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
			accent: Accent::Primary,
		}
	}

	#[test]
	fn populate_respects_breakpoint() {
		let config = FieldConfig::default();
		let mut rng = SmallRng::seed_from_u64(7);
		let narrow = ParticleField::populate(&mut rng, &Viewport::new(767.0, 900.0, 2.0), &config);
		let wide = ParticleField::populate(&mut rng, &Viewport::new(768.0, 900.0, 1.0), &config);
		assert_eq!(narrow.len(), 40);
		assert_eq!(wide.len(), 100);
	}

	#[test]
	fn spawned_particles_stay_in_configured_ranges() {
		let config = FieldConfig::default();
		let viewport = Viewport::new(1280.0, 720.0, 1.0);
		let mut rng = SmallRng::seed_from_u64(42);
		let field = ParticleField::populate(&mut rng, &viewport, &config);

		for p in field.particles() {
			assert!((0.0..1280.0).contains(&p.x));
			assert!((0.0..720.0).contains(&p.y));
			assert!((-0.2..=0.2).contains(&p.vx));
			assert!((-0.2..=0.2).contains(&p.vy));
			assert!((1.0..=2.5).contains(&p.radius));
		}
		let primary = field
			.particles()
			.iter()
			.filter(|p| p.accent == Accent::Primary)
			.count();
		assert!(primary > 0 && primary < field.len());
	}

	#[test]
	fn edge_reflects_velocity_without_clamping() {
		let config = FieldConfig::default();
		let viewport = Viewport::new(500.0, 400.0, 1.0);
		let mut field = ParticleField::with_particles(
			vec![Particle {
				vx: 0.3,
				..still(500.0 - 0.1, 200.0)
			}],
			&viewport,
		);

		field.step(Pointer::OFFSCREEN, &config);
		let p = &field.particles()[0];
		assert!(p.x > 500.0);
		assert!((p.x - 500.2).abs() < 1e-9);
		assert_eq!(p.vx, -0.3);
		assert_eq!(p.vy, 0.0);

		field.step(Pointer::OFFSCREEN, &config);
		let p = &field.particles()[0];
		assert!((p.x - 499.9).abs() < 1e-9);
		assert_eq!(p.vx, -0.3);
	}

	#[test]
	fn axes_reflect_independently() {
		let config = FieldConfig::default();
		let viewport = Viewport::new(100.0, 100.0, 1.0);
		let mut field = ParticleField::with_particles(
			vec![Particle {
				vx: 0.1,
				vy: -0.2,
				..still(50.0, 0.1)
			}],
			&viewport,
		);

		field.step(Pointer::OFFSCREEN, &config);
		let p = &field.particles()[0];
		assert!(p.y < 0.0);
		assert_eq!(p.vx, 0.1);
		assert_eq!(p.vy, 0.2);
	}

	#[test]
	fn pull_vanishes_at_radius() {
		let mut p = still(300.0, 100.0);
		p.pull_toward(Pointer { x: 100.0, y: 100.0 }, 200.0, 0.015);
		assert_eq!((p.x, p.y), (300.0, 100.0));
	}

	#[test]
	fn pull_is_zero_on_top_of_pointer() {
		let mut p = still(80.0, 60.0);
		p.pull_toward(Pointer { x: 80.0, y: 60.0 }, 200.0, 0.015);
		assert_eq!((p.x, p.y), (80.0, 60.0));
	}

	#[test]
	fn pull_falls_off_linearly() {
		// Pointer at distance R/2 along a 3-4-5 diagonal.
		let mut p = still(0.0, 0.0);
		let pointer = Pointer { x: 60.0, y: 80.0 };
		p.pull_toward(pointer, 200.0, 0.015);
		assert!((p.x - 60.0 * 0.5 * 0.015).abs() < 1e-12);
		assert!((p.y - 80.0 * 0.5 * 0.015).abs() < 1e-12);
	}

	#[test]
	fn pull_does_not_touch_velocity() {
		let config = FieldConfig::default();
		let viewport = Viewport::new(1000.0, 1000.0, 1.0);
		let mut field = ParticleField::with_particles(
			vec![Particle {
				vx: 0.1,
				vy: 0.1,
				..still(500.0, 500.0)
			}],
			&viewport,
		);
		field.step(Pointer { x: 550.0, y: 500.0 }, &config);
		let p = &field.particles()[0];
		assert_eq!((p.vx, p.vy), (0.1, 0.1));
		assert!(p.x > 500.1);
	}

	#[test]
	fn link_threshold_is_strict() {
		let viewport = Viewport::new(1000.0, 1000.0, 1.0);
		// 90-120-150 triangle: exactly 150 apart.
		let at_threshold = ParticleField::with_particles(
			vec![still(0.0, 0.0), still(90.0, 120.0)],
			&viewport,
		);
		let mut links = 0;
		at_threshold.for_each_link(150.0, |_, _| links += 1);
		assert_eq!(links, 0);

		// Squared distance 150² - 1.
		let inside = ParticleField::with_particles(
			vec![still(0.0, 0.0), still((150.0f64 * 150.0 - 1.0).sqrt(), 0.0)],
			&viewport,
		);
		let mut links = 0;
		inside.for_each_link(150.0, |_, _| links += 1);
		assert_eq!(links, 1);
	}

	#[test]
	fn links_visit_each_pair_once_in_order() {
		let viewport = Viewport::new(1000.0, 1000.0, 1.0);
		let field = ParticleField::with_particles(
			vec![still(0.0, 0.0), still(10.0, 0.0), still(20.0, 0.0), still(900.0, 900.0)],
			&viewport,
		);
		let mut pairs = Vec::new();
		field.for_each_link(150.0, |p, q| pairs.push((p.x, q.x)));
		assert_eq!(pairs, vec![(0.0, 10.0), (0.0, 20.0), (10.0, 20.0)]);
	}
}
