//! Per-mount animator state.
//!
//! Owns the particle field, pointer and viewport, and turns each refresh
//! tick into drawing calls on a [`Surface`]. Browser wiring lives in
//! [`super::frame_loop`]; everything here is plain data so it can be driven
//! directly in tests.

use log::debug;
use rand::Rng;
use rand::rngs::SmallRng;

use super::config::{FieldConfig, Palette};
use super::particles::{ParticleField, Pointer};
use super::surface::Surface;
use super::viewport::Viewport;

/// Simulation state for one mounted background.
///
/// Once [`Animator::stop`] has been called every entry point is inert.
pub struct Animator<R: Rng = SmallRng> {
	config: FieldConfig,
	palette: Palette,
	viewport: Viewport,
	pointer: Pointer,
	field: ParticleField,
	rng: R,
	running: bool,
}

impl<R: Rng> Animator<R> {
	/// Sizes `surface` for `viewport` and creates the first particle set.
	pub fn start(config: FieldConfig, viewport: Viewport, mut rng: R, surface: &mut impl Surface) -> Self {
		surface.resize(&viewport);
		let field = ParticleField::populate(&mut rng, &viewport, &config);
		debug!(
			"particle-field: started with {} particles at {}x{} (x{})",
			field.len(),
			viewport.width,
			viewport.height,
			viewport.pixel_ratio
		);
		Self {
			palette: Palette::new(&config),
			config,
			viewport,
			pointer: Pointer::OFFSCREEN,
			field,
			rng,
			running: true,
		}
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	pub fn pointer(&self) -> Pointer {
		self.pointer
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Records the latest pointer position.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		if self.running {
			self.pointer = Pointer { x, y };
		}
	}

	/// Re-sizes the surface and replaces the whole particle set.
	///
	/// Existing particles are discarded, not rescaled.
	pub fn resize(&mut self, viewport: Viewport, surface: &mut impl Surface) {
		if !self.running {
			return;
		}
		surface.resize(&viewport);
		self.viewport = viewport;
		self.field = ParticleField::populate(&mut self.rng, &viewport, &self.config);
		debug!(
			"particle-field: reinitialized {} particles at {}x{}",
			self.field.len(),
			viewport.width,
			viewport.height
		);
	}

	/// Advances the simulation one tick and draws it.
	///
	/// Returns whether another frame should be scheduled.
	pub fn frame(&mut self, surface: &mut impl Surface) -> bool {
		if !self.running {
			return false;
		}
		let Viewport { width, height, .. } = self.viewport;

		surface.clear(width, height);
		surface.set_alpha(self.config.particle_alpha);

		self.field.step(self.pointer, &self.config);
		for p in self.field.particles() {
			surface.fill_circle(p.x, p.y, p.radius, &self.palette.accents[p.accent.index()]);
		}

		// One path, one stroke for all links.
		surface.begin_path();
		self.field.for_each_link(self.config.link_distance, |p, q| {
			surface.add_segment((p.x, p.y), (q.x, q.y));
		});
		surface.stroke_path(&self.palette.link, self.config.link_width);

		true
	}

	/// Makes every entry point inert. Safe to call more than once.
	pub fn stop(&mut self) {
		if self.running {
			self.running = false;
			debug!("particle-field: stopped");
		}
	}
}
