//! Tunables for the particle field.
//!
//! Every value here has a default matching the stock look of the background;
//! hosts can override any subset through JSON (see [`crate::load_field_config`]).

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation;
	/// anything else becomes mid gray.
	pub fn parse(color_str: &str) -> Self {
		let color_str = color_str.trim();
		if color_str.starts_with('#') && color_str.len() == 7 {
			let channel = |range: std::ops::Range<usize>| {
				color_str
					.get(range)
					.and_then(|hex| u8::from_str_radix(hex, 16).ok())
					.unwrap_or(128)
			};
			Color::rgb(channel(1..3), channel(3..5), channel(5..7))
		} else if color_str.starts_with("rgb") {
			let nums: Vec<&str> = color_str
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.collect();
			let channel = |i: usize| {
				nums.get(i)
					.and_then(|s| s.trim().parse().ok())
					.unwrap_or(128)
			};
			let a = nums
				.get(3)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(1.0);
			Color::rgba(channel(0), channel(1), channel(2), a)
		} else {
			Color::rgb(128, 128, 128)
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

impl From<String> for Color {
	fn from(value: String) -> Self {
		Self::parse(&value)
	}
}

/// Complete particle field configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Viewports narrower than this (logical px) get `narrow_count` particles.
	pub narrow_breakpoint: f64,
	pub narrow_count: usize,
	pub wide_count: usize,
	/// Velocity components are drawn from `[-max_speed, max_speed]`.
	pub max_speed: f64,
	pub radius_min: f64,
	pub radius_max: f64,
	/// The two accent colors particles pick from, with equal odds.
	pub accents: [Color; 2],
	/// Global alpha applied to particles and links.
	pub particle_alpha: f64,
	/// Particles closer than this are joined by a link.
	pub link_distance: f64,
	pub link_color: Color,
	pub link_width: f64,
	/// Distance within which the pointer pulls particles.
	pub pointer_radius: f64,
	/// Fraction of the pointer delta applied per frame at full force.
	pub pointer_pull: f64,
	/// Fixed RNG seed. `None` seeds from the browser.
	pub seed: Option<u64>,
}

impl FieldConfig {
	/// Number of particles for a viewport of the given logical width.
	pub fn particle_count(&self, width: f64) -> usize {
		if width < self.narrow_breakpoint {
			self.narrow_count
		} else {
			self.wide_count
		}
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			narrow_breakpoint: 768.0,
			narrow_count: 40,
			wide_count: 100,
			max_speed: 0.2,
			radius_min: 1.0,
			radius_max: 2.5,
			accents: [Color::rgb(0, 242, 255), Color::rgb(139, 92, 246)],
			particle_alpha: 0.2,
			link_distance: 150.0,
			link_color: Color::rgba(0, 242, 255, 0.1),
			link_width: 0.5,
			pointer_radius: 200.0,
			pointer_pull: 0.015,
			seed: None,
		}
	}
}

/// CSS strings derived from a [`FieldConfig`], computed once per mount so the
/// frame loop does not format colors.
#[derive(Clone, Debug)]
pub struct Palette {
	pub accents: [String; 2],
	pub link: String,
}

impl Palette {
	pub fn new(config: &FieldConfig) -> Self {
		Self {
			accents: config.accents.map(Color::to_css),
			link: config.link_color.to_css(),
		}
	}
}
