//! Viewport geometry and high-density display scaling.
//!
//! # Coordinate Spaces
//!
//! - **Logical**: CSS pixels. The simulation and every drawing call use these.
//! - **Physical**: backing-store pixels of the canvas, `logical * pixel_ratio`.
//!
//! The canvas is sized in physical pixels and given a uniform `pixel_ratio`
//! scale transform, so drawing stays in logical units while output stays crisp.

use web_sys::Window;

/// Current size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Logical width.
	pub width: f64,
	/// Logical height.
	pub height: f64,
	/// Physical pixels per logical pixel, always positive.
	pub pixel_ratio: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
		let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
			pixel_ratio
		} else {
			1.0
		};
		Self {
			width,
			height,
			pixel_ratio,
		}
	}

	/// Reads the window's inner size and device pixel ratio.
	pub fn of_window(window: &Window) -> Option<Self> {
		let width = window.inner_width().ok()?.as_f64()?;
		let height = window.inner_height().ok()?.as_f64()?;
		Some(Self::new(width, height, window.device_pixel_ratio()))
	}

	/// Backing-store size in physical pixels.
	pub fn physical_size(&self) -> (u32, u32) {
		(
			(self.width * self.pixel_ratio) as u32,
			(self.height * self.pixel_ratio) as u32,
		)
	}

	/// Whether `(x, y)` lies in `[0, width] × [0, height]`.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		(0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
	}
}
