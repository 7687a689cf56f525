//! Drawing surface abstraction.
//!
//! The animator only needs a handful of 2D operations. [`CanvasSurface`]
//! implements them on an HTML canvas; tests implement them with a recorder.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::viewport::Viewport;

/// 2D drawing operations used by the particle field, all in logical units.
pub trait Surface {
	/// Sizes the backing store for `viewport` and installs the logical-unit transform.
	fn resize(&mut self, viewport: &Viewport);
	/// Clears `[0, width] × [0, height]`.
	fn clear(&mut self, width: f64, height: f64);
	fn set_alpha(&mut self, alpha: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
	/// Starts a fresh path for [`Surface::add_segment`].
	fn begin_path(&mut self);
	fn add_segment(&mut self, from: (f64, f64), to: (f64, f64));
	/// Strokes everything added since [`Surface::begin_path`] in one call.
	fn stroke_path(&mut self, color: &str, width: f64);
}

/// A canvas element together with its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquires a 2D context. Returns `None` where the canvas cannot provide one.
	pub fn acquire(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.ok()
			.flatten()?
			.dyn_into()
			.ok()?;
		Some(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn resize(&mut self, viewport: &Viewport) {
		let (pw, ph) = viewport.physical_size();
		self.canvas.set_width(pw);
		self.canvas.set_height(ph);

		// Absolute transform: scale must not compound across resizes.
		let s = viewport.pixel_ratio;
		let _ = self.ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0);

		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{}px", viewport.width));
		let _ = style.set_property("height", &format!("{}px", viewport.height));
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn set_alpha(&mut self, alpha: f64) {
		self.ctx.set_global_alpha(alpha);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(color);
		self.ctx.fill();
	}

	fn begin_path(&mut self) {
		self.ctx.begin_path();
	}

	fn add_segment(&mut self, from: (f64, f64), to: (f64, f64)) {
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
	}

	fn stroke_path(&mut self, color: &str, width: f64) {
		self.ctx.set_stroke_style_str(color);
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}
}

#[cfg(test)]
pub(crate) mod recording {
	//! In-memory [`Surface`] used by unit tests.

	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Resize(Viewport),
		Clear(f64, f64),
		Alpha(f64),
		Circle { x: f64, y: f64, radius: f64, color: String },
		BeginPath,
		Segment((f64, f64), (f64, f64)),
		Stroke { color: String, width: f64 },
	}

	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub ops: Vec<Op>,
	}

	impl RecordingSurface {
		pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
			self.ops.iter().filter(|op| pred(op)).count()
		}
	}

	impl Surface for RecordingSurface {
		fn resize(&mut self, viewport: &Viewport) {
			self.ops.push(Op::Resize(*viewport));
		}

		fn clear(&mut self, width: f64, height: f64) {
			self.ops.push(Op::Clear(width, height));
		}

		fn set_alpha(&mut self, alpha: f64) {
			self.ops.push(Op::Alpha(alpha));
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
			self.ops.push(Op::Circle {
				x,
				y,
				radius,
				color: color.to_string(),
			});
		}

		fn begin_path(&mut self) {
			self.ops.push(Op::BeginPath);
		}

		fn add_segment(&mut self, from: (f64, f64), to: (f64, f64)) {
			self.ops.push(Op::Segment(from, to));
		}

		fn stroke_path(&mut self, color: &str, width: f64) {
			self.ops.push(Op::Stroke {
				color: color.to_string(),
				width,
			});
		}
	}
}
