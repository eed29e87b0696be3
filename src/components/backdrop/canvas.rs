//! Drawing seams between the backdrop and the browser.
//!
//! Everything the engine draws goes through [`Painter`]; everything it needs
//! to know about the element goes through [`SurfaceHost`]. [`WebCanvas`]
//! implements both over a real `<canvas>`.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// 2D immediate-mode drawing primitives, in logical coordinates.
pub trait Painter {
	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
	fn begin_path(&mut self);
	fn move_to(&mut self, x: f64, y: f64);
	fn line_to(&mut self, x: f64, y: f64);
	fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
	/// Full circle around `(x, y)`.
	fn circle(&mut self, x: f64, y: f64, r: f64);
	fn stroke(&mut self);
	fn fill(&mut self);
	fn set_stroke_style(&mut self, css: &str);
	fn set_fill_style(&mut self, css: &str);
	fn set_line_width(&mut self, width: f64);
	fn set_line_cap(&mut self, cap: &str);
	fn set_line_join(&mut self, join: &str);
}

/// The element side of the drawing surface.
pub trait SurfaceHost {
	/// Displayed size of the enclosing container.
	fn container_size(&self) -> (f64, f64);
	/// Device pixel density; callers treat non-positive values as 1.
	fn device_pixel_ratio(&self) -> f64;
	fn set_buffer_size(&mut self, width: u32, height: u32);
	fn set_display_size(&mut self, width: f64, height: f64);
	/// Scale every later drawing command by `ratio` on both axes.
	fn set_pixel_scale(&mut self, ratio: f64);
}

/// A `<canvas>` element with its 2D context.
#[derive(Clone, Debug)]
pub struct WebCanvas {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
	/// Returns `None` when the element has no 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = canvas
			.get_context("2d")
			.ok()??
			.dyn_into::<CanvasRenderingContext2d>()
			.ok()?;
		Some(Self { canvas, ctx })
	}
}

impl Painter for WebCanvas {
	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		self.ctx.clear_rect(x, y, w, h);
	}

	fn begin_path(&mut self) {
		self.ctx.begin_path();
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ctx.move_to(x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.ctx.line_to(x, y);
	}

	fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
		self.ctx.quadratic_curve_to(cpx, cpy, x, y);
	}

	fn circle(&mut self, x: f64, y: f64, r: f64) {
		let _ = self.ctx.arc(x, y, r, 0.0, PI * 2.0);
	}

	fn stroke(&mut self) {
		self.ctx.stroke();
	}

	fn fill(&mut self) {
		self.ctx.fill();
	}

	fn set_stroke_style(&mut self, css: &str) {
		self.ctx.set_stroke_style_str(css);
	}

	fn set_fill_style(&mut self, css: &str) {
		self.ctx.set_fill_style_str(css);
	}

	fn set_line_width(&mut self, width: f64) {
		self.ctx.set_line_width(width);
	}

	fn set_line_cap(&mut self, cap: &str) {
		self.ctx.set_line_cap(cap);
	}

	fn set_line_join(&mut self, join: &str) {
		self.ctx.set_line_join(join);
	}
}

impl SurfaceHost for WebCanvas {
	fn container_size(&self) -> (f64, f64) {
		let rect = match self.canvas.parent_element() {
			Some(parent) => parent.get_bounding_client_rect(),
			None => self.canvas.get_bounding_client_rect(),
		};
		(rect.width(), rect.height())
	}

	fn device_pixel_ratio(&self) -> f64 {
		web_sys::window()
			.map(|w| w.device_pixel_ratio())
			.unwrap_or(1.0)
	}

	fn set_buffer_size(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn set_display_size(&mut self, width: f64, height: f64) {
		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{width}px"));
		let _ = style.set_property("height", &format!("{height}px"));
	}

	fn set_pixel_scale(&mut self, ratio: f64) {
		let _ = self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
	}
}

/// In-memory surface that records every call, for host-side tests.
#[cfg(test)]
pub(crate) mod recording {
	use super::{Painter, SurfaceHost};

	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Clear(f64, f64, f64, f64),
		Begin,
		Move(f64, f64),
		Line(f64, f64),
		Quad(f64, f64, f64, f64),
		Circle(f64, f64, f64),
		Stroke,
		Fill,
		StrokeStyle(String),
		FillStyle(String),
		LineWidth(f64),
		LineCap(String),
		LineJoin(String),
	}

	#[derive(Debug, Default)]
	pub struct Recorder {
		pub ops: Vec<Op>,
		pub container: (f64, f64),
		pub ratio: f64,
		pub buffer: (u32, u32),
		pub display: (f64, f64),
		pub scale: f64,
	}

	impl Recorder {
		pub fn new(width: f64, height: f64) -> Self {
			Self {
				container: (width, height),
				ratio: 1.0,
				..Self::default()
			}
		}

		pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
			self.ops.iter().filter(|op| pred(op)).count()
		}
	}

	impl Painter for Recorder {
		fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
			self.ops.push(Op::Clear(x, y, w, h));
		}
		fn begin_path(&mut self) {
			self.ops.push(Op::Begin);
		}
		fn move_to(&mut self, x: f64, y: f64) {
			self.ops.push(Op::Move(x, y));
		}
		fn line_to(&mut self, x: f64, y: f64) {
			self.ops.push(Op::Line(x, y));
		}
		fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
			self.ops.push(Op::Quad(cpx, cpy, x, y));
		}
		fn circle(&mut self, x: f64, y: f64, r: f64) {
			self.ops.push(Op::Circle(x, y, r));
		}
		fn stroke(&mut self) {
			self.ops.push(Op::Stroke);
		}
		fn fill(&mut self) {
			self.ops.push(Op::Fill);
		}
		fn set_stroke_style(&mut self, css: &str) {
			self.ops.push(Op::StrokeStyle(css.to_string()));
		}
		fn set_fill_style(&mut self, css: &str) {
			self.ops.push(Op::FillStyle(css.to_string()));
		}
		fn set_line_width(&mut self, width: f64) {
			self.ops.push(Op::LineWidth(width));
		}
		fn set_line_cap(&mut self, cap: &str) {
			self.ops.push(Op::LineCap(cap.to_string()));
		}
		fn set_line_join(&mut self, join: &str) {
			self.ops.push(Op::LineJoin(join.to_string()));
		}
	}

	impl SurfaceHost for Recorder {
		fn container_size(&self) -> (f64, f64) {
			self.container
		}
		fn device_pixel_ratio(&self) -> f64 {
			self.ratio
		}
		fn set_buffer_size(&mut self, width: u32, height: u32) {
			self.buffer = (width, height);
		}
		fn set_display_size(&mut self, width: f64, height: f64) {
			self.display = (width, height);
		}
		fn set_pixel_scale(&mut self, ratio: f64) {
			self.scale = ratio;
		}
	}
}
