//! Logical surface size and high-density display scaling.

use super::canvas::SurfaceHost;

/// Logical (CSS pixel) dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
	pub width: f64,
	pub height: f64,
	pub pixel_ratio: f64,
}

impl Default for Surface {
	fn default() -> Self {
		Self {
			width: 0.0,
			height: 0.0,
			pixel_ratio: 1.0,
		}
	}
}

impl Surface {
	/// Measure the host and size it for the first time.
	pub fn measure<H: SurfaceHost + ?Sized>(host: &mut H) -> Self {
		let mut surface = Self::default();
		surface.resize(host);
		surface
	}

	/// Match the container's displayed rect, back it with a buffer at device
	/// resolution, and scale drawing so callers keep using logical units.
	pub fn resize<H: SurfaceHost + ?Sized>(&mut self, host: &mut H) {
		let (width, height) = host.container_size();
		let ratio = host.device_pixel_ratio();
		let ratio = if ratio.is_finite() && ratio > 0.0 {
			ratio
		} else {
			1.0
		};

		self.width = width.max(0.0);
		self.height = height.max(0.0);
		self.pixel_ratio = ratio;

		host.set_buffer_size(
			(self.width * ratio) as u32,
			(self.height * ratio) as u32,
		);
		host.set_display_size(self.width, self.height);
		host.set_pixel_scale(ratio);
	}
}
