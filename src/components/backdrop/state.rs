//! Backdrop state and the per-frame sequence.
//!
//! One owned context holds the surface, the particle field and the paths.
//! The component calls [`BackdropState::frame`] from its animation callback
//! and [`BackdropState::resize`] from its resize listener; both run to
//! completion on the single browser thread, so a resize is never observed
//! half-applied by a frame.

use log::debug;

use super::canvas::{Painter, SurfaceHost};
use super::particles::ParticleField;
use super::paths::{self, PricePath};
use super::random::UniformSource;
use super::render;
use super::surface::Surface;
use super::theme::Theme;

/// How the backdrop moves, decided once at start-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionMode {
	/// Continuous animation, one frame per repaint.
	Animating,
	/// A single fully revealed frame for reduced-motion users.
	Static,
}

impl MotionMode {
	pub fn from_reduced_motion(reduced: bool) -> Self {
		if reduced { Self::Static } else { Self::Animating }
	}
}

/// What the caller should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
	/// Schedule another frame before the next repaint.
	Next,
	/// Stop; nothing will change any more.
	Done,
}

/// Everything the backdrop animates, owned in one place.
pub struct BackdropState<R> {
	pub surface: Surface,
	pub particles: ParticleField,
	pub paths: Vec<PricePath>,
	pub theme: Theme,
	mode: MotionMode,
	static_drawn: bool,
	rng: R,
}

impl<R: UniformSource> BackdropState<R> {
	/// Size the surface from `host` and populate particles and paths.
	pub fn new<H: SurfaceHost + ?Sized>(theme: Theme, mode: MotionMode, host: &mut H, mut rng: R) -> Self {
		let surface = Surface::measure(host);
		let particles = ParticleField::new(&theme.particles, surface.width, surface.height, &mut rng);
		let paths = paths::generate(&theme.paths, &theme.reveal, surface.width, surface.height, &mut rng);

		Self {
			surface,
			particles,
			paths,
			theme,
			mode,
			static_drawn: false,
			rng,
		}
	}

	pub fn mode(&self) -> MotionMode {
		self.mode
	}

	/// React to a container resize: resize the surface, regenerate the paths
	/// from scratch and scatter the particles over the new bounds.
	///
	/// Resizing wipes the backing buffer, so a static backdrop becomes due
	/// for one more frame.
	pub fn resize<H: SurfaceHost + ?Sized>(&mut self, host: &mut H) {
		self.surface.resize(host);
		self.static_drawn = false;
		let (w, h) = (self.surface.width, self.surface.height);
		self.paths = paths::generate(&self.theme.paths, &self.theme.reveal, w, h, &mut self.rng);
		self.particles.reseed(w, h, &mut self.rng);
		debug!(
			"backdrop: resized to {}x{} @{}x",
			w, h, self.surface.pixel_ratio
		);
	}

	/// Draw one frame according to the motion mode.
	pub fn frame<P: Painter + ?Sized>(&mut self, painter: &mut P) -> FrameRequest {
		match self.mode {
			MotionMode::Animating => {
				self.animate(painter);
				FrameRequest::Next
			}
			MotionMode::Static => {
				if !self.static_drawn {
					self.draw_static(painter);
					self.static_drawn = true;
				}
				FrameRequest::Done
			}
		}
	}

	fn animate<P: Painter + ?Sized>(&mut self, painter: &mut P) {
		painter.clear_rect(0.0, 0.0, self.surface.width, self.surface.height);
		self.particles.advance(&mut self.rng);
		render::draw_links(&self.particles, &self.theme.links, painter);
		render::draw_particles(&self.particles, &self.theme.particles, painter);
		for path in &mut self.paths {
			path.tick(1);
			render::draw_path(path, painter);
		}
	}

	/// Particles where they started, paths fully drawn.
	fn draw_static<P: Painter + ?Sized>(&mut self, painter: &mut P) {
		render::draw_links(&self.particles, &self.theme.links, painter);
		render::draw_particles(&self.particles, &self.theme.particles, painter);
		for path in &mut self.paths {
			path.reveal_all();
			render::draw_path(path, painter);
		}
	}
}
