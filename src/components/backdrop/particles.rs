//! Drifting particle field with proximity links.

use super::random::{UniformSource, gaussian};
use super::theme::{LinkStyle, ParticleStyle};

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub alpha: f64,
	pub green: u8,
	pub blue: u8,
}

/// A line to draw between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	pub opacity: f64,
}

/// Fixed-size particle ensemble on a toroidal surface.
///
/// Each frame every velocity axis gets a Gaussian kick and is then damped, so
/// speeds hover around a small stationary spread instead of random-walking
/// away. Positions wrap `margin` units outside the visible area.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	jitter: f64,
	damping: f64,
	margin: f64,
}

impl ParticleField {
	pub fn new<R: UniformSource + ?Sized>(
		style: &ParticleStyle,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let half_speed = style.speed / 2.0;
		let particles = (0..style.count)
			.map(|_| Particle {
				x: rng.range(0.0, width),
				y: rng.range(0.0, height),
				vx: rng.range(-half_speed, half_speed),
				vy: rng.range(-half_speed, half_speed),
				radius: rng.range(style.radius.0, style.radius.1),
				alpha: rng.range(style.alpha.0, style.alpha.1),
				green: channel(rng, style.green),
				blue: channel(rng, style.blue),
			})
			.collect();

		Self {
			particles,
			width,
			height,
			jitter: style.jitter,
			damping: style.damping,
			margin: style.margin,
		}
	}

	/// Advance every particle by one frame.
	pub fn advance<R: UniformSource + ?Sized>(&mut self, rng: &mut R) {
		let (w, h, m) = (self.width, self.height, self.margin);
		for p in &mut self.particles {
			p.vx += gaussian(rng) * self.jitter;
			p.vy += gaussian(rng) * self.jitter;
			p.vx *= self.damping;
			p.vy *= self.damping;
			p.x = wrap(p.x + p.vx, w, m);
			p.y = wrap(p.y + p.vy, h, m);
		}
	}

	/// Scatter every particle over new bounds; motion and looks are kept.
	pub fn reseed<R: UniformSource + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.width = width;
		self.height = height;
		for p in &mut self.particles {
			p.x = rng.range(0.0, width);
			p.y = rng.range(0.0, height);
		}
	}

	pub fn bounds(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// All pairs closer than the link distance, with their fade.
	pub fn links(&self, style: &LinkStyle) -> Vec<Link> {
		let mut links = Vec::new();
		for (a, p) in self.particles.iter().enumerate() {
			for (b, q) in self.particles.iter().enumerate().skip(a + 1) {
				let (dx, dy) = (p.x - q.x, p.y - q.y);
				let dist = (dx * dx + dy * dy).sqrt();
				if let Some(opacity) = link_opacity(dist, style) {
					links.push(Link { a, b, opacity });
				}
			}
		}
		links
	}
}

/// Opacity of a link of length `dist`, or `None` when too long to draw.
pub fn link_opacity(dist: f64, style: &LinkStyle) -> Option<f64> {
	(dist < style.distance).then(|| (1.0 - dist / style.distance) * style.max_opacity)
}

fn wrap(v: f64, bound: f64, margin: f64) -> f64 {
	if v < -margin {
		bound + margin
	} else if v > bound + margin {
		-margin
	} else {
		v
	}
}

fn channel<R: UniformSource + ?Sized>(rng: &mut R, (lo, hi): (u8, u8)) -> u8 {
	let span = hi.saturating_sub(lo) as f64;
	lo.saturating_add((rng.next_f64() * span).floor() as u8)
}
