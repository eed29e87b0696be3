//! Geometric Brownian motion paths and their progressive reveal.

use super::random::{UniformSource, gaussian};
use super::theme::{PathStyle, RevealStyle};

/// A point of a path in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathPoint {
	pub x: f64,
	pub y: f64,
}

/// One price-like curve, revealed a little more every frame.
#[derive(Clone, Debug)]
pub struct PricePath {
	pub points: Vec<PathPoint>,
	pub style: PathStyle,
	elapsed: u32,
	duration: u32,
}

impl PricePath {
	pub fn new(points: Vec<PathPoint>, style: PathStyle, duration: u32) -> Self {
		Self {
			points,
			style,
			elapsed: 0,
			duration: duration.max(1),
		}
	}

	/// Fraction of the path revealed so far, in `[0, 1]`.
	pub fn progress(&self) -> f64 {
		self.elapsed as f64 / self.duration as f64
	}

	/// Advance the reveal by `frames`, saturating at fully drawn.
	pub fn tick(&mut self, frames: u32) {
		self.elapsed = self.elapsed.saturating_add(frames).min(self.duration);
	}

	pub fn reveal_all(&mut self) {
		self.elapsed = self.duration;
	}

	pub fn is_revealed(&self) -> bool {
		self.elapsed >= self.duration
	}

	/// Index of the last revealed point.
	pub fn revealed_end(&self) -> usize {
		let last = self.points.len().saturating_sub(1);
		(self.progress() * last as f64).floor() as usize
	}
}

/// Simulate `steps` values of a geometric Brownian motion starting at `start`.
///
/// Uses the exact log-space step with `dt = 1 / steps`, so every value stays
/// strictly positive.
pub fn simulate_gbm<R: UniformSource + ?Sized>(
	mu: f64,
	sigma: f64,
	start: f64,
	steps: usize,
	rng: &mut R,
) -> Vec<f64> {
	if steps == 0 {
		return Vec::new();
	}
	let dt = 1.0 / steps as f64;
	let drift = (mu - 0.5 * sigma * sigma) * dt;
	let diffusion = sigma * dt.sqrt();

	let mut values = Vec::with_capacity(steps);
	values.push(start);
	for i in 1..steps {
		let prev = values[i - 1];
		values.push(prev * (drift + diffusion * gaussian(rng)).exp());
	}
	values
}

/// Rescale a sequence onto `[0, 1]` by its own extremes.
///
/// A flat sequence has no extremes to stretch between and maps to `0.5`.
pub fn normalize(values: &[f64]) -> Vec<f64> {
	let (min, max) = values
		.iter()
		.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
			(lo.min(v), hi.max(v))
		});
	let range = max - min;
	if range > 0.0 {
		values.iter().map(|v| (v - min) / range).collect()
	} else {
		vec![0.5; values.len()]
	}
}

/// Build a fresh, unrevealed path for every style.
pub fn generate<R: UniformSource + ?Sized>(
	styles: &[PathStyle],
	reveal: &RevealStyle,
	width: f64,
	height: f64,
	rng: &mut R,
) -> Vec<PricePath> {
	let band = height * reveal.band;
	let span = reveal.steps.saturating_sub(1).max(1) as f64;

	styles
		.iter()
		.map(|style| {
			let values = simulate_gbm(style.mu, style.sigma, reveal.start_price, reveal.steps, rng);
			let center = height * style.start_y;
			let points = normalize(&values)
				.into_iter()
				.enumerate()
				.map(|(i, n)| PathPoint {
					x: i as f64 / span * width,
					y: center - (n - 0.5) * band,
				})
				.collect();
			PricePath::new(points, style.clone(), reveal.duration)
		})
		.collect()
}
