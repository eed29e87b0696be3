//! Uniform random sources and the Gaussian sampler built on them.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniform deviates in `[0, 1)`.
pub trait UniformSource {
	fn next_f64(&mut self) -> f64;

	/// Uniform deviate in `[lo, hi)`.
	fn range(&mut self, lo: f64, hi: f64) -> f64 {
		lo + self.next_f64() * (hi - lo)
	}
}

/// `Math.random()` from the host page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandom;

impl UniformSource for BrowserRandom {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Reproducible source for tests and captures.
#[derive(Clone, Debug)]
pub struct SeededRandom(SmallRng);

impl SeededRandom {
	pub fn new(seed: u64) -> Self {
		Self(SmallRng::seed_from_u64(seed))
	}
}

impl UniformSource for SeededRandom {
	fn next_f64(&mut self) -> f64 {
		self.0.random::<f64>()
	}
}

/// Standard normal deviate via Box-Muller.
///
/// Zero draws are rejected so the logarithm stays finite.
pub fn gaussian<R: UniformSource + ?Sized>(rng: &mut R) -> f64 {
	let u = nonzero(rng);
	let v = nonzero(rng);
	(-2.0 * u.ln()).sqrt() * (TAU * v).cos()
}

fn nonzero<R: UniformSource + ?Sized>(rng: &mut R) -> f64 {
	loop {
		let x = rng.next_f64();
		if x != 0.0 {
			return x;
		}
	}
}
